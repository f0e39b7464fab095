//! Feature flags configuration

use serde::Deserialize;

use crate::domain::wizard::NavigationPolicy;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Lock wizard tabs until the step has content to show
    #[serde(default = "default_true")]
    pub gate_navigation: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl FeatureFlags {
    pub fn navigation_policy(&self) -> NavigationPolicy {
        if self.gate_navigation {
            NavigationPolicy::Gated
        } else {
            NavigationPolicy::Free
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            gate_navigation: true,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}
