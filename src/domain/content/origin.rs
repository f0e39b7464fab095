//! Provenance of backend results.

use serde::{Deserialize, Serialize};

/// Whether a result came from the external model or the local fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Live,
    Fallback,
}

/// A backend result tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: Origin::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

/// The three capabilities a content backend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOperation {
    Generate,
    Score,
    Rephrase,
}

impl ContentOperation {
    /// Sampling temperature sent with the request.
    pub fn temperature(&self) -> f32 {
        match self {
            ContentOperation::Generate => 0.7,
            ContentOperation::Score => 0.3,
            ContentOperation::Rephrase => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentOperation::Generate => "generate",
            ContentOperation::Score => "score",
            ContentOperation::Rephrase => "rephrase",
        }
    }
}

impl std::fmt::Display for ContentOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_origin() {
        let sourced = Sourced::fallback(2).map(|n| n * 10);
        assert_eq!(sourced.value, 20);
        assert!(sourced.is_fallback());
    }

    #[test]
    fn rephrase_runs_hotter_than_generate() {
        assert!(ContentOperation::Rephrase.temperature() > ContentOperation::Generate.temperature());
        assert!(ContentOperation::Score.temperature() < ContentOperation::Generate.temperature());
    }

    #[test]
    fn origin_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Origin::Fallback).unwrap(), "\"fallback\"");
    }
}
