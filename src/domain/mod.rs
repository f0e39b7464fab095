//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `content` - Drafts, keywords, plagiarism results and local fallbacks
//! - `wizard` - Step controller, step views and the session aggregate

pub mod content;
pub mod foundation;
pub mod wizard;
