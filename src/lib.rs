//! Content Wizard - SEO blog writing assistant
//!
//! A three-step wizard (compose, analyze, rephrase) served over HTTP. Drafts,
//! plagiarism scores and rewrites come from a configured LLM provider, with
//! local fallbacks whenever the provider call fails.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
