//! Test utilities for the passattack engine
//!
//! This crate provides wordlist fixture builders and a collecting progress
//! sink for testing attack flows.

pub mod builders;
pub mod sinks;

// Re-export commonly used types
pub use builders::WordlistBuilder;
pub use sinks::CollectingSink;
