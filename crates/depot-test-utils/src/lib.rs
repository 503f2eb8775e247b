//! Shared test utilities for the file-depot workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`] — [`tree::SourceTree`] builder for nested source directories
//! - [`http`] — one-shot HTTP listener that records a single request

pub mod http;
pub mod tree;
