//! CorpusDb Core Library
//!
//! This crate provides the shared types for the CorpusDb client, including:
//! - Client configuration
//! - Document and bulk-import models

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
