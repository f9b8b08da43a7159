//! Walker generation for configured system views
//!
//! This library loads the generator configuration, runs every configured
//! view through discovery, enumeration and emission, and writes the
//! resulting walkers to disk.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod theme;
pub mod writer;

pub use config::{Config, ViewConfig};
pub use pipeline::{generate_all, generate_view, Artifact};

/// Re-export common error types
pub use anyhow::{Error, Result};
