//! # codeartoken
//!
//! Refreshes the AWS CodeArtifact authorization token embedded in a Maven
//! `settings.xml`: read the token currently stored for the configured server
//! id, request a fresh one from CodeArtifact, substitute it in place.
//!
//! Modules:
//! - `config` — immutable run configuration gathered from CLI flags
//! - `maven` — settings.xml lookup and in-place token substitution
//! - `source` — CodeArtifact token source behind a small trait seam
//! - `refresh` — the linear refresh pipeline

pub mod config;
pub mod error;
pub mod maven;
pub mod refresh;
pub mod source;
pub mod tests;
pub mod utils;

pub use crate::config::Configuration;
pub use crate::error::{Error, Result};
