use std::path::PathBuf;

use crate::error::{Error, Result};

/// ================================
/// Run configuration
/// ================================
///
/// Maven and CodeArtifact related information, gathered once from CLI flags
/// and passed by reference into each stage of the pipeline.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// AWS CodeArtifact domain
    pub domain: String,
    /// AWS CodeArtifact domain owner (AWS account id)
    pub domain_owner: String,
    /// Server id for CodeArtifact in the Maven settings
    pub server: String,
    /// Maven settings file path
    pub settings: PathBuf,
}

/// Default location for the Maven settings file: `~/.m2/settings.xml`.
///
/// Resolved lazily, only when `--settings` is not given.
pub fn default_maven_settings() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .ok_or(Error::HomeDir)?;
    Ok(PathBuf::from(home).join(".m2").join("settings.xml"))
}
