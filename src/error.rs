use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a refresh. Nothing is retried or
/// recovered locally; each variant propagates to the top-level handler,
/// which logs it and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine user home directory")]
    HomeDir,

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings XML in {path}: {source}")]
    XmlParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("could not find server '{server}' in {path}")]
    ServerNotFound { server: String, path: PathBuf },

    #[error("server '{server}' has no password entry")]
    MissingPassword { server: String },

    #[error("AWS configuration unavailable: {0}")]
    AwsConfig(String),

    #[error("CodeArtifact token request failed: {0}")]
    TokenFetch(String),

    #[error("CodeArtifact returned an empty authorization token")]
    EmptyToken,
}
