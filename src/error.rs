//! Error types for storagectl
//!
//! Every command returns [`Result`]; the binary prints the error and maps it
//! to a process exit code.

use thiserror::Error;

/// Unified error type for the CLI
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Kubernetes Errors
    // =========================================================================
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("failed to list blockdevices in the {namespace} namespace: {source}")]
    Fetch {
        namespace: String,
        #[source]
        source: Box<Error>,
    },

    #[error("no blockdevices found in the {namespace} namespace")]
    NotFound { namespace: String },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an upstream failure raised while listing devices in `namespace`
    pub fn fetch(namespace: impl Into<String>, source: Error) -> Self {
        Error::Fetch {
            namespace: namespace.into(),
            source: Box::new(source),
        }
    }

    /// The query succeeded but matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for the CLI
pub type Result<T> = std::result::Result<T, Error>;
