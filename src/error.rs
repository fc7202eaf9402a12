use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Failure classes of a lookup run.
///
/// `Transport` and `MalformedAnswer` are per-request: the lookup client turns
/// them into sentinel results and never lets them escape. `MissingCredential`,
/// `Configuration` and `BatchLoad` are the only ones allowed to change control
/// flow for the caller.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("configuration error: OpenAI API key is required. Set {env_var} environment variable.")]
    MissingCredential { env_var: &'static str },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    MalformedAnswer(String),

    #[error("could not load products from {path:?}: {message}")]
    BatchLoad { path: PathBuf, message: String },

    #[error("could not write results to {path:?}: {message}")]
    BatchWrite { path: PathBuf, message: String },
}

impl LookupError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for every construction-time fault, a missing key included.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::MissingCredential { .. }
        )
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }
}
