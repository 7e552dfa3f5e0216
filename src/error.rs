//! Error types for fingerprint generation and cloak installation.

use thiserror::Error;

/// Errors surfaced by the cloaking engine.
///
/// In-page failures (a missing override target such as WebGL) are recovered
/// inside the injected script and never reach this type. What does reach the
/// caller is unrecoverable: a bad seed, an empty profile corpus, or a driver
/// that failed to install the init script before navigation.
#[derive(Debug, Error)]
pub enum Error {
    /// The session seed was empty. Fingerprint derivation needs at least one
    /// byte of input to hash.
    #[error("session seed must not be empty")]
    EmptySeed,

    /// The profile corpus produced no candidates for the requested category.
    #[error("profile corpus has no candidates for device category '{category}'")]
    EmptyCorpus { category: String },

    /// The driver failed to install the init script or apply a setup command.
    /// The page must be treated as unusable: navigating it would run page
    /// scripts against the unspoofed environment.
    #[error("cloak installation failed: {0}")]
    Injection(String),

    /// Any other page/driver failure during cloak setup.
    #[error(transparent)]
    Page(#[from] anyhow::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a driver error as an injection failure.
    pub fn injection(err: impl std::fmt::Display) -> Self {
        Self::Injection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySeed;
        assert_eq!(err.to_string(), "session seed must not be empty");

        let err = Error::EmptyCorpus {
            category: "desktop".to_string(),
        };
        assert!(err.to_string().contains("desktop"));

        let err = Error::injection("CDP timed out");
        assert!(err.to_string().contains("CDP timed out"));
    }
}
