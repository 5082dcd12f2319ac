use std::error::Error as StdError;

use thiserror::Error;

/// The error taxonomy every backend speaks.
///
/// Backends never leak their own failure types: a delegate or loader error
/// that is not already a `ConfigError` is wrapped into
/// [`Runtime`](ConfigError::Runtime) with the original error preserved as
/// its source.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested option does not exist and no fallback was supplied.
    /// Recoverable: [`has`](crate::OptionStore::has) maps it to `false`.
    #[error("Missing configuration option: {0}")]
    MissingOption(String),

    /// A value was rejected by backend-specific normalization.
    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    /// An unexpected failure from a delegate or loader, wrapped so callers
    /// only ever observe this crate's taxonomy.
    #[error("Configuration failure: {message}")]
    Runtime {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ConfigError {
    /// Wrap a foreign error into the [`Runtime`](ConfigError::Runtime) kind.
    pub fn runtime(message: impl Into<String>, source: anyhow::Error) -> Self {
        ConfigError::Runtime {
            message: message.into(),
            source: source.into(),
        }
    }

    /// True for the one recoverable kind, [`MissingOption`](ConfigError::MissingOption).
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::MissingOption(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_option_names_the_key() {
        let err = ConfigError::MissingOption("database.url".into());
        assert!(err.to_string().contains("database.url"));
        assert!(err.is_missing());
    }

    #[test]
    fn invalid_option_formats() {
        let err = ConfigError::InvalidOption {
            key: "port".into(),
            reason: "expected an integer".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("expected an integer"));
        assert!(!err.is_missing());
    }

    #[test]
    fn runtime_preserves_the_source_chain() {
        let cause = anyhow::anyhow!("connection refused");
        let err = ConfigError::runtime("could not reach backend", cause);
        assert!(err.to_string().contains("could not reach backend"));
        let source = StdError::source(&err).expect("source");
        assert!(source.to_string().contains("connection refused"));
    }
}
