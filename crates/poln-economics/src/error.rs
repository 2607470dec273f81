//! Error types for the $POLN simulator

use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while loading or running a simulation
#[derive(Error, Debug)]
pub enum SimError {
    // === Input ===
    /// A parameter is outside its allowed domain
    #[error("Invalid configuration `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Layered configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A TOML or JSON document could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    // === Output ===
    /// The configuration could not be encoded
    #[error("Encode error: {0}")]
    Encode(String),
}

impl SimError {
    /// Shorthand for an [`SimError::InvalidConfig`] on a dotted field path
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by bad input rather than an output failure
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::Config(_) | Self::Parse(_))
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for SimError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::invalid("fees.staking_rate", "must lie in [0, 1], got 1.5");
        let msg = format!("{}", err);
        assert!(msg.contains("fees.staking_rate"));
        assert!(msg.contains("[0, 1]"));
    }

    #[test]
    fn test_input_errors() {
        assert!(SimError::invalid("token.total_supply", "negative").is_input_error());
        assert!(!SimError::Encode("unsupported value".into()).is_input_error());

        let toml_err = toml::from_str::<toml::Value>("[fees").unwrap_err();
        assert!(SimError::from(toml_err).is_input_error());
    }
}
