//! Error types for writing simulation output

use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while writing run artifacts
#[derive(Error, Debug)]
pub enum ReportError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer or reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering failed
    #[error("Chart error: {0}")]
    Chart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Chart("backend closed".into());
        assert_eq!(err.to_string(), "Chart error: backend closed");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(ReportError::from(io).to_string().contains("disk full"));
    }
}
