//! Error types for the translens engine
//!
//! Most of the core is total over its input domain: unknown products and
//! repositories fall back to defaults, missing string tables come back
//! empty. The variants below cover the few operations that can genuinely
//! fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Perfect-match queries anchor the raw term without escaping it, so
    /// a term containing broken regex syntax fails to compile. Substring
    /// queries are always escaped and never hit this.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// A string-table file existed but could not be read or parsed.
    #[error("Failed to load string table: {0}")]
    DataLoad(String),

    /// CLI argument validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Stable machine-readable code for --json output.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidPattern(_) => "invalid_pattern",
            AppError::DataLoad(_) => "data_load_failed",
            AppError::InvalidInput(_) => "invalid_input",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DataLoad(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DataLoad(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::InvalidPattern("unclosed group".to_string());
        assert_eq!(error.to_string(), "Invalid search pattern: unclosed group");
        assert_eq!(error.error_code(), "invalid_pattern");

        let error = AppError::InvalidInput("too many locales".to_string());
        assert_eq!(error.to_string(), "Invalid input: too many locales");
        assert_eq!(error.error_code(), "invalid_input");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = AppError::from(io);
        assert_eq!(error.error_code(), "data_load_failed");
    }
}
