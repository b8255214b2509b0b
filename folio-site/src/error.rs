// Site generation error types

use std::fmt;
use std::io;

/// Errors that can occur while loading content or writing the site
#[derive(Debug)]
pub enum SiteError {
    /// Reading content or writing output failed
    Io(String),
    /// Content file is not valid JSON for `SiteContent`
    ContentParse(String),
    /// Content parsed but cannot produce a page
    InvalidContent(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::ContentParse(msg) => write!(f, "Failed to parse content: {}", msg),
            Self::InvalidContent(msg) => write!(f, "Invalid content: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::ContentParse(err.to_string())
    }
}

/// Result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidContent("name is empty".to_string());
        assert_eq!(err.to_string(), "Invalid content: name is empty");

        let err = SiteError::Io("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::ContentParse(_)));
    }
}
