use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("HTTP error! Status: {status}")]
    BadStatus { status: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

impl VerseError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            VerseError::BadStatus { status } => {
                format!("The verse server answered with HTTP status {}", status)
            }
            VerseError::Transport(e) if e.is_timeout() => {
                "The request timed out. The verse server might be slow right now.".to_string()
            }
            VerseError::Transport(e) if e.is_connect() || e.is_request() => {
                "Connection error. Please check your internet connection and try again."
                    .to_string()
            }
            VerseError::Transport(_) => {
                "A network error occurred while reading the verse response.".to_string()
            }
            VerseError::IoError(e) => format!("I/O failure: {}", e),
            VerseError::ConfigError { .. }
            | VerseError::InvalidConfigValueError { .. }
            | VerseError::ConfigParseError(_) => format!("Invalid configuration: {}", self),
        }
    }

    /// 依錯誤類型決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            VerseError::BadStatus { .. } => 2,
            VerseError::Transport(_) => 3,
            VerseError::IoError(_)
            | VerseError::ConfigError { .. }
            | VerseError::InvalidConfigValueError { .. }
            | VerseError::ConfigParseError(_) => 1,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            VerseError::BadStatus { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_message_and_exit_code() {
        let err = VerseError::BadStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! Status: 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("404"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = VerseError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.status(), None);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
