//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Backend/Transport Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Network { message: String },

    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("{}", message.as_deref().unwrap_or("Unknown error"))]
    Application { message: Option<String> },

    #[error("Log stream error: {message}")]
    Stream { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown app '{value}' (expected sonarr, radarr, lidarr or readarr)")]
    InvalidApp { value: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Application-level failure reported by the backend (`success: false`).
    pub fn application(message: Option<String>) -> Self {
        Self::Application { message }
    }

    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_app(value: impl Into<String>) -> Self {
        Self::InvalidApp {
            value: value.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Network { .. }
                | Error::Http { .. }
                | Error::Application { .. }
                | Error::Stream { .. }
                | Error::Json(_)
                | Error::ChannelClosed
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Request Failures (cloneable, carried in messages)
// ─────────────────────────────────────────────────────────────────

/// Why a backend call failed, in the two shapes the UI distinguishes.
///
/// [`Error`] is not `Clone` (it wraps `io::Error`/`serde_json::Error`), so
/// background tasks convert into this before reporting back to the TEA loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Network(String),

    /// The backend answered with `success: false`.
    #[error("{}", message.as_deref().unwrap_or("Unknown error"))]
    Application { message: Option<String> },
}

impl RequestError {
    /// Server-supplied message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Application { message } => message.as_deref(),
            RequestError::Network(_) => None,
        }
    }
}

impl From<Error> for RequestError {
    fn from(err: Error) -> Self {
        match err {
            Error::Application { message } => RequestError::Application { message },
            other => RequestError::Network(other.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with `context`, then pass it on
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::network("Connection refused");
        assert_eq!(err.to_string(), "Connection refused");

        let err = Error::Http { status: 502 };
        assert_eq!(err.to_string(), "Server responded with HTTP 502");
    }

    #[test]
    fn test_application_error_falls_back_to_unknown() {
        assert_eq!(Error::application(None).to_string(), "Unknown error");
        assert_eq!(
            Error::application(Some("bad key".into())).to_string(),
            "bad key"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(!Error::network("down").is_fatal());
        assert!(!Error::config("bad").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::network("down").is_recoverable());
        assert!(Error::Http { status: 500 }.is_recoverable());
        assert!(Error::application(None).is_recoverable());
        assert!(Error::stream("eof").is_recoverable());
        assert!(!Error::TerminalInit("x".into()).is_recoverable());
    }

    #[test]
    fn test_terminal_error_message() {
        let err = Error::terminal("draw failed");
        assert_eq!(err.to_string(), "Terminal error: draw failed");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_context_passes_error_through() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("Creating log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let ok: std::result::Result<u8, Error> = Ok(3);
        assert_eq!(ok.context("unused").unwrap(), 3);
    }

    #[test]
    fn test_channel_closed_is_recoverable() {
        assert!(Error::ChannelClosed.is_recoverable());
    }

    #[test]
    fn test_invalid_app_message() {
        let err = Error::invalid_app("plex");
        assert!(err.to_string().contains("'plex'"));
    }

    #[test]
    fn test_request_error_from_application_keeps_message() {
        let req: RequestError = Error::application(Some("Invalid API key".into())).into();
        assert_eq!(
            req,
            RequestError::Application {
                message: Some("Invalid API key".into())
            }
        );
        assert_eq!(req.server_message(), Some("Invalid API key"));
    }

    #[test]
    fn test_request_error_from_transport_is_network() {
        let req: RequestError = Error::Http { status: 404 }.into();
        assert_eq!(
            req,
            RequestError::Network("Server responded with HTTP 404".into())
        );
        assert_eq!(req.server_message(), None);
    }
}
