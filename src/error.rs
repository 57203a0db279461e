//! Error types for the browser client.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Http { status: u16 },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("browser interop error: {0}")]
    Interop(String),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Wrap a `JsValue` (or any debuggable JS-side failure) as an interop error.
    pub fn interop(value: impl std::fmt::Debug) -> Self {
        Self::Interop(format!("{value:?}"))
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Short message suitable for showing next to the control that failed.
    ///
    /// The full error is logged to the console separately; this string stays
    /// free of endpoint details and JS debug noise.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Network(_) => "Could not reach the detection service. Check your connection and try again.",
            Error::Http { .. } => "The detection service reported an error. Try again in a moment.",
            Error::MalformedResponse(_) => "The detection service returned an unexpected response.",
            Error::Interop(_) | Error::Config { .. } => "Something went wrong in the browser. Reload the page and try again.",
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Error::MalformedResponse(err.to_string()),
            other => Error::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = Error::http(500);
        assert_eq!(err.to_string(), "server responded with status 500");

        let err = Error::config("empty base URL");
        assert_eq!(err.to_string(), "configuration error: empty base URL");
    }

    #[test]
    fn test_interop_wraps_debug_output() {
        let err = Error::interop("no document");
        assert!(err.to_string().contains("no document"));
    }

    #[test]
    fn test_user_messages_hide_detail() {
        let err = Error::network("http://127.0.0.1:8000 unreachable");
        assert!(!err.user_message().contains("127.0.0.1"));

        let err = Error::MalformedResponse("missing field `result`".into());
        assert!(err.user_message().contains("unexpected response"));
    }

    #[test]
    fn test_from_serde_error_is_malformed() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
