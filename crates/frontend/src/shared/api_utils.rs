//! API utilities for frontend-backend communication
//!
//! URL construction and the error type every network call returns.

use contracts::domain::a001_event::aggregate::EventId;

/// Port the backend listens on when the page comes from the dev server
pub const API_PORT: u16 = 3000;

/// Default `trunk serve` port
const DEV_SERVER_PORT: &str = "8080";

/// Get the base URL for API requests
///
/// The backend serves the built bundle itself, so the page's own origin is
/// used, whatever `[server] port` is configured. Only a page from the dev
/// server talks to "http://<host>:3000". Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let page_port = location.port().unwrap_or_default();
    base_url(&protocol, &hostname, &page_port)
}

fn base_url(protocol: &str, hostname: &str, page_port: &str) -> String {
    match page_port {
        DEV_SERVER_PORT => format!("{}//{}:{}", protocol, hostname, API_PORT),
        "" => format!("{}//{}", protocol, hostname),
        port => format!("{}//{}:{}", protocol, hostname, port),
    }
}

/// Build a full API URL from a path such as "/events"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Everything that can go wrong with one user action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with HTTP {code}{}", status_suffix(.message))]
    Status { code: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("entry {0} is no longer in the list")]
    MissingTarget(EventId),
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// Error for a non-2xx response; `body` is the raw response text, which
    /// may carry a JSON `message` field.
    pub fn from_status(code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
        ApiError::Status { code, message }
    }

    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Rejected(message.unwrap_or_else(|| "the server rejected the request".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_follows_serving_backend() {
        assert_eq!(base_url("http:", "localhost", "4100"), "http://localhost:4100");
        assert_eq!(base_url("https:", "example.com", ""), "https://example.com");
    }

    #[test]
    fn test_base_url_from_dev_server() {
        assert_eq!(base_url("http:", "localhost", "8080"), "http://localhost:3000");
    }

    #[test]
    fn test_status_error_reads_message() {
        let err = ApiError::from_status(404, r#"{"status":"error","message":"Log not found"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                code: 404,
                message: Some("Log not found".to_string())
            }
        );
        assert_eq!(err.to_string(), "server responded with HTTP 404: Log not found");
    }

    #[test]
    fn test_status_error_without_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "server responded with HTTP 502");
    }

    #[test]
    fn test_rejected_default_message() {
        assert_eq!(
            ApiError::rejected(None).to_string(),
            "the server rejected the request"
        );
        assert_eq!(
            ApiError::MissingTarget(EventId(4)).to_string(),
            "entry 4 is no longer in the list"
        );
    }
}
