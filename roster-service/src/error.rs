//! Normalized error taxonomy for the upstream placeholder API.

use reqwest::StatusCode;

/// Failure modes of an upstream fetch, normalized into the three buckets
/// the screens can show: transport, server status, and everything else.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Network error: Unable to connect to the server. Please check your internet connection.")]
    Network,

    #[error("API request failed: {}", status_label(.status))]
    Status { status: StatusCode },

    #[error("An unexpected error occurred while making the request.")]
    Unexpected,
}

impl ServiceError {
    /// Classify a raw `reqwest` error.
    pub fn from_request(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status { status };
        }

        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::Network;
        }

        Self::Unexpected
    }

    /// The human-readable message shown by the error screen.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn status_label(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_owned(),
        None => status.as_str().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_the_reason_phrase() {
        let err = ServiceError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.user_message(),
            "API request failed: Internal Server Error"
        );
    }

    #[test]
    fn network_errors_render_the_connectivity_message() {
        let message = ServiceError::Network.user_message();
        assert!(message.starts_with("Network error:"));
    }

    #[test]
    fn unknown_status_codes_fall_back_to_the_number() {
        let err = ServiceError::Status {
            status: StatusCode::from_u16(599).unwrap(),
        };
        assert_eq!(err.user_message(), "API request failed: 599");
    }
}
