use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::errors::RelayError;

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidToken => StatusCode::BAD_REQUEST,
            RelayError::PollTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Submission(_) | RelayError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors reach the caller as plain text carrying the message.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::judge::JudgeError;

    #[test]
    fn test_status_codes() {
        let upstream = || JudgeError::UnexpectedStatus {
            status: 502,
            body: String::new(),
        };

        assert_eq!(
            RelayError::Submission(upstream()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::Fetch(upstream()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::PollTimeout {
                token: "t".to_string(),
                attempts: 3
            }
            .status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            RelayError::InvalidToken.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
