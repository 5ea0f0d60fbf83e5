use crate::core::traits::judge::JudgeError;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Submission failed: {0}")]
    Submission(#[source] JudgeError),
    #[error("Fetching result failed: {0}")]
    Fetch(#[source] JudgeError),
    #[error("Timed out waiting for result of {token} after {attempts} attempts")]
    PollTimeout { token: String, attempts: u32 },
    #[error("Token must not be empty")]
    InvalidToken,
}
