use crate::core::domain::{EncodedSubmission, JudgeReport, SubmissionToken};

/// Failure talking to the remote judge.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("judge responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("invalid judge base url: {url}")]
    InvalidBaseUrl { url: String },
}

#[mockall::automock]
#[async_trait::async_trait]
pub trait JudgeApi: std::fmt::Debug + Send + Sync {
    /// Creates a submission without waiting for it to finish.
    async fn create_submission(
        &self,
        submission: &EncodedSubmission,
    ) -> Result<SubmissionToken, JudgeError>;

    /// Fetches the current state of a submission, text fields base64.
    async fn get_submission(&self, token: &str) -> Result<JudgeReport, JudgeError>;
}
