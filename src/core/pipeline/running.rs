use crate::core::{
    domain::{ExecutionResult, SubmissionRequest},
    errors::RelayError,
    pipeline::{polling::PollPolicy, polling::poll_result, submitting::submit},
    traits::judge::JudgeApi,
};

/// Submits the code and waits for its verdict in one go.
#[tracing::instrument(skip(api, request, policy))]
pub async fn run(
    api: &dyn JudgeApi,
    request: &SubmissionRequest,
    policy: &PollPolicy,
) -> Result<ExecutionResult, RelayError> {
    let token = submit(api, request).await?;
    poll_result(api, &token.token, policy).await
}
