use crate::core::{
    domain::{EncodedSubmission, SubmissionRequest, SubmissionToken},
    errors::RelayError,
    traits::judge::JudgeApi,
};

#[tracing::instrument(skip(api, request), fields(language_id = request.language_id))]
pub async fn submit(
    api: &dyn JudgeApi,
    request: &SubmissionRequest,
) -> Result<SubmissionToken, RelayError> {
    tracing::debug!("Submitting source code: {:?}", request.source_code);
    let submission = EncodedSubmission::from(request);

    match api.create_submission(&submission).await {
        Ok(token) => {
            tracing::info!("Received token: {}", token.token);
            Ok(token)
        }
        Err(e) => {
            tracing::error!("Failed to submit code: {}", e);
            Err(RelayError::Submission(e))
        }
    }
}
