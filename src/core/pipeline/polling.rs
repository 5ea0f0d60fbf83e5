use std::time::Duration;

use crate::core::{domain::ExecutionResult, errors::RelayError, traits::judge::JudgeApi};

/// How often and how long to ask the judge for a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until the judge reports a verdict, however long it takes.
    pub max_attempts: Option<u32>,
}

impl PollPolicy {
    /// A `max_attempts` of zero means unbounded.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: (max_attempts > 0).then_some(max_attempts),
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 60)
    }
}

/// Polls until the submission leaves the pending states, then decodes it.
///
/// Text fields are decoded only once a terminal status has been observed.
#[tracing::instrument(skip(api, policy))]
pub async fn poll_result(
    api: &dyn JudgeApi,
    token: &str,
    policy: &PollPolicy,
) -> Result<ExecutionResult, RelayError> {
    if token.trim().is_empty() {
        return Err(RelayError::InvalidToken);
    }

    let mut attempts = 0;
    loop {
        attempts += 1;
        let report = api.get_submission(token).await.map_err(|e| {
            tracing::error!("Failed to fetch result: {}", e);
            RelayError::Fetch(e)
        })?;
        tracing::debug!("Attempt {}: status {:?}", attempts, report.status);

        if report.status.is_terminal() {
            let result = ExecutionResult::from(report);
            tracing::info!(
                "Submission finished after {} attempts: {}",
                attempts,
                result.status.description
            );
            return Ok(result);
        }

        if policy.max_attempts.is_some_and(|max| attempts >= max) {
            tracing::warn!("Giving up after {} attempts", attempts);
            return Err(RelayError::PollTimeout {
                token: token.to_string(),
                attempts,
            });
        }

        tokio::time::sleep(policy.interval).await;
    }
}
