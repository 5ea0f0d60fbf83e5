use std::time::Duration;

use reqwest::{Url, header::ACCEPT};
use serde::de::DeserializeOwned;

use crate::{
    core::{
        domain::{EncodedSubmission, JudgeReport, SubmissionToken},
        traits::judge::{JudgeApi, JudgeError},
    },
    judge0::models::{CreateSubmissionBody, SubmissionBody, TokenBody},
};

/// [`JudgeApi`] backed by a Judge0 REST endpoint.
#[derive(Clone, Debug)]
pub struct Judge0Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Judge0Client {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, JudgeError> {
        let invalid = || JudgeError::InvalidBaseUrl {
            url: base_url.to_string(),
        };
        let parsed = Url::parse(base_url).map_err(|_| invalid())?;
        if parsed.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// `{base}/submissions` or `{base}/submissions/{token}`, the token being
    /// percent-encoded as a single path segment.
    fn submissions_url(&self, token: Option<&str>) -> Result<Url, JudgeError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| JudgeError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                })?;
            segments.pop_if_empty().push("submissions");
            if let Some(token) = token {
                segments.push(token);
            }
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl JudgeApi for Judge0Client {
    #[tracing::instrument(skip(self, submission))]
    async fn create_submission(
        &self,
        submission: &EncodedSubmission,
    ) -> Result<SubmissionToken, JudgeError> {
        let url = self.submissions_url(None)?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .query(&[("base64_encoded", "true"), ("wait", "false")])
            .header(ACCEPT, "application/json")
            .json(&CreateSubmissionBody::from(submission))
            .send()
            .await?;

        read_json::<TokenBody>(response).await.map(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn get_submission(&self, token: &str) -> Result<JudgeReport, JudgeError> {
        let url = self.submissions_url(Some(token))?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("base64_encoded", "true")])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json::<SubmissionBody>(response).await.map(Into::into)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, JudgeError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(JudgeError::UnexpectedStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
