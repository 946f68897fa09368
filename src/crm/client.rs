use reqwest::StatusCode;
use serde_json::Value;

use super::types::SubmissionPayload;
use crate::config::{CrmConfig, CustomFieldKeys};
use crate::form::FormData;
use crate::scoring::Qualification;

#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    /// Non-success response from the contacts endpoint.
    #[error("CRM API error: {status} - {message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the CRM contacts endpoint.
///
/// Holds one `reqwest::Client` and the CRM credentials; cheap to clone.
#[derive(Debug, Clone)]
pub struct CrmClient {
    http: reqwest::Client,
    config: CrmConfig,
}

impl CrmClient {
    pub fn new(config: CrmConfig) -> Result<Self, CrmError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Point the client at a different endpoint (e.g. a mock server).
    #[cfg(test)]
    fn with_api_url(mut self, api_url: &str) -> Self {
        self.config.api_url = api_url.to_string();
        self
    }

    /// Submit one scored lead as a tagged contact.
    ///
    /// Exactly one POST per call; no retry and no idempotency key, so
    /// repeated calls produce independent contact updates on the CRM side.
    /// A 2xx response body is returned verbatim.
    pub async fn submit_lead(
        &self,
        form: &FormData,
        score: u32,
        qualification: Qualification,
        tag: &str,
        keys: &CustomFieldKeys,
    ) -> Result<Value, CrmError> {
        let payload = SubmissionPayload::new(form, score, qualification, tag, keys);

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A non-JSON error body degrades to an empty object; the status
            // reason then stands in for the missing message.
            let body: Value = response
                .json()
                .await
                .unwrap_or_else(|_| Value::Object(Default::default()));
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(CrmError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
