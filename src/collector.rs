use std::time::Duration;

use serde::Deserialize;

use crate::model::SubmissionRecord;

/// Client for the external results collector. One request, one response;
/// the controller never retries.
#[derive(Debug, Clone)]
pub struct Collector {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    result_id: Option<String>,
    error: Option<String>,
}

impl Collector {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Cannot build HTTP client: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// POST the record; returns the collector's opaque result id.
    pub fn submit(&self, record: &SubmissionRecord) -> Result<String, String> {
        let url = format!("{}/api/quiz/submit", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .map_err(|e| format!("NETWORK: {}", e))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| format!("Cannot read collector response: {}", e))?;

        // Error pages are not always JSON; fall back to the status line.
        let body: SubmitResponse = serde_json::from_str(&text).unwrap_or(SubmitResponse {
            result_id: None,
            error: None,
        });

        if !status.is_success() {
            return Err(body
                .error
                .unwrap_or_else(|| format!("Collector returned {}", status)));
        }

        body.result_id
            .ok_or_else(|| "Collector response missing resultId".to_string())
    }
}
