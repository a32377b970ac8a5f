use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;

use crate::{PollError, PollFailure, StatusSnapshot};

#[derive(Debug, Clone)]
pub struct PollSettings {
    /// Full URL of the status document.
    pub endpoint: String,
    pub interval: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Statuses after which polling stops. Compared case-insensitively.
    pub terminal_statuses: Vec<String>,
}

impl PollSettings {
    /// Settings for the reference data-quality document of `model_uuid`.
    pub fn for_model(api_base_url: &str, model_uuid: &str) -> Self {
        Self {
            endpoint: format!(
                "{}/api/models/{}/reference/data-quality",
                api_base_url.trim_end_matches('/'),
                model_uuid
            ),
            ..Self::default()
        }
    }

    pub fn is_terminal(&self, job_status: &str) -> bool {
        let status = job_status.trim();
        self.terminal_statuses
            .iter()
            .any(|terminal| terminal.eq_ignore_ascii_case(status))
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            interval: Duration::from_secs(3),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            max_bytes: 8 * 1024 * 1024,
            terminal_statuses: vec!["SUCCEEDED".to_string(), "ERROR".to_string()],
        }
    }
}

/// Anything that can answer "what is the job status right now".
#[async_trait::async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PollError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusPayload {
    job_status: String,
}

/// Polls over HTTP. One client, and so one connection pool, serves every
/// round.
#[derive(Debug, Clone)]
pub struct ReqwestStatusSource {
    settings: PollSettings,
    client: reqwest::Client,
}

impl ReqwestStatusSource {
    pub fn new(settings: PollSettings) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| PollError::new(PollFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn too_large(&self, actual: u64) -> PollError {
        PollError::new(
            PollFailure::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "status payload too large",
        )
    }
}

#[async_trait::async_trait]
impl StatusSource for ReqwestStatusSource {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PollError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| PollError::new(PollFailure::InvalidUrl, err.to_string()))?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::new(
                PollFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let payload: StatusPayload = serde_json::from_slice(&body)
            .map_err(|err| PollError::new(PollFailure::MalformedPayload, err.to_string()))?;

        Ok(StatusSnapshot {
            job_status: payload.job_status,
            byte_len: body.len() as u64,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> PollError {
    if err.is_timeout() {
        return PollError::new(PollFailure::Timeout, err.to_string());
    }
    PollError::new(PollFailure::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_built_from_base_and_model() {
        let settings = PollSettings::for_model("http://localhost:9000/", "abc-123");
        assert_eq!(
            settings.endpoint,
            "http://localhost:9000/api/models/abc-123/reference/data-quality"
        );
    }

    #[test]
    fn terminal_statuses_match_ignoring_case() {
        let settings = PollSettings::default();
        assert!(settings.is_terminal("SUCCEEDED"));
        assert!(settings.is_terminal(" error "));
        assert!(!settings.is_terminal("IMPORTING"));
        assert!(!settings.is_terminal("MISSING_REFERENCE"));
    }
}
