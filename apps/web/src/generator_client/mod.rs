//! Generator client: the single point of entry for calls to the curriculum
//! generation service.
//!
//! ARCHITECTURAL RULE: no other module talks to the generator over HTTP.
//! The pipeline only sees the `CurriculumGenerator` trait, so handlers can be
//! exercised against a stub.
//!
//! The client has no retry loop and no request timeout, and it
//! never inspects the status code: any body that decodes as JSON is handed to
//! the normalizer.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::curriculum::models::GenerationRequest;

/// Path of the generation endpoint, relative to the configured base URL.
pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the decoded JSON body for a request, shape not yet inspected.
///
/// Carried in `AppState` as `Arc<dyn CurriculumGenerator>`.
#[async_trait]
pub trait CurriculumGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GeneratorError>;
}

/// Calls `POST {base_url}/api/generate` with the request as a JSON body.
#[derive(Clone)]
pub struct HttpGenerator {
    client: Client,
    endpoint: String,
}

impl HttpGenerator {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{GENERATE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CurriculumGenerator for HttpGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GeneratorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Generator returned {status}; decoding body anyway");
        }

        let decoded: Value = serde_json::from_str(&body)?;
        debug!("Generator response: {decoded}");

        Ok(decoded)
    }
}
