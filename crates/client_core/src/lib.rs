use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{BlueprintResponse, GenerateBlueprintRequest, ServiceErrorBody};
use tracing::{debug, error};

pub mod error;
pub mod render;

pub use error::{GenerateError, GENERIC_NETWORK_FAILURE, GENERIC_SERVICE_FAILURE};
pub use render::{render_blueprint, RenderedBlueprint};

/// Seam between the orchestration layer and the generation service, so the
/// GUI worker and tests share one call shape.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateBlueprintRequest,
    ) -> Result<BlueprintResponse, GenerateError>;
}

/// HTTP client for the generation service. One POST per call, no retry, no
/// timeout; an in-flight request runs to completion or transport failure.
pub struct BlueprintClient {
    http: Client,
    server_url: String,
}

impl BlueprintClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

#[async_trait]
impl GenerationService for BlueprintClient {
    async fn generate(
        &self,
        request: &GenerateBlueprintRequest,
    ) -> Result<BlueprintResponse, GenerateError> {
        debug!(idea_len = request.idea.len(), "submitting generation request");
        let response = self
            .http
            .post(format!("{}/generate", self.server_url))
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!("generation request transport failure: {err}");
                GenerateError::Transport(err)
            })?;

        let status = response.status();
        if status.is_success() {
            let body: BlueprintResponse = response.json().await?;
            debug!(scenes = body.blueprint.len(), "blueprint received");
            return Ok(body);
        }

        // The error body is best-effort; a missing or malformed one means the
        // caller falls back to the generic message.
        let body: ServiceErrorBody = response.json().await.unwrap_or_default();
        Err(GenerateError::Service {
            status: status.as_u16(),
            message: body.error,
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
