//! Gemini chat gateway implementation

use crate::gemini::session::GeminiChatSession;
use async_trait::async_trait;
use pharma_application::{ChatGateway, ChatSession, GatewayError, GenerationParams};
use tracing::info;

/// Production endpoint of the generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Chat gateway backed by the Gemini REST API.
///
/// One gateway per process; each [`start_chat`](ChatGateway::start_chat)
/// call produces an independent primed session, so concurrent sessions
/// never share conversational context.
pub struct GeminiChatGateway {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiChatGateway {
    /// Create a new gateway bound to the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (for tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatGateway for GeminiChatGateway {
    async fn start_chat(
        &self,
        params: &GenerationParams,
    ) -> Result<Box<dyn ChatSession>, GatewayError> {
        if self.api_key.trim().is_empty() {
            return Err(GatewayError::SessionError(
                "API key is empty".to_string(),
            ));
        }

        info!("GeminiChatGateway: starting chat with {}", params.model);

        Ok(Box::new(GeminiChatSession::new(
            self.http.clone(),
            self.api_key.clone(),
            &self.base_url,
            params,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharma_domain::Model;

    #[tokio::test]
    async fn test_start_chat_binds_model() {
        let gateway = GeminiChatGateway::new("test-key");
        let params = GenerationParams::default().with_model(Model::Gemini15Pro);
        let session = gateway.start_chat(&params).await.unwrap();
        assert_eq!(session.model(), &Model::Gemini15Pro);
    }

    #[tokio::test]
    async fn test_empty_key_is_rejected() {
        let gateway = GeminiChatGateway::new("  ");
        let result = gateway.start_chat(&GenerationParams::default()).await;
        assert!(matches!(result, Err(GatewayError::SessionError(_))));
    }
}
