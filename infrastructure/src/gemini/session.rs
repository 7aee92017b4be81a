//! Gemini session management.
//!
//! Provides [`GeminiChatSession`] which implements [`ChatSession`] for
//! maintaining a conversation with a Gemini model. The REST endpoint is
//! stateless, so the session owns the wire history and resends it on every
//! call. The history only ever contains exchanges the service completed:
//! when a call fails or returns no usable text, the pending user entry is
//! popped again, keeping local and remote context in step.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use async_trait::async_trait;
use pharma_application::{ChatSession, GatewayError, GenerationParams};
use pharma_domain::{Model, priming_exchange};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// An active conversation session with a Gemini model.
///
/// Seeded with the persona priming exchange at creation. Calls are
/// serialized by the history lock, so at most one request is outstanding
/// per handle.
pub struct GeminiChatSession {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: Model,
    generation_config: GenerationConfig,
    request_timeout: Duration,
    history: Mutex<Vec<Content>>,
}

impl GeminiChatSession {
    pub(crate) fn new(
        http: reqwest::Client,
        api_key: String,
        base_url: &str,
        params: &GenerationParams,
    ) -> Self {
        info!("Starting chat session with model: {}", params.model);

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            params.model
        );

        let seed: Vec<Content> = priming_exchange().iter().map(Content::from).collect();

        Self {
            http,
            api_key,
            endpoint,
            model: params.model.clone(),
            generation_config: GenerationConfig::from(params),
            request_timeout: params.request_timeout(),
            history: Mutex::new(seed),
        }
    }

    async fn generate(&self, contents: &[Content]) -> Result<GenerateContentResponse> {
        debug!(
            "POST {} ({} history entries)",
            self.endpoint,
            contents.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.request_timeout)
            .json(&GenerateContentRequest {
                contents,
                generation_config: self.generation_config.clone(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }

    #[cfg(test)]
    async fn wire_history(&self) -> Vec<Content> {
        self.history.lock().await.clone()
    }
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        // Holding the lock across the request serializes calls per handle.
        let mut history = self.history.lock().await;
        history.push(Content::user(content));

        let outcome = self.generate(&history).await;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                history.pop();
                return Err(e.into_gateway_error());
            }
        };

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            history.pop();
            return Err(GeminiError::Blocked(reason).into_gateway_error());
        }

        match response.reply_text() {
            Some(text) => {
                history.push(Content::model(&text));
                Ok(text)
            }
            None => {
                history.pop();
                Err(GeminiError::NoCandidates.into_gateway_error())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::protocol::{MODEL_ROLE, USER_ROLE};
    use pharma_domain::{PERSONA_ACKNOWLEDGMENT, PERSONA_INSTRUCTION};

    fn session(base_url: &str) -> GeminiChatSession {
        GeminiChatSession::new(
            reqwest::Client::new(),
            "test-key".to_string(),
            base_url,
            &GenerationParams::default(),
        )
    }

    #[tokio::test]
    async fn test_session_is_seeded_with_priming_exchange() {
        let session = session("https://generativelanguage.googleapis.com");
        let history = session.wire_history().await;

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, USER_ROLE);
        assert_eq!(history[0].text(), PERSONA_INSTRUCTION);
        assert_eq!(history[1].role, MODEL_ROLE);
        assert_eq!(history[1].text(), PERSONA_ACKNOWLEDGMENT);
    }

    #[tokio::test]
    async fn test_endpoint_includes_model() {
        let session = session("https://generativelanguage.googleapis.com/");
        assert_eq!(
            session.endpoint,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_failed_send_pops_pending_user_entry() {
        // Nothing listens on this port; the request fails at connect time.
        let session = session("http://127.0.0.1:9");

        let result = session.send("What is amoxicillin?").await;
        assert!(result.is_err());

        // The wire history is back to the priming exchange alone, so the
        // next call cannot reference context the service never received.
        let history = session.wire_history().await;
        assert_eq!(history.len(), 2);
    }
}
