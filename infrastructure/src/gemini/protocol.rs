//! Request/response types for the `generateContent` endpoint
//!
//! The wire format tags turns with "user" and "model" roles; domain
//! [`Role::Assistant`] maps to "model" on the way out.

use pharma_application::GenerationParams;
use pharma_domain::{Role, Turn};
use serde::{Deserialize, Serialize};

pub const USER_ROLE: &str = "user";
pub const MODEL_ROLE: &str = "model";

/// One entry of the conversation history as the API sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: USER_ROLE.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: MODEL_ROLE.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// All part texts joined together.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        match turn.role {
            Role::User => Content::user(&turn.text),
            Role::Assistant => Content::model(&turn.text),
        }
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: &'a [Content],
    pub generation_config: GenerationConfig,
}

/// Sampling settings in wire form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

/// Response body of `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error body the API returns on non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

impl GenerateContentResponse {
    /// Reply text of the first candidate, if it carries any.
    pub fn reply_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::text)?;
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let contents = vec![Content::user("What is aspirin?")];
        let request = GenerateContentRequest {
            contents: &contents,
            generation_config: GenerationConfig {
                temperature: 0.4,
                max_output_tokens: 500,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "What is aspirin?");
        assert_eq!(value["generationConfig"]["temperature"], 0.4);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 500);
    }

    #[test]
    fn test_turn_role_mapping() {
        let user: Content = (&Turn::user("q")).into();
        let assistant: Content = (&Turn::assistant("a")).into();
        assert_eq!(user.role, USER_ROLE);
        assert_eq!(assistant.role, MODEL_ROLE);
    }

    #[test]
    fn test_response_parse_and_reply_text() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Aspirin is "}, {"text": "a pain reliever."}]
                },
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.reply_text().unwrap(),
            "Aspirin is a pain reliever."
        );
    }

    #[test]
    fn test_empty_candidates_has_no_reply() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn test_blocked_prompt_feedback() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.reply_text().is_none());
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_api_error_body_parse() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.code, 400);
        assert_eq!(parsed.error.message, "API key not valid.");
    }
}
