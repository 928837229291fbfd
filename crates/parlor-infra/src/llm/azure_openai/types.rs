//! Azure OpenAI chat-completions wire types.
//!
//! These are the provider-specific request/response structures for HTTP
//! communication with an Azure OpenAI deployment. They are NOT the generic
//! completion types from parlor-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AzureChatRequest {
    pub messages: Vec<AzureChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A single message in an Azure OpenAI conversation.
#[derive(Debug, Clone, Serialize)]
pub struct AzureChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a non-streaming chat completion.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureChatResponse {
    #[serde(default)]
    pub choices: Vec<AzureChoice>,
    pub usage: Option<AzureUsage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureChoice {
    pub message: AzureResponseMessage,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureResponseMessage {
    pub content: Option<String>,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AzureUsage {
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = AzureChatRequest {
            messages: vec![AzureChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_tokens: 1000,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 1000);
    }

    #[test]
    fn test_response_deserializes() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
        }"#;
        let response: AzureChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Hi there")
        );
        assert_eq!(response.usage.unwrap().total_tokens, 25);
    }

    #[test]
    fn test_response_tolerates_missing_usage() {
        let json = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
        let response: AzureChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.usage.is_none());
    }
}
