//! OpenAI Chat Completions 客户端

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Llm;
use crate::errors::{PortalError, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAi {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: usize,
    temperature: f64,
}

impl OpenAi {
    pub fn new(
        client: Client,
        api_key: &str,
        model: &str,
        base_url: Option<&str>,
        max_tokens: usize,
        temperature: f64,
    ) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            max_tokens,
            temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    max_tokens: usize,
    temperature: f64,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = Request {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| PortalError::external_service(e.to_string()))?
            .json::<Response>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| PortalError::external_service("OpenAI response has no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = Request {
            model: "gpt-4o-mini".into(),
            max_tokens: 256,
            temperature: 0.4,
            messages: vec![Message {
                role: "user",
                content: "Hello".into(),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 256);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "- Attend labs"},
                "finish_reason": "stop"
            }]
        }"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("- Attend labs")
        );
    }

    #[test]
    fn test_refusal_has_no_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null, "refusal": "no"}}]}"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_malformed_response() {
        assert!(serde_json::from_str::<Response>(r#"{"choices": "nope"}"#).is_err());
        assert!(serde_json::from_str::<Response>(r#"{"model": "gpt"}"#).is_err());
    }

    #[test]
    fn test_endpoint() {
        let client = OpenAi::new(Client::new(), "k", "gpt-4o-mini", None, 1, 0.0);
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
