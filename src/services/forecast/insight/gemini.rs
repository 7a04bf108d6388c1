//! Gemini `generateContent` 客户端

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Llm;
use crate::errors::{PortalError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct Gemini {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: usize,
    temperature: f64,
}

impl Gemini {
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
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: usize,
}

#[derive(Deserialize)]
struct Response {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Response {
    /// 第一个候选的全部文本片段
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        Some(text)
    }
}

#[async_trait]
impl Llm for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = Request {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| PortalError::external_service(e.to_string()))?
            .json::<Response>()
            .await?;

        response
            .text()
            .ok_or_else(|| PortalError::external_service("Gemini response has no candidates"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Gemini {
        Gemini::new(Client::new(), "key", "gemini-2.0-flash", None, 256, 0.4)
    }

    #[test]
    fn test_request_serialization() {
        let request = Request {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Hello".into(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                max_output_tokens: 256,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(json["generationConfig"]["temperature"], 0.4);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "- Attend labs\n"}, {"text": "- Revise weekly"}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "- Attend labs\n- Revise weekly");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: Response = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        // 被安全策略拦截时没有 content
        let blocked: Response =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(blocked.text().is_none());
    }

    #[test]
    fn test_malformed_response() {
        assert!(serde_json::from_str::<Response>(r#"{"error": {"code": 400}}"#).is_err());
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            client().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        let custom = Gemini::new(Client::new(), "k", "m", Some("http://localhost:9000/"), 1, 0.0);
        assert_eq!(custom.endpoint(), "http://localhost:9000/models/m:generateContent");
    }
}
