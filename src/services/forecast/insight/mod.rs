//! 学业建议文本
//!
//! 把预测指标填入提示词模板，交给配置的文本生成服务（Gemini 或 OpenAI）。
//! 任何失败（未配置密钥、网络或 HTTP 错误、响应格式不符、空响应）都回退到固定文案，
//! 不重试、不缓存。

pub mod gemini;
pub mod openai;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::errors::{PortalError, Result};
use crate::models::forecast::entities::{ForecastMetrics, ForecastScores};

pub use gemini::Gemini;
pub use openai::OpenAi;

/// 文本生成服务
#[async_trait]
pub trait Llm: Send + Sync {
    /// 提供方名称，用于日志
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub const FALLBACK_INSIGHT: [&str; 3] = [
    "Keep your attendance above 75% to stay eligible for the end-semester examinations.",
    "Review each week's LMS materials and attempt every quiz to reinforce core concepts.",
    "Meet your faculty advisor to plan arrear clearance and set a higher SGPA target.",
];

pub fn fallback_insight() -> String {
    FALLBACK_INSIGHT.join("\n")
}

pub fn build_prompt(metrics: &ForecastMetrics, scores: &ForecastScores) -> String {
    format!(
        "As an Academic AI Analyst, analyze this student's performance:\n\
         - Current CGPA: {cgpa:.2}\n\
         - Average Attendance: {attendance:.2}%\n\
         - Average Quiz Score: {quiz:.2}%\n\
         - LMS Engagement: {hours:.1} hours\n\
         - Total Credits Earned: {credits}\n\
         - Current Arrears: {arrears}\n\
         - Success Probability: {success}%\n\
         - Arrear Risk: {risk}%\n\
         - Grade Improvement Potential: {improvement}%\n\
         \n\
         Provide exactly 3 short, actionable bullet points (max 15 words each) for improving their final semester outcome.\n\
         Do not include conversational filler. Just the bullet points.",
        cgpa = metrics.cgpa,
        attendance = metrics.attendance_percentage,
        quiz = metrics.quiz_average,
        hours = metrics.engagement_hours,
        credits = metrics.earned_credits,
        arrears = metrics.arrears,
        success = scores.success_probability,
        risk = scores.risk_index,
        improvement = scores.improvement_potential,
    )
}

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub text: String,
    pub fallback: bool,
}

impl Insight {
    fn fallback() -> Self {
        Self {
            text: fallback_insight(),
            fallback: true,
        }
    }
}

pub struct InsightGenerator {
    llm: Option<Arc<dyn Llm>>,
}

impl InsightGenerator {
    pub fn new(llm: Option<Arc<dyn Llm>>) -> Self {
        Self { llm }
    }

    /// 按配置创建；未配置密钥或提供方未知时只返回固定文案
    pub fn from_config(config: &AiConfig) -> Self {
        match create_llm(config) {
            Ok(llm) => Self::new(llm),
            Err(e) => {
                warn!("Text generation disabled: {}", e);
                Self::new(None)
            }
        }
    }

    pub fn provider(&self) -> Option<&'static str> {
        self.llm.as_ref().map(|llm| llm.name())
    }

    pub async fn generate(&self, prompt: &str) -> Insight {
        let Some(llm) = &self.llm else {
            return Insight::fallback();
        };

        match llm.complete(prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                debug!("Insight generated by {}", llm.name());
                Insight {
                    text: text.trim().to_string(),
                    fallback: false,
                }
            }
            Ok(_) => {
                warn!("{} returned an empty insight, using fallback", llm.name());
                Insight::fallback()
            }
            Err(e) => {
                warn!("{} insight request failed, using fallback: {}", llm.name(), e);
                Insight::fallback()
            }
        }
    }
}

fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .build()
        .map_err(|e| PortalError::external_service(format!("Failed to build HTTP client: {e}")))
}

/// 按 `ai.provider` 创建客户端，未配置密钥时返回 None
pub fn create_llm(config: &AiConfig) -> Result<Option<Arc<dyn Llm>>> {
    let api_key = config.api_key.trim();
    if api_key.is_empty() {
        return Ok(None);
    }
    let client = http_client(config.timeout_secs)?;
    let base_url = Some(config.base_url.trim()).filter(|url| !url.is_empty());

    let llm: Arc<dyn Llm> = match config.provider.trim().to_ascii_lowercase().as_str() {
        "gemini" => Arc::new(Gemini::new(
            client,
            api_key,
            &config.model,
            base_url,
            config.max_tokens,
            config.temperature,
        )),
        "openai" => Arc::new(OpenAi::new(
            client,
            api_key,
            &config.model,
            base_url,
            config.max_tokens,
            config.temperature,
        )),
        other => {
            return Err(PortalError::validation(format!(
                "Unknown text generation provider: {other}"
            )));
        }
    };
    Ok(Some(llm))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLlm {
        response: Result<String>,
    }

    #[async_trait]
    impl Llm for MockLlm {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            self.response.clone()
        }
    }

    fn generator(response: Result<String>) -> InsightGenerator {
        InsightGenerator::new(Some(Arc::new(MockLlm { response })))
    }

    fn ai_config(provider: &str, api_key: &str) -> AiConfig {
        AiConfig {
            provider: provider.into(),
            api_key: api_key.into(),
            model: "model".into(),
            base_url: String::new(),
            temperature: 0.4,
            max_tokens: 256,
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_uses_llm_text() {
        let insight = generator(Ok("  - Attend every lab\n".into()))
            .generate("prompt")
            .await;
        assert_eq!(insight.text, "- Attend every lab");
        assert!(!insight.fallback);
    }

    #[tokio::test]
    async fn test_falls_back_on_error() {
        let insight = generator(Err(PortalError::external_service("HTTP 500")))
            .generate("prompt")
            .await;
        assert!(insight.fallback);
        assert_eq!(insight.text, fallback_insight());
    }

    #[tokio::test]
    async fn test_falls_back_on_empty_text() {
        let insight = generator(Ok("   \n".into())).generate("prompt").await;
        assert!(insight.fallback);
    }

    #[tokio::test]
    async fn test_falls_back_without_client() {
        let insight = InsightGenerator::new(None).generate("prompt").await;
        assert!(insight.fallback);
        assert_eq!(insight.text.lines().count(), 3);
    }

    #[test]
    fn test_prompt_contains_metrics() {
        let metrics = ForecastMetrics {
            cgpa: 8.12,
            arrears: 1,
            attendance_percentage: 82.456,
            quiz_average: 64.0,
            engagement_hours: 12.25,
            earned_credits: 96,
        };
        let scores = ForecastScores {
            success_probability: 71,
            risk_index: 14,
            improvement_potential: 30,
        };
        let prompt = build_prompt(&metrics, &scores);
        assert!(prompt.contains("Current CGPA: 8.12"));
        assert!(prompt.contains("Average Attendance: 82.46%"));
        assert!(prompt.contains("Current Arrears: 1"));
        assert!(prompt.contains("Success Probability: 71%"));
        assert!(prompt.contains("exactly 3 short"));
    }

    #[test]
    fn test_create_llm_selection() {
        assert!(create_llm(&ai_config("gemini", "")).unwrap().is_none());
        let gemini = create_llm(&ai_config("gemini", "key")).unwrap().unwrap();
        assert_eq!(gemini.name(), "gemini");
        let openai = create_llm(&ai_config("OpenAI", "key")).unwrap().unwrap();
        assert_eq!(openai.name(), "openai");
        assert!(create_llm(&ai_config("llama", "key")).is_err());
    }

    #[test]
    fn test_from_config_unknown_provider_falls_back() {
        let generator = InsightGenerator::from_config(&ai_config("llama", "key"));
        assert_eq!(generator.provider(), None);
    }
}
