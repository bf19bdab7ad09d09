use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::config::GeneratorSettings;
use crate::core::ReportGenerator;
use crate::models::AuditPrompt;
use crate::utils::{AuditError, Result};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice.
    pub fn into_report(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AuditError::Generation("completion had no content".into()))
    }
}

/// Chat-completions client producing one audit report per call
pub struct OpenAiAuditor {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiAuditor {
    pub fn new(settings: &GeneratorSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AuditError::Config(format!("model HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ReportGenerator for OpenAiAuditor {
    fn name(&self) -> &'static str {
        "openai-chat"
    }

    async fn generate(&self, prompt: &AuditPrompt) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &prompt.system },
                ChatMessage { role: "user", content: &prompt.user },
            ],
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuditError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!("Model API returned {}: {}", status, detail);
            return Err(AuditError::Generation(format!("model API returned {}", status)));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Generation(format!("malformed completion: {}", e)))?;

        let report = completion.into_report()?;
        tracing::debug!("Model {} returned {} characters", self.model, report.chars().count());

        Ok(report)
    }
}
