use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use super::{Disambiguator, KeySuggester, prompt};
use crate::config::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const REVIEW_MAX_TOKENS: u32 = 1000;
const KEY_MAX_TOKENS: u32 = 50;

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Requests run on a private current-thread runtime, so callers stay
/// synchronous. Not for use from inside another tokio runtime.
pub struct OpenAiClient {
    client: reqwest::Client,
    runtime: Runtime,
    base_path: String,
    api_key: String,
    model: String,
    review_template: String,
    key_template: String,
    function_name: String,
}

impl OpenAiClient {
    /// Build a client from the configuration.
    ///
    /// `api_key` (from `--api-key` or `OPENAI_API_KEY`) takes priority over
    /// `openAiApiKey`. Returns `Ok(None)` when no key is available.
    pub fn from_config(config: &Config, api_key: Option<&str>) -> Result<Option<Self>> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(config.open_ai_api_key.as_str())
            .trim()
            .to_string();
        if api_key.is_empty() {
            return Ok(None);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Some(Self {
            client,
            runtime,
            base_path: config.open_ai_base_path.trim_end_matches('/').to_string(),
            api_key,
            model: config.gpt_model.clone(),
            review_template: config.unlocalized_text_prompt.clone(),
            key_template: config.chat_template.clone(),
            function_name: config.i18n_function_name.clone(),
        }))
    }

    fn chat(&self, system: &str, user: String, max_tokens: u32) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_path);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
            max_tokens,
        };

        self.runtime.block_on(async {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await
                .with_context(|| format!("Request to {} failed", url))?;

            if !response.status().is_success() {
                bail!("AI API error: {}", response.status());
            }

            let body: ChatResponse = response
                .json()
                .await
                .context("Failed to decode AI response")?;
            body.choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content.trim().to_string())
                .ok_or_else(|| anyhow!("AI response has no choices"))
        })
    }
}

impl Disambiguator for OpenAiClient {
    fn find_unlocalized(&self, code: &str) -> Result<String> {
        let user = prompt::review_prompt(&self.review_template, code, &self.function_name);
        self.chat(prompt::REVIEW_SYSTEM_PROMPT, user, REVIEW_MAX_TOKENS)
    }
}

impl KeySuggester for OpenAiClient {
    fn suggest_key(&self, text: &str) -> Result<String> {
        let user = prompt::key_prompt(&self.key_template, text);
        self.chat(prompt::KEY_SYSTEM_PROMPT, user, KEY_MAX_TOKENS)
    }
}
