use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};

/// Single-turn text generation, optionally augmented with live web search.
pub trait LLMClient: Send + Sync {
    fn generate(&self, prompt: &str, max_tokens: u32, search_enabled: bool) -> Result<String>;
}

/// OpenAI-compatible chat completions client.
pub struct OpenAISearchClient {
    endpoint: String,
    model: String,
    http: HttpClient,
}

impl OpenAISearchClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| LookupError::configuration("API key contains invalid characters"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| {
                LookupError::configuration(format!("could not build HTTP client: {}", err))
            })?;

        Ok(Self {
            endpoint: format!("{}/chat/completions", config.base_url),
            model: config.model.clone(),
            http,
        })
    }
}

impl LLMClient for OpenAISearchClient {
    fn generate(&self, prompt: &str, max_tokens: u32, search_enabled: bool) -> Result<String> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            web_search_options: search_enabled.then_some(WebSearchOptions {}),
        };

        debug!(model = %self.model, max_tokens, search_enabled, "sending chat completion");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LookupError::Transport(format!(
                "API returned {}: {}",
                status,
                body.trim()
            )));
        }

        let raw: ChatCompletionResponse = response
            .json()
            .map_err(|err| LookupError::Transport(format!("unreadable API response: {}", err)))?;

        raw.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LookupError::Transport("API response contained no message".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    web_search_options: Option<WebSearchOptions>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct WebSearchOptions {}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_tokens: u32,
    pub search_enabled: bool,
}

/// Canned responses served in push order; records every call it receives.
#[derive(Clone, Default)]
pub struct MockLLMClient {
    responses: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockLLMClient {
    pub fn push_response(&self, text: impl Into<String>) {
        self.responses.lock().push_back(Ok(text.into()));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.responses.lock().push_back(Err(message.into()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl LLMClient for MockLLMClient {
    fn generate(&self, prompt: &str, max_tokens: u32, search_enabled: bool) -> Result<String> {
        self.calls.lock().push(RecordedCall {
            prompt: prompt.to_string(),
            max_tokens,
            search_enabled,
        });
        match self.responses.lock().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LookupError::Transport(message)),
            None => Err(LookupError::Transport(
                "no mock response available".to_string(),
            )),
        }
    }
}
