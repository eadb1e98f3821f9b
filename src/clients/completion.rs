use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClientError;

/// Remote text completion: prompt in, generated text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}

// Chat completions request body, one user message
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Default)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, ClientError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or(ClientError::EmptyCompletion)
    }
}

pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        debug!(model = %self.model, "calling completion API");

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ClientError::Upstream(format!("status {}", res.status())));
        }

        res.json::<ChatResponse>().await?.into_text()
    }
}
