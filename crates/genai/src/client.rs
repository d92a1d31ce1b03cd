//! HTTP client for the OpenAI-compatible chat-completions endpoint.

use serde::Deserialize;

/// Default completion service base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:8082";
/// Default model name sent with every completion request.
const DEFAULT_MODEL: &str = "gpt-4o";
/// Default client-level request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of questions requested per generated test.
const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Configuration for the completion service client.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Base HTTP URL of the completion service, without a trailing slash.
    pub base_url: String,
    /// Model name to request completions from.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// How many questions to ask for when generating a test.
    pub question_count: u32,
}

impl GenAiConfig {
    /// Load completion service configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                 |
    /// |------------------------|----------|-------------------------|
    /// | `GENAI_BASE_URL`       | no       | `http://localhost:8082` |
    /// | `GENAI_MODEL`          | no       | `gpt-4o`                |
    /// | `GENAI_TIMEOUT_SECS`   | no       | `30`                    |
    /// | `GENAI_QUESTION_COUNT` | no       | `5`                     |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but unparsable.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs: u64 = std::env::var("GENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GENAI_TIMEOUT_SECS must be a valid u64");

        let question_count: u32 = std::env::var("GENAI_QUESTION_COUNT")
            .unwrap_or_else(|_| DEFAULT_QUESTION_COUNT.to_string())
            .parse()
            .expect("GENAI_QUESTION_COUNT must be a valid u32");

        Self {
            base_url,
            model,
            timeout_secs,
            question_count,
        }
    }
}

/// Errors from the completion service client.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion service returned a non-2xx status code.
    #[error("completion service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service replied 2xx but without any assistant message content.
    #[error("completion response contained no content")]
    MissingContent,

    /// The assistant message content did not parse as a question set.
    #[error("malformed question payload: {0}")]
    Malformed(String),
}

impl GenAiError {
    /// Whether this failure was a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GenAiError::Request(e) if e.is_timeout())
    }
}

/// Wire shape of a chat-completions response; only the fields we read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// HTTP client for a single completion service instance.
pub struct CompletionClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl CompletionClient {
    /// Create a client with the configured request timeout baked in.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized; this constructor
    /// runs at startup, not per request.
    pub fn new(config: GenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build completion service HTTP client");
        Self { client, config }
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    /// Send a single-user-message chat completion and return the assistant
    /// message content.
    ///
    /// Sends `POST {base_url}/v1/chat/completions`. The client-level timeout
    /// bounds the whole call; a timeout surfaces as [`GenAiError::Request`]
    /// with [`GenAiError::is_timeout`] true.
    pub async fn complete(&self, prompt: &str) -> Result<String, GenAiError> {
        // High temperature: variety across generated questions matters more
        // than determinism here.
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.9,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GenAiError::MissingContent)
    }
}
