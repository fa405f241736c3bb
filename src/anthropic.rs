use crate::config::Config;
use crate::error::TranslateError;
use crate::i18n::Locale;
use crate::prompt::build_translation_prompt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anthropic Messages API request
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first text block, if any.
    fn first_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
    }
}

/// Build the HTTP client shared by every request in a run.
pub fn build_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
}

/// Send one translation request for `locale` and return the model's raw reply text.
///
/// Exactly one request is made. Any failure is returned to the caller, which decides
/// what it means for the run.
pub async fn translate(
    client: &reqwest::Client,
    config: &Config,
    source_json: &str,
    locale: &Locale,
) -> Result<String, TranslateError> {
    let request = MessagesRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        messages: vec![Message {
            role: "user".to_string(),
            content: build_translation_prompt(locale.name(), source_json),
        }],
    };

    info!(
        "Sending translation request for {} ({})",
        locale.name(),
        locale.code()
    );

    let response = client
        .post(&config.api_url)
        .header("x-api-key", &config.api_key)
        .header("anthropic-version", &config.api_version)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(TranslateError::Service { status, body });
    }

    let body = response.text().await?;
    info!("Received translation response for {}", locale.code());

    let envelope: MessagesResponse =
        serde_json::from_str(&body).map_err(|e| TranslateError::Envelope(e.to_string()))?;
    let reply = envelope.first_text().ok_or(TranslateError::EmptyReply)?;

    debug!("Raw reply for {}: {}", locale.code(), reply);
    Ok(reply)
}
