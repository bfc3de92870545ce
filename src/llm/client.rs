use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

const PROVIDER_NAME: &str = "openrouter";
const REQUEST_TIMEOUT_SECONDS: u64 = 60;
const ERROR_BODY_LOG_LIMIT: usize = 2000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion endpoint returned status {status}: {detail}")]
    Provider { status: StatusCode, detail: String },
}

#[derive(Clone)]
pub struct CompletionClient {
    api_key: String,
    base_url: String,
    model: String,
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (
            message,
            truncate_for_log(&value.to_string(), ERROR_BODY_LOG_LIMIT),
        );
    }

    (None, truncate_for_log(trimmed, ERROR_BODY_LOG_LIMIT))
}

fn extract_completion_text(envelope: &Value) -> Option<String> {
    let content = envelope
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    Some(content.trim().to_string())
}

impl CompletionClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        CompletionClient {
            api_key,
            base_url,
            model,
        }
    }

    pub fn from_config() -> Self {
        CompletionClient::new(
            CONFIG.openrouter_api_key.clone(),
            CONFIG.openrouter_base_url.clone(),
            CONFIG.openrouter_model.clone(),
        )
    }

    pub async fn complete(
        &self,
        operation: &str,
        system_text: &str,
        user_text: &str,
    ) -> Result<String, LlmError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_text },
                { "role": "user", "content": user_text }
            ]
        });

        log_llm_timing(PROVIDER_NAME, &self.model, operation, || async {
            debug!(
                "Completion request: model={}, operation={}",
                self.model, operation
            );
            let response = get_http_client()
                .post(format!(
                    "{}/chat/completions",
                    self.base_url.trim_end_matches('/')
                ))
                .header("Authorization", format!("Bearer {}", self.api_key))
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
                .json(&payload)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let (message, body_summary) = summarize_error_body(&body);
                warn!(
                    "Completion API error: status={}, body={}",
                    status, body_summary
                );
                return Err(LlmError::Provider {
                    status,
                    detail: message.unwrap_or(body_summary),
                });
            }

            let envelope =
                response
                    .json::<Value>()
                    .await
                    .map_err(|err| LlmError::Provider {
                        status,
                        detail: format!("invalid completion body: {err}"),
                    })?;

            let content = extract_completion_text(&envelope).ok_or_else(|| {
                warn!(
                    "Completion envelope is missing message content: {}",
                    truncate_for_log(&envelope.to_string(), ERROR_BODY_LOG_LIMIT)
                );
                LlmError::Provider {
                    status,
                    detail: "completion envelope is missing message content".to_string(),
                }
            })?;

            if content.is_empty() {
                warn!("Completion returned empty content for operation={}", operation);
            }
            Ok(content)
        })
        .await
    }
}
