use crate::api::response::{extract_content, extract_error_message};
use crate::api::RequestBody;
use crate::config::Config;
use crate::error::{MasterChefError, Result};
use crate::models::Message;
use async_trait::async_trait;
use colored::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// A chat-completion backend that turns a message list into a reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}

/// Client for Groq's OpenAI-compatible chat-completions endpoint
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    verbose: bool,
}

impl GroqClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                MasterChefError::ClientInitFailure(
                    "GROQ_API_KEY environment variable not set".to_string(),
                )
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                MasterChefError::ClientInitFailure(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| MasterChefError::ClientInitFailure(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.api_endpoint.clone(),
            model: config.model.clone(),
            verbose: config.verbose,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let request_body = RequestBody {
            model: self.model.clone(),
            messages: messages.to_vec(),
        };

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[masterchef] POST {} (model {}, {} messages)",
                    self.endpoint,
                    self.model,
                    messages.len()
                )
                .dimmed()
            );
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        if self.verbose {
            eprintln!(
                "{}",
                format!("[masterchef] Response status: {}", response.status()).dimmed()
            );
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MasterChefError::ApiError {
                status,
                message: extract_error_message(&body),
            });
        }

        let response_json: Value = response.json().await?;
        extract_content(&response_json)
    }
}
