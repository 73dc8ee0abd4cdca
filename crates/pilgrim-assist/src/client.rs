//! Assistant API HTTP client.
//!
//! A single request/response round trip against a generative-language
//! endpoint. Every failure degrades to a fixed, user-visible fallback
//! string; nothing here propagates an error to the caller.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Reply when no API key is configured. Detected eagerly, before any call.
pub const MISSING_KEY_REPLY: &str = "API key not configured. Please contact support.";

/// Reply when the call or its decoding fails for any reason.
pub const UNAVAILABLE_REPLY: &str =
    "Sorry, I am having trouble connecting to my knowledge base. Please try again later.";

/// Persona instruction sent with every prompt.
pub const SYSTEM_INSTRUCTION: &str = "I am your personal PilgrimPath guide for the Ujjain \
Simhastha. I'm here to help you directly. Ask me for the safest routes, where to find food, \
safety tips, or any other guidance you need. I will give you clear and concise answers in the \
language you use (English or Hindi). How can I assist you right now?";

/// HTTP client for the generative-language endpoint.
pub struct AssistClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl AssistClient {
    /// Create a new assistant client. An empty key counts as unconfigured.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }

    /// Whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a reply for the prompt. Never fails: a missing credential or
    /// any call error produces the corresponding fixed fallback string.
    pub async fn generate(&self, prompt: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("Assistant API key not configured");
            return MISSING_KEY_REPLY.to_string();
        };

        match self.request(api_key, prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Assistant call failed: {:#}", err);
                UNAVAILABLE_REPLY.to_string()
            }
        }
    }

    async fn request(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .context("Failed to reach assistant endpoint")?
            .error_for_status()
            .context("Assistant endpoint returned an error status")?;

        let body: Value = response
            .json()
            .await
            .context("Failed to decode assistant response")?;

        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
            .context("Assistant response contained no text")
    }
}
