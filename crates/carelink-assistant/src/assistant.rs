use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    error::AssistantError,
    http_client::http_client,
    prompt::{build_prompt, extract_reply},
};

/// Fixed generation parameters for conversational replies
const MAX_REPLY_TOKENS: u32 = 120;
const REPLY_TEMPERATURE: f32 = 0.7;

/// Client for the hosted model inference endpoint
pub struct Assistant {
    client: Client,
    url: Option<String>,
    apikey: Option<SecretString>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct InferenceOptions {
    use_cache: bool,
}

#[derive(Deserialize)]
struct Generation {
    generated_text: String,
}

impl Assistant {
    pub fn new(config: &carelink_config::AssistantConfig) -> Self {
        Self {
            client: http_client(),
            url: config.url.clone(),
            apikey: config.apikey.clone(),
        }
    }

    /// Turn a transcript into a conversational reply
    ///
    /// Templates the transcript into the fixed prompt, forwards it with
    /// fixed generation parameters, and strips everything up to the
    /// answer cue from the generated text.
    pub async fn reply(&self, transcript: &str) -> crate::error::Result<String> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| AssistantError::ConfigError("INFERENCE_URL is not set".to_owned()))?;

        let prompt = build_prompt(transcript);
        let body = InferenceRequest {
            inputs: &prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_REPLY_TOKENS,
                temperature: REPLY_TEMPERATURE,
            },
            options: InferenceOptions { use_cache: false },
        };

        let mut request = self.client.post(url).json(&body);
        if let Some(apikey) = &self.apikey {
            request = request.bearer_auth(apikey.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("inference request failed: {e}");
            AssistantError::ConnectionError(format!("Failed to reach inference endpoint: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("inference API error ({status}): {error_text}");
            return Err(AssistantError::InferenceApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let generations: Vec<Generation> = response
            .json()
            .await
            .map_err(|e| AssistantError::InvalidResponse(format!("Failed to parse generation: {e}")))?;

        let generation = generations
            .first()
            .ok_or_else(|| AssistantError::InvalidResponse("empty generation list".to_owned()))?;

        tracing::debug!("generation complete, {} chars", generation.generated_text.len());
        Ok(extract_reply(&generation.generated_text))
    }
}
