use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{error::SpeechError, http_client::http_client};

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Client for the identity provider's token endpoint
///
/// Exchanges a service API key for a short-lived bearer token. Tokens are
/// minted per request and never cached here.
pub(crate) struct IamTokenClient {
    client: Client,
    token_url: String,
}

#[derive(Deserialize)]
struct IamTokenResponse {
    access_token: String,
}

impl IamTokenClient {
    pub fn new(token_url: String) -> Self {
        Self {
            client: http_client(),
            token_url,
        }
    }

    /// Mint an access token for the given API key
    pub async fn mint(&self, apikey: &SecretString) -> crate::error::Result<String> {
        let response = self
            .client
            .post(&self.token_url)
            .header(http::header::ACCEPT, "application/json")
            .form(&[("grant_type", APIKEY_GRANT_TYPE), ("apikey", apikey.expose_secret())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("identity provider request failed: {e}");
                SpeechError::ConnectionError(format!("Failed to reach identity provider: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("identity provider error ({status}): {error_text}");
            return Err(SpeechError::IdentityApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: IamTokenResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse token response: {e}")))?;

        tracing::debug!("access token minted");
        Ok(result.access_token)
    }
}
