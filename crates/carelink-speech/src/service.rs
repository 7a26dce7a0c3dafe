use secrecy::SecretString;

use crate::{error::SpeechError, iam::IamTokenClient, types::ServiceToken};

/// Which speech service a token is being minted for
#[derive(Debug, Clone, Copy)]
pub enum SpeechService {
    SpeechToText,
    TextToSpeech,
}

impl SpeechService {
    const fn label(self) -> &'static str {
        match self {
            Self::SpeechToText => "speech-to-text",
            Self::TextToSpeech => "text-to-speech",
        }
    }
}

/// Mints short-lived access tokens for the configured speech services
pub struct SpeechTokenService {
    iam: IamTokenClient,
    speech_to_text: Credentials,
    text_to_speech: Credentials,
}

struct Credentials {
    apikey: Option<SecretString>,
    service_url: Option<String>,
}

impl From<&carelink_config::ServiceCredentials> for Credentials {
    fn from(config: &carelink_config::ServiceCredentials) -> Self {
        Self {
            apikey: config.apikey.clone(),
            service_url: config.service_url.clone(),
        }
    }
}

impl SpeechTokenService {
    pub fn new(config: &carelink_config::SpeechConfig) -> Self {
        Self {
            iam: IamTokenClient::new(config.token_url.clone()),
            speech_to_text: Credentials::from(&config.speech_to_text),
            text_to_speech: Credentials::from(&config.text_to_speech),
        }
    }

    /// Mint a token for one speech service and pair it with that
    /// service's base URL
    pub async fn issue_token(&self, service: SpeechService) -> crate::error::Result<ServiceToken> {
        let credentials = match service {
            SpeechService::SpeechToText => &self.speech_to_text,
            SpeechService::TextToSpeech => &self.text_to_speech,
        };

        let apikey = credentials.apikey.as_ref().ok_or_else(|| {
            SpeechError::ConfigError(format!("API key for the {} service is not set", service.label()))
        })?;
        let service_url = credentials.service_url.as_ref().ok_or_else(|| {
            SpeechError::ConfigError(format!("Service URL for the {} service is not set", service.label()))
        })?;

        let access_token = self.iam.mint(apikey).await?;

        Ok(ServiceToken {
            access_token,
            service_url: service_url.clone(),
        })
    }
}
