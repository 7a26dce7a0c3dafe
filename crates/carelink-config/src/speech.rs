use secrecy::SecretString;

use crate::env;

pub const DEFAULT_IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Speech service token configuration
///
/// One credential pair per speech service. Tokens are minted on demand
/// against the shared identity provider endpoint.
#[derive(Debug)]
pub struct SpeechConfig {
    /// Identity provider token endpoint
    pub token_url: String,
    /// Speech-to-text credentials
    pub speech_to_text: ServiceCredentials,
    /// Text-to-speech credentials
    pub text_to_speech: ServiceCredentials,
}

/// API key and base URL for one speech service
#[derive(Debug, Default)]
pub struct ServiceCredentials {
    pub apikey: Option<SecretString>,
    pub service_url: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_IAM_TOKEN_URL.to_owned(),
            speech_to_text: ServiceCredentials::default(),
            text_to_speech: ServiceCredentials::default(),
        }
    }
}

impl SpeechConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            token_url: env::var("IAM_TOKEN_URL").unwrap_or_else(|| DEFAULT_IAM_TOKEN_URL.to_owned()),
            speech_to_text: ServiceCredentials {
                apikey: env::secret("STT_APIKEY"),
                service_url: env::var("STT_SERVICE_URL"),
            },
            text_to_speech: ServiceCredentials {
                apikey: env::secret("TTS_APIKEY"),
                service_url: env::var("TTS_SERVICE_URL"),
            },
        }
    }
}
