use secrecy::SecretString;

use crate::env;

/// Hosted model inference configuration
#[derive(Debug, Default)]
pub struct AssistantConfig {
    /// Full URL of the hosted model endpoint
    pub url: Option<String>,
    /// Bearer token for the inference API
    pub apikey: Option<SecretString>,
}

impl AssistantConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            url: env::var("INFERENCE_URL"),
            apikey: env::secret("INFERENCE_APIKEY"),
        }
    }
}
