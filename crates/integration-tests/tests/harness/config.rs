//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use carelink_config::{
    AssistantConfig, Config, HealthConfig, ServerConfig, ServiceCredentials, SpeechConfig, StoreConfig,
};
use secrecy::SecretString;

pub const STT_SERVICE_URL: &str = "https://stt.mock.example/instances/abc";
pub const TTS_SERVICE_URL: &str = "https://tts.mock.example/instances/def";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// No upstream services are configured; add them with the `with_*`
    /// methods so missing-credential behavior stays testable.
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the reminder store at a mock backend
    pub fn with_store(mut self, base_url: &str) -> Self {
        self.config.store = StoreConfig {
            url: Some(base_url.to_owned()),
            username: Some("mock".to_owned()),
            apikey: Some(SecretString::from("test-key")),
            database: "reminders".to_owned(),
        };
        self
    }

    /// Point speech token minting at a mock identity provider
    pub fn with_speech(mut self, token_url: &str) -> Self {
        self.config.speech = SpeechConfig {
            token_url: token_url.to_owned(),
            speech_to_text: ServiceCredentials {
                apikey: Some(SecretString::from("stt-test-key")),
                service_url: Some(STT_SERVICE_URL.to_owned()),
            },
            text_to_speech: ServiceCredentials {
                apikey: Some(SecretString::from("tts-test-key")),
                service_url: Some(TTS_SERVICE_URL.to_owned()),
            },
        };
        self
    }

    /// Point the assistant at a mock inference backend
    pub fn with_inference(mut self, url: &str) -> Self {
        self.config.assistant = AssistantConfig {
            url: Some(url.to_owned()),
            apikey: Some(SecretString::from("inference-test-key")),
        };
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
