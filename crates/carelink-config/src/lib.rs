#![allow(clippy::must_use_candidate)]

pub mod assistant;
pub mod cors;
mod env;
pub mod health;
pub mod server;
pub mod speech;
pub mod store;

pub use assistant::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use speech::*;
pub use store::*;

/// Top-level Carelink configuration
///
/// Populated entirely from process environment variables. A missing
/// variable is not an error here; it surfaces as a failure when the
/// operation that needs it is first used.
#[derive(Debug, Default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Reminder document store configuration
    pub store: StoreConfig,
    /// Speech service token configuration
    pub speech: SpeechConfig,
    /// Hosted model inference configuration
    pub assistant: AssistantConfig,
}

impl Config {
    /// Read the full configuration from the environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(),
            speech: SpeechConfig::from_env(),
            assistant: AssistantConfig::from_env(),
        }
    }
}
