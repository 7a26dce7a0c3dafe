use crate::env;

/// Health endpoint configuration
#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Whether the health endpoint is exposed
    pub enabled: bool,
    /// Path the endpoint is served at
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_owned(),
        }
    }
}

impl HealthConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            enabled: env::flag("CARELINK_HEALTH", true),
            ..Self::default()
        }
    }
}
