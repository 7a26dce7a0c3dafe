use std::net::SocketAddr;

use crate::{cors::CorsConfig, env, health::HealthConfig};

#[derive(Debug, Default)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    pub health: HealthConfig,
    pub cors: CorsConfig,
}

impl ServerConfig {
    pub(crate) fn from_env() -> Self {
        let listen_address = env::var("CARELINK_LISTEN").and_then(|raw| match raw.parse() {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::warn!("invalid CARELINK_LISTEN address `{raw}`: {e}");
                None
            }
        });

        Self {
            listen_address,
            health: HealthConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}
