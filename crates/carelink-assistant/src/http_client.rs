use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Common HTTP client to reuse connections to the inference endpoint
///
/// Hosted model endpoints can take a while on cold starts, so the timeout
/// is more generous than for the other relays.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
