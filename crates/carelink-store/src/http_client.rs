use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Common HTTP client to reuse connections across store requests
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(30))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
