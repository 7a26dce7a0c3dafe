use secrecy::SecretString;

use crate::env;

pub const DEFAULT_REMINDERS_DATABASE: &str = "reminders";

/// Reminder document store configuration
///
/// Credentials are optional on purpose: a missing variable surfaces as a
/// store error on the first request that needs it, not at startup.
#[derive(Debug, Default)]
pub struct StoreConfig {
    /// Base URL of the CouchDB-compatible store
    pub url: Option<String>,
    /// Basic auth username
    pub username: Option<String>,
    /// Basic auth password (service API key)
    pub apikey: Option<SecretString>,
    /// Database holding reminder documents
    pub database: String,
}

impl StoreConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            url: env::var("CLOUDANT_URL"),
            username: env::var("CLOUDANT_USERNAME"),
            apikey: env::secret("CLOUDANT_APIKEY"),
            database: env::var("CLOUDANT_DB").unwrap_or_else(|| DEFAULT_REMINDERS_DATABASE.to_owned()),
        }
    }
}
