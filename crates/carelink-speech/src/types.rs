use serde::Serialize;

/// Token payload handed to the browser speech SDK
///
/// Field names follow the `watson-speech` client convention.
#[derive(Debug, Serialize)]
pub struct ServiceToken {
    /// Short-lived bearer token for the speech service
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Base URL of the speech service instance
    #[serde(rename = "serviceUrl")]
    pub service_url: String,
}
