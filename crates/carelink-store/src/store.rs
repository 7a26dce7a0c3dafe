use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::StoreError, http_client::http_client};

/// Client for the CouchDB-compatible reminder document store
///
/// Credentials are held as read from the environment; a missing URL or
/// credential surfaces as a `ConfigError` on first use rather than at
/// construction time.
pub struct ReminderStore {
    client: Client,
    base_url: Option<String>,
    username: Option<String>,
    apikey: Option<SecretString>,
    database: String,
}

#[derive(Deserialize)]
struct AllDocsResponse {
    rows: Vec<AllDocsRow>,
}

#[derive(Deserialize)]
struct AllDocsRow {
    doc: Option<Value>,
}

#[derive(Deserialize)]
struct DocumentMeta {
    #[serde(rename = "_rev")]
    rev: String,
}

impl ReminderStore {
    pub fn new(config: &carelink_config::StoreConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config.url.clone(),
            username: config.username.clone(),
            apikey: config.apikey.clone(),
            database: config.database.clone(),
        }
    }

    /// Store a reminder document verbatim
    pub async fn create(&self, reminder: Value) -> crate::error::Result<()> {
        let url = self.database_url()?;

        let response = self
            .authorize(self.client.post(&url))
            .json(&reminder)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("store create request failed: {e}");
                StoreError::ConnectionError(format!("Failed to reach document store: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("store create error ({status}): {error_text}");
            return Err(StoreError::StoreApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::debug!("reminder stored");
        Ok(())
    }

    /// Fetch every reminder document in the database
    ///
    /// No pagination or ordering beyond what the store provides.
    pub async fn list(&self) -> crate::error::Result<Vec<Value>> {
        let url = format!("{}/_all_docs", self.database_url()?);

        let response = self
            .authorize(self.client.get(&url))
            .query(&[("include_docs", "true")])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("store list request failed: {e}");
                StoreError::ConnectionError(format!("Failed to reach document store: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("store list error ({status}): {error_text}");
            return Err(StoreError::StoreApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: AllDocsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse document list: {e}")))?;

        Ok(result.rows.into_iter().filter_map(|row| row.doc).collect())
    }

    /// Delete a reminder by store-assigned id
    ///
    /// Looks the document up first to obtain its revision; an absent id
    /// maps to `NotFound` without mutating anything.
    pub async fn delete(&self, id: &str) -> crate::error::Result<()> {
        let doc_url = format!("{}/{id}", self.database_url()?);

        let response = self.authorize(self.client.get(&doc_url)).send().await.map_err(|e| {
            tracing::error!("store lookup request failed: {e}");
            StoreError::ConnectionError(format!("Failed to reach document store: {e}"))
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("store lookup error ({status}): {error_text}");
            return Err(StoreError::StoreApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let meta: DocumentMeta = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse document: {e}")))?;

        let response = self
            .authorize(self.client.delete(&doc_url))
            .query(&[("rev", meta.rev.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("store delete request failed: {e}");
                StoreError::ConnectionError(format!("Failed to reach document store: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("store delete error ({status}): {error_text}");
            return Err(StoreError::StoreApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::debug!("reminder {id} deleted");
        Ok(())
    }

    fn database_url(&self) -> crate::error::Result<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| StoreError::ConfigError("CLOUDANT_URL is not set".to_owned()))?;

        Ok(format!("{}/{}", base.trim_end_matches('/'), self.database))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.username {
            Some(username) => builder.basic_auth(username, self.apikey.as_ref().map(ExposeSecret::expose_secret)),
            None => builder,
        }
    }
}
