//! HTTP Document Store Adapter
//!
//! Talks to a remote JSON document service with a small REST shape:
//!
//! | Operation | Request                           | Notes                  |
//! |-----------|-----------------------------------|------------------------|
//! | get       | `GET {base}/{collection}/{id}`    | 404 means absent       |
//! | set       | `PUT {base}/{collection}/{id}`    | insert or replace      |
//! | delete    | `DELETE {base}/{collection}/{id}` | 404 means absent       |
//! | append    | `POST {base}/{collection}`        | 409 means id is taken  |
//! | list      | `GET {base}/{collection}`         | JSON array             |
//!
//! Ids are sent as single percent-encoded path segments. An optional API key
//! is sent as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::domain::records::Collection;
use crate::ports::{Document, DocumentStore, DocumentStoreError};

/// Connection settings for the remote document service.
#[derive(Debug, Clone)]
pub struct HttpDocumentStoreConfig {
    pub base_url: String,
    pub api_key: Option<SecretString>,
    pub timeout: Duration,
}

impl HttpDocumentStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpDocumentStore {
    config: HttpDocumentStoreConfig,
    base: Url,
    client: Client,
}

impl HttpDocumentStore {
    pub fn new(config: HttpDocumentStoreConfig) -> Result<Self, DocumentStoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DocumentStoreError::Backend(format!("HTTP client: {}", e)))?;
        let base = Url::parse(&config.base_url).map_err(|e| {
            DocumentStoreError::Backend(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(DocumentStoreError::Backend(format!(
                "Base URL cannot carry paths: {}",
                config.base_url
            )));
        }
        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Appends each segment to the base path, percent-encoding `/`, `?`, `#`
    /// and the rest.
    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn collection_url(&self, collection: Collection) -> Url {
        self.url_with(&[collection.name()])
    }

    fn document_url(&self, collection: Collection, id: &str) -> Url {
        self.url_with(&[collection.name(), id])
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key.expose_secret()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DocumentStoreError> {
        self.authorize(request).send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!("Document store request timed out: {}", e);
                DocumentStoreError::Transport(format!(
                    "timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else if e.is_connect() {
                tracing::error!("Document store unreachable: {}", e);
                DocumentStoreError::Transport(format!("Connection failed: {}", e))
            } else {
                tracing::error!("Document store request failed: {}", e);
                DocumentStoreError::Transport(e.to_string())
            }
        })
    }

    /// Maps non-success statuses. 5xx is transient, everything else is not.
    async fn check_status(response: Response) -> Result<Response, DocumentStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            Err(DocumentStoreError::Transport(format!(
                "Server error {}: {}",
                status, body
            )))
        } else {
            Err(DocumentStoreError::Backend(format!(
                "Unexpected status {}: {}",
                status, body
            )))
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, DocumentStoreError> {
        response
            .json::<T>()
            .await
            .map_err(|e| DocumentStoreError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let response = self
            .send(self.client.get(self.document_url(collection, id)))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        Self::decode(response).await.map(Some)
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        let response = self
            .send(self.client.put(self.document_url(collection, id)).json(&document))
            .await?;
        Self::check_status(response).await?;
        tracing::debug!(%collection, id, "Document stored");
        Ok(())
    }

    async fn append(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        let response = self
            .send(self.client.post(self.collection_url(collection)).json(&document))
            .await?;
        if response.status() == StatusCode::CONFLICT {
            return Err(DocumentStoreError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        Self::check_status(response).await?;
        tracing::debug!(%collection, id, "Document appended");
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, DocumentStoreError> {
        let response = self
            .send(self.client.delete(self.document_url(collection, id)))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check_status(response).await?;
        tracing::debug!(%collection, id, "Document deleted");
        Ok(true)
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError> {
        let response = self
            .send(self.client.get(self.collection_url(collection)))
            .await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}
