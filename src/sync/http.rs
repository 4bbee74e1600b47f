//! HTTP transport for the remote document
//!
//! Talks to a jsonbin-style API:
//! - `HEAD {api_url}/{id}/latest` to probe
//! - `GET {api_url}/{id}/latest` to read
//! - `PUT {api_url}/{id}` to overwrite
//!
//! Every request carries the static credential header. No timeout is set
//! here; the client's defaults apply.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Response};

use crate::config::RemoteSettings;
use crate::error::{ExpenseError, ExpenseResult};

use super::remote::RemoteDocument;

/// Remote document reached over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    latest_url: String,
    document_url: String,
}

impl HttpRemote {
    /// Build a transport from settings; requires a document id and credential
    pub fn new(settings: &RemoteSettings) -> ExpenseResult<Self> {
        Self::with_builder(settings, Client::builder())
    }

    /// Build a transport on top of a preconfigured client builder
    pub fn with_builder(settings: &RemoteSettings, builder: ClientBuilder) -> ExpenseResult<Self> {
        let document_id = non_blank(settings.document_id.as_deref())
            .ok_or_else(|| ExpenseError::Config("remote document id is not set".into()))?;
        let master_key = non_blank(settings.master_key.as_deref())
            .ok_or_else(|| ExpenseError::Config("remote credential is not set".into()))?;

        let header_name = HeaderName::from_bytes(settings.credential_header.as_bytes())
            .map_err(|e| ExpenseError::Config(format!("Invalid credential header name: {}", e)))?;
        let mut header_value = HeaderValue::from_str(master_key)
            .map_err(|e| ExpenseError::Config(format!("Invalid credential value: {}", e)))?;
        header_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header_name, header_value);

        let client = builder
            .default_headers(headers)
            .build()
            .map_err(|e| ExpenseError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let document_url = format!("{}/{}", settings.api_url.trim_end_matches('/'), document_id);

        Ok(Self {
            client,
            latest_url: format!("{}/latest", document_url),
            document_url,
        })
    }

    /// URL used for probe and fetch
    pub fn latest_url(&self) -> &str {
        &self.latest_url
    }

    /// URL used for overwrite
    pub fn document_url(&self) -> &str {
        &self.document_url
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn unreachable(err: reqwest::Error) -> ExpenseError {
    ExpenseError::RemoteUnreachable(err.to_string())
}

fn ensure_success(response: Response) -> ExpenseResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ExpenseError::RemoteRejected(format!(
            "{} answered HTTP {}",
            response.url(),
            status
        )))
    }
}

#[async_trait]
impl RemoteDocument for HttpRemote {
    async fn probe(&self) -> ExpenseResult<()> {
        let response = self
            .client
            .head(&self.latest_url)
            .send()
            .await
            .map_err(unreachable)?;
        ensure_success(response)?;
        Ok(())
    }

    async fn fetch(&self) -> ExpenseResult<String> {
        let response = self
            .client
            .get(&self.latest_url)
            .send()
            .await
            .map_err(unreachable)?;
        ensure_success(response)?
            .text()
            .await
            .map_err(|e| ExpenseError::RemoteRejected(format!("Failed to read body: {}", e)))
    }

    async fn replace(&self, body: String) -> ExpenseResult<()> {
        let response = self
            .client
            .put(&self.document_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(unreachable)?;
        ensure_success(response)?;
        Ok(())
    }
}
