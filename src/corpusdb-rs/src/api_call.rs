use std::time::Duration;

use crate::{ClientError, Result};
use corpusdb_core::Config;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CORPUSDB-API-KEY";

/// Low-level transport for the CorpusDb REST API.
///
/// One request per call, no retries. Non-2xx statuses are surfaced as
/// [`ClientError::Server`] with the response body as the message.
pub struct ApiCall {
    base_url: String,
    api_key: String,
    client: HttpClient,
}

impl ApiCall {
    pub fn new(config: &Config) -> Result<Self> {
        let client = HttpClient::builder()
            .connect_timeout(Duration::from_secs(config.connection_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, req: RequestBuilder, path: &str) -> Result<reqwest::Response> {
        let response = req.header(API_KEY_HEADER, self.api_key.as_str()).send().await?;
        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "api call");

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response)
    }

    /// GET returning the parsed JSON response.
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let req = self.client.get(self.url(path)).query(params);
        let response = self.send(req, path).await?;
        Ok(response.json().await?)
    }

    /// GET returning the raw response body, for endpoints that answer with
    /// newline-delimited JSON rather than a single object.
    pub async fn get_raw(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        let req = self.client.get(self.url(path)).query(params);
        let response = self.send(req, path).await?;
        Ok(response.text().await?)
    }

    /// POST a JSON body, returning the parsed JSON response.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        params: &[(String, String)],
    ) -> Result<Value> {
        let req = self.client.post(self.url(path)).query(params).json(body);
        let response = self.send(req, path).await?;
        Ok(response.json().await?)
    }

    /// POST a preassembled body verbatim (NDJSON import), returning the raw
    /// response body.
    pub async fn post_raw(
        &self,
        path: &str,
        body: String,
        params: &[(String, String)],
    ) -> Result<String> {
        let req = self.client.post(self.url(path)).query(params).body(body);
        let response = self.send(req, path).await?;
        Ok(response.text().await?)
    }

    /// PATCH a JSON body, returning the parsed JSON response.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        params: &[(String, String)],
    ) -> Result<Value> {
        let req = self.client.patch(self.url(path)).query(params).json(body);
        let response = self.send(req, path).await?;
        Ok(response.json().await?)
    }

    /// DELETE, returning the parsed JSON response.
    pub async fn delete(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let req = self.client.delete(self.url(path)).query(params);
        let response = self.send(req, path).await?;
        Ok(response.json().await?)
    }
}
