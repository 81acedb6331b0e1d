//! Shared plumbing for the platform's REST endpoints.

use crate::{config::Config, error::Result, ProfileHubClientError};
use profile_hub::constants::headers;
use reqwest::{RequestBuilder, Response, StatusCode, Url};

/// One connection to the hosted platform, implementing all three service
/// contracts over HTTPS.
///
/// Built without request timeouts: a slow platform call parks its caller and
/// the owning workflow's busy flag stays set until the service responds.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    config: Config,
}

impl RestBackend {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub(crate) fn post_auth(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(&self.config.auth_url, endpoint)?;
        Ok(self.with_key(self.http.post(url)))
    }

    pub(crate) fn get_rest(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(&self.config.rest_url, endpoint)?;
        Ok(self.with_key(self.http.get(url)))
    }

    pub(crate) fn post_rest(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(&self.config.rest_url, endpoint)?;
        Ok(self.with_key(self.http.post(url)))
    }

    pub(crate) fn get_storage(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(&self.config.storage_url, endpoint)?;
        Ok(self.with_key(self.http.get(url)))
    }

    pub(crate) fn post_storage(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(&self.config.storage_url, endpoint)?;
        Ok(self.with_key(self.http.post(url)))
    }

    /// Pass a success response through, or turn an error response into the
    /// service's own failure description.
    pub(crate) async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let description = ["error_description", "message", "msg", "error"]
            .iter()
            .find_map(|key| body.get(key).and_then(|v| v.as_str()))
            .map(str::to_string);

        Err(match (status, description) {
            (StatusCode::UNAUTHORIZED, _) => ProfileHubClientError::Unauthorized,
            (_, Some(description)) => ProfileHubClientError::ServiceRejected(description),
            (status, None) => ProfileHubClientError::ServiceRejected(format!("HTTP {status}")),
        })
    }

    fn endpoint(&self, base: &Url, endpoint: &str) -> Result<Url> {
        base.join(endpoint)
            .map_err(|e| ProfileHubClientError::InvalidUri(e.to_string()))
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(headers::API_KEY, &self.config.api_key)
    }
}
