// Generic HTTP helper for the events backend

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
pub use reqwest::Method;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use eventia_domain::{ApiResponse, RuntimeConfig};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {endpoint} (status {status}) is not JSON: {source}")]
    Decode {
        endpoint: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// Serialized as JSON text.
    Json(Value),
    /// Sent exactly as given.
    Raw(Vec<u8>),
}

impl ApiBody {
    fn into_bytes(self) -> Result<Vec<u8>, ApiError> {
        match self {
            ApiBody::Json(value) => Ok(serde_json::to_vec(&value)?),
            ApiBody::Raw(bytes) => Ok(bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: Method,
    pub body: Option<ApiBody>,
    pub is_json: bool,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: None,
            is_json: true,
            token: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(ApiBody::Json(body));
        self.is_json = true;
        self
    }

    /// Passes the body through untouched and drops the JSON content type.
    pub fn raw(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(ApiBody::Raw(body.into()));
        self.is_json = false;
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// The header is always present; a missing token is sent as the literal `null`.
pub fn bearer_header(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or("null"))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(ApiError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let ApiRequest {
            endpoint,
            method,
            body,
            is_json,
            token,
        } = request;
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self
            .client
            .request(method.clone(), url.as_str())
            .header(AUTHORIZATION, bearer_header(token.as_deref()));
        if is_json {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            builder = builder.body(body.into_bytes()?);
        }

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.clone(),
            source,
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.clone(),
            source,
        })?;
        debug!(%method, endpoint = %endpoint, status, bytes = bytes.len(), "backend response");

        let data = serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            endpoint,
            status,
            source,
        })?;
        Ok(ApiResponse::new(status, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventia_domain::LocationLookup;
    use serde_json::json;
    use wiremock::matchers::{body_bytes, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&RuntimeConfig {
            base_url: server.uri(),
            api_token: None,
            request_timeout_seconds: None,
            location_lookup: LocationLookup::Path,
            log_dir: None,
        })
        .expect("client")
    }

    #[test]
    fn missing_token_renders_literal_null() {
        assert_eq!(bearer_header(None), "Bearer null");
        assert_eq!(bearer_header(Some("abc")), "Bearer abc");
    }

    #[tokio::test]
    async fn default_request_sends_bearer_null_and_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .and(header("Authorization", "Bearer null"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .send(ApiRequest::get("/events"))
            .await
            .expect("send");
        assert_eq!(response, ApiResponse::new(200, json!([])));
    }

    #[tokio::test]
    async fn json_body_is_serialized_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .and(header("Authorization", "Bearer secret"))
            .and(body_json(json!({"userName": "ana"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .send(
                ApiRequest::new(Method::POST, "/users/login")
                    .json(json!({"userName": "ana"}))
                    .token(Some("secret".to_string())),
            )
            .await
            .expect("send");
        assert_eq!(response.status, 201);
        assert_eq!(response.data["ok"], true);
    }

    #[tokio::test]
    async fn raw_body_passes_through_without_json_header() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/events/1"))
            .and(body_bytes(b"name=Jazz".to_vec()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .send(ApiRequest::new(Method::PUT, "/events/1").raw("name=Jazz"))
            .await
            .expect("send");

        let received = server.received_requests().await.expect("recording enabled");
        assert!(received[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn error_status_is_a_normal_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!("Not found")))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .send(ApiRequest::get("/events/missing"))
            .await
            .expect("send");
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(response.data, json!("Not found"));
    }

    #[tokio::test]
    async fn empty_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/events/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(ApiRequest::new(Method::DELETE, "/events/1"))
            .await
            .expect_err("empty body");
        match err {
            ApiError::Decode { status, endpoint, .. } => {
                assert_eq!(status, 204);
                assert_eq!(endpoint, "/events/1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
