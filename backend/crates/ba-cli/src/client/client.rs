use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

const SYNC_USER_PATH: &str = "/better-auth/v1/sync-user";

/// HTTP client for the bridge's sync endpoint.
///
/// Plays the identity provider's side: every request carries the shared
/// secret as a bearer token.
pub struct Client {
    pub base_url: String,
    api_secret: String,
    client: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "https://auth-bridge.example.com")
    /// * `api_secret` - Shared secret configured on the server
    pub fn new(base_url: &str, api_secret: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_secret: api_secret.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.api_secret)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let error = body.get("error");
            let field = |name: &str, fallback: &str| {
                error
                    .and_then(|e| e.get(name))
                    .and_then(|v| v.as_str())
                    .unwrap_or(fallback)
                    .to_string()
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                code: field("code", "UNKNOWN"),
                message: field("message", "Unknown error"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    /// POST /better-auth/v1/sync-user
    pub async fn sync_user(
        &self,
        id: &str,
        email: &str,
        name: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SyncUserBody<'a> {
            id: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
        }

        let body = SyncUserBody { id, email, name };
        let req = self.request(Method::POST, SYNC_USER_PATH).json(&body);
        self.execute(req).await
    }

    /// GET /health
    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.client.get(format!("{}/health", self.base_url));
        self.execute(req).await
    }
}
