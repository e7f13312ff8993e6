//! vSphere REST API HTTP client with session-based authentication.
//!
//! Talks to vCenter / ESXi at `https://{host}:{port}/api/...`. A session is
//! created by [`VsphereClient::login`] and every later request carries its
//! token in the `vmware-api-session-id` header.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use vsnap_common::config::SessionConfig;
use vsnap_common::error::{InventoryError, InventoryResult};

const SESSION_HEADER: &str = "vmware-api-session-id";

pub struct VsphereClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    session_id: Option<String>,
}

impl VsphereClient {
    /// Builds a client from config. No request is made until [`login`](Self::login).
    pub fn new(config: &SessionConfig) -> InventoryResult<Self> {
        let base_url = format!("https://{}:{}", config.host, config.port);
        Self::with_base_url(config, base_url)
    }

    /// Like [`new`](Self::new), against an explicit base URL such as `http://127.0.0.1:8080`.
    pub fn with_base_url(
        config: &SessionConfig,
        base_url: impl Into<String>,
    ) -> InventoryResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InventoryError::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            session_id: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_connected(&self) -> bool {
        self.session_id.is_some()
    }

    /// `POST /api/session`.
    pub async fn login(&mut self) -> InventoryResult<()> {
        let url = format!("{}/api/session", self.base_url);
        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(http_error)?;

        let resp = check_status(resp).await?;
        // The token comes back as a quoted JSON string.
        let session_id: String = parse_response(resp).await?;

        info!("Opened session on {} as {}", self.base_url, self.username);
        self.session_id = Some(session_id);
        Ok(())
    }

    /// `DELETE /api/session`. Never fails; a rejected logout only leaves a warning.
    pub async fn logout(&mut self) {
        let Some(sid) = self.session_id.take() else {
            return;
        };

        let url = format!("{}/api/session", self.base_url);
        let outcome = self
            .client
            .delete(&url)
            .header(SESSION_HEADER, sid)
            .send()
            .await;
        match outcome {
            Ok(resp) if resp.status().is_success() => {
                info!("Closed session on {}", self.base_url)
            }
            Ok(resp) => warn!("Logout from {} returned {}", self.base_url, resp.status()),
            Err(e) => warn!("Logout from {} failed: {e}", self.base_url),
        }
    }

    fn require_session(&self) -> InventoryResult<&str> {
        self.session_id
            .as_deref()
            .ok_or_else(|| InventoryError::Authentication("no active session".to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> InventoryResult<T> {
        self.get_with_params(path, &[]).await
    }

    /// GET with query parameters. Repeated keys express set-valued filters.
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> InventoryResult<T> {
        let sid = self.require_session()?;
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {path} {params:?}");

        let mut request = self.client.get(&url).header(SESSION_HEADER, sid);
        if !params.is_empty() {
            request = request.query(params);
        }
        let resp = request.send().await.map_err(http_error)?;

        let resp = check_status(resp).await?;
        parse_response(resp).await
    }
}

fn http_error(e: reqwest::Error) -> InventoryError {
    if e.is_timeout() {
        InventoryError::Timeout(e.to_string())
    } else if e.is_connect() {
        InventoryError::Connection(e.to_string())
    } else {
        InventoryError::Http(e.to_string())
    }
}

async fn check_status(resp: Response) -> InventoryResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED => InventoryError::Authentication(body),
        StatusCode::FORBIDDEN => InventoryError::AccessDenied(body),
        StatusCode::NOT_FOUND => InventoryError::NotFound(body),
        _ => InventoryError::Api {
            status: status.as_u16(),
            message: body,
        },
    })
}

async fn parse_response<T: DeserializeOwned>(resp: Response) -> InventoryResult<T> {
    let text = resp
        .text()
        .await
        .map_err(|e| InventoryError::Parse(format!("failed to read response body: {e}")))?;

    serde_json::from_str(&text).map_err(|e| {
        let excerpt: String = text.chars().take(200).collect();
        InventoryError::Parse(format!("{e}; body: {excerpt}"))
    })
}
