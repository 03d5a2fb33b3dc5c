//! Asynchronous operations over a `Transport`.
//!
//! # Design
//! `Session` pairs a `PinboardClient` with a transport. Every operation
//! builds its request first, so local failures such as `NotAuthenticated`
//! return before the transport is touched, then awaits exactly one
//! round-trip and parses the result.
//!
//! `login` takes `&mut self` because it replaces the stored token. Two logins
//! cannot race on one session; callers sharing a session across tasks must
//! wrap it in their own lock.

use tracing::{debug, warn};

use crate::client::PinboardClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{redact_url, HttpMethod, HttpRequest, HttpResponse};
use crate::query::QueryParam;
use crate::transport::{Transport, UreqTransport};
use crate::types::{ApiResponse, Post, ResultCode};

pub struct Session<T = UreqTransport> {
    client: PinboardClient,
    transport: T,
}

impl Session<UreqTransport> {
    /// A session using the stock `ureq` transport.
    pub fn connect(username: &str, token: Option<&str>, config: ClientConfig) -> Self {
        Self::new(
            PinboardClient::with_config(username, token, config),
            UreqTransport::new(),
        )
    }
}

impl<T: Transport> Session<T> {
    pub fn new(client: PinboardClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PinboardClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange the password for an API token and keep it for later calls.
    pub async fn login(&mut self, password: &str) -> Result<String, ApiError> {
        let request = self.client.build_login(password);
        let response = self.send(request).await?;
        match self.client.parse_login(response) {
            Ok(token) => {
                debug!(username = self.client.username(), "logged in");
                Ok(token)
            }
            Err(e) => {
                warn!(username = self.client.username(), error = %e, "login failed");
                Err(e)
            }
        }
    }

    /// Issue an arbitrary authenticated request and decode its JSON body.
    pub async fn request(
        &self,
        method: HttpMethod,
        api_path: &str,
        params: &[QueryParam],
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.client.build_request(method, api_path, params, body)?;
        let response = self.send(request).await?;
        self.client.parse_response(response)
    }

    pub async fn list_posts(&self, params: &[QueryParam]) -> Result<Vec<Post>, ApiError> {
        let request = self.client.build_list_posts(params)?;
        let response = self.send(request).await?;
        self.client.parse_list_posts(response)
    }

    pub async fn add(
        &self,
        url: &str,
        description: &str,
        params: &[QueryParam],
    ) -> Result<ResultCode, ApiError> {
        let request = self.client.build_add(url, description, params)?;
        let response = self.send(request).await?;
        self.client.parse_add(response)
    }

    pub async fn delete(&self, url: &str, params: &[QueryParam]) -> Result<ResultCode, ApiError> {
        let request = self.client.build_delete(url, params)?;
        let response = self.send(request).await?;
        self.client.parse_delete(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let target = redact_url(&request.url);
        debug!(%method, url = %target, "sending request");
        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(%method, url = %target, status = response.status, "received response");
                if response.status == 429 {
                    warn!(url = %target, "rate limited by server");
                }
                Ok(response)
            }
            Err(e) => {
                warn!(%method, url = %target, error = %e, "request failed");
                Err(e)
            }
        }
    }
}
