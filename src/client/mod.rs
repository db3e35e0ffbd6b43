//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod allocation;
mod cart;
mod inventory;
mod ordering;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Pagination, Password, Username, ValidationError};
use crate::transport::TransportError;

const DEFAULT_BASE_URL: &str = "https://api.voxbone.com/ws-voxbone/services/rest";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Put,
    Post,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a str,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a str,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let builder = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Put => self.client.put(url),
                HttpMethod::Post => self.client.post(url),
            };
            let mut builder = builder
                .basic_auth(
                    self.credentials.username.as_str(),
                    Some(self.credentials.password.as_str()),
                )
                .header(reqwest::header::ACCEPT, "application/json");
            if let Some(body) = body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// HTTP basic-authentication credentials for the provisioning API.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated [`Credentials`]; both parts must be non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VoxboneClient`].
///
/// Only request-level failures live here: transport problems, non-2xx HTTP
/// statuses, undecodable bodies, and rejected input values. Business-level
/// rejections (an unavailable DID group, a refused cart add) are ordinary
/// returned values, pattern-matchable on the response types.
pub enum VoxboneError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`VoxboneClient`].
///
/// Use this to point the client at another deployment or to tune the HTTP
/// behavior and default page window.
pub struct VoxboneClientBuilder {
    credentials: Credentials,
    base_url: String,
    default_pagination: Pagination,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VoxboneClientBuilder {
    /// Create a builder with the default base URL and page window.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            default_pagination: Pagination::DEFAULT,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the REST base URL. A trailing slash is tolerated.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the page window applied when a filter carries no pagination.
    pub fn default_pagination(mut self, pagination: Pagination) -> Self {
        self.default_pagination = pagination;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VoxboneClient`].
    pub fn build(self) -> Result<VoxboneClient, VoxboneError> {
        let base_url = self.base_url.trim_end_matches('/').to_owned();
        if url::Url::parse(&base_url).is_err() {
            return Err(VoxboneError::Validation(ValidationError::InvalidBaseUrl {
                input: self.base_url,
            }));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| VoxboneError::Transport(Box::new(err)))?;

        Ok(VoxboneClient {
            base_url,
            default_pagination: self.default_pagination,
            http: Arc::new(ReqwestTransport {
                client,
                credentials: self.credentials,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level client for the DID-provisioning REST API.
///
/// One method per endpoint, plus [`allocate`](VoxboneClient::allocate) which
/// chains inventory search, cart creation, item add, and checkout into the
/// end-to-end number-allocation workflow. The client holds no mutable state,
/// so independent calls may run concurrently on clones of one instance.
pub struct VoxboneClient {
    base_url: String,
    default_pagination: Pagination,
    http: Arc<dyn HttpTransport>,
}

impl VoxboneClient {
    /// Create a client against the default production base URL.
    ///
    /// For more customization, use [`VoxboneClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            default_pagination: Pagination::DEFAULT,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                credentials,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> VoxboneClientBuilder {
        VoxboneClientBuilder::new(credentials)
    }

    pub(crate) fn default_pagination(&self) -> Pagination {
        self.default_pagination
    }

    /// Issue one request and return the body of a 2xx response.
    pub(crate) async fn request(
        &self,
        method: HttpMethod,
        path_and_query: &str,
        body: Option<String>,
    ) -> Result<String, VoxboneError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        let response = self
            .http
            .send(method, &url, body)
            .await
            .map_err(VoxboneError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(VoxboneError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }

    pub(crate) fn parse_error(err: TransportError) -> VoxboneError {
        VoxboneError::Parse(Box::new(err))
    }
}
