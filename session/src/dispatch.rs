//! Request dispatcher: the HTTP client wrapper every auth call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dispatcher owns the default `Authorization` header. The session
//! manager updates it synchronously on every token transition, before any
//! request that depends on the new credential is issued, so a "who am I"
//! lookup can never race ahead of its own header.
//!
//! The actual I/O is delegated to a [`Transport`]: `gloo-net` in the
//! browser, `reqwest` natively, a scripted mock in tests.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SessionError;
use crate::types::Token;

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Fully-formed request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Platform I/O seam. Futures are not required to be `Send` so browser
/// fetch futures qualify.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] when no response was received.
    /// Non-success statuses are NOT errors at this layer.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SessionError>;
}

pub struct RequestDispatcher {
    transport: Box<dyn Transport>,
    base_url: String,
    authorization: Mutex<Option<String>>,
}

impl RequestDispatcher {
    pub fn new(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { transport, base_url, authorization: Mutex::new(None) }
    }

    /// Install (`Some`) or remove (`None`) the default bearer header.
    pub fn set_token(&self, token: Option<&Token>) {
        let mut slot = self.authorization.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = token.map(Token::bearer);
    }

    /// Header value currently attached to outgoing requests.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.authorization.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// # Errors
    ///
    /// See [`RequestDispatcher::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SessionError> {
        self.send(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`RequestDispatcher::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, SessionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Post, path, Some(encode(body)?)).await
    }

    /// # Errors
    ///
    /// See [`RequestDispatcher::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, SessionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Put, path, Some(encode(body)?)).await
    }

    /// Send a request with the default headers and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Network`] from the transport
    /// - [`SessionError::Unauthorized`] on 401
    /// - [`SessionError::Rejected`] on any other non-2xx status
    /// - [`SessionError::Decode`] if a success body does not match `T`
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, SessionError> {
        let request = self.build(method, path, body);
        tracing::debug!(method = method.as_str(), url = %request.url, "dispatching request");

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body));
        }
        serde_json::from_str(&response.body).map_err(|e| SessionError::Decode(e.to_string()))
    }

    fn build(&self, method: Method, path: &str, body: Option<Value>) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(auth) = self.authorization() {
            headers.push((AUTHORIZATION.to_owned(), auth));
        }
        HttpRequest { method, url: self.url(path), headers, body }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, SessionError> {
    serde_json::to_value(body).map_err(|e| SessionError::Decode(e.to_string()))
}

/// Map a non-success response into a [`SessionError`], extracting the
/// server's message from `message`, `msg` or `error` when present.
pub(crate) fn rejection(status: u16, body: &str) -> SessionError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "msg", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_owned))
        })
        .unwrap_or_default();
    if status == 401 {
        SessionError::Unauthorized { message }
    } else {
        SessionError::Rejected { status, message }
    }
}

// =============================================================================
// NATIVE TRANSPORT
// =============================================================================

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use std::time::Duration;

    use super::{HttpRequest, HttpResponse, Method, SessionError, Transport};
    use crate::config::Timeouts;

    /// `reqwest`-backed transport for native hosts.
    pub struct ReqwestTransport {
        http: reqwest::Client,
    }

    impl ReqwestTransport {
        /// # Errors
        ///
        /// Returns [`SessionError::Config`] if the HTTP client cannot be built.
        pub fn new(timeouts: Timeouts) -> Result<Self, SessionError> {
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeouts.request_secs))
                .connect_timeout(Duration::from_secs(timeouts.connect_secs))
                .build()
                .map_err(|e| SessionError::Config(format!("http client build failed: {e}")))?;
            Ok(Self { http })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
            let mut builder = match request.method {
                Method::Get => self.http.get(&request.url),
                Method::Post => self.http.post(&request.url),
                Method::Put => self.http.put(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| SessionError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| SessionError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
    }
}
