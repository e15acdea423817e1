//! Browser transport for the session request dispatcher.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail as network errors, since the session is
//! only resolved in the browser.

#![allow(clippy::unused_async)]

use session::{HttpRequest, HttpResponse, SessionError, Transport};

/// Fetch-backed [`Transport`]; stateless, headers come from the dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| SessionError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| SessionError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| SessionError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Network(format!("{} {} not available on server", request.method.as_str(), request.url)))
        }
    }
}
