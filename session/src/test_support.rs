//! Scripted transport shared by the crate's unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::dispatch::{AUTHORIZATION, HttpRequest, HttpResponse, Method, Transport};
use crate::error::SessionError;
use crate::types::User;

pub const BASE: &str = "http://api.test";

type Key = (Method, String);
/// Route plus the `Authorization` value a response is reserved for.
type RouteKey = (Method, String, Option<String>);

/// Responses are queued per (method, url), optionally per bearer token. The
/// last queued response for a route is sticky; an unscripted route yields a
/// network error.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<RouteKey, VecDeque<Result<HttpResponse, SessionError>>>>,
    gates: Mutex<HashMap<Key, Arc<Notify>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, None, Ok(HttpResponse::new(status, body.to_string())));
    }

    /// Like [`MockTransport::respond`], but only for requests carrying
    /// `Bearer <token>`. Takes precedence over untargeted responses.
    pub fn respond_to_token(&self, method: Method, path: &str, token: &str, status: u16, body: serde_json::Value) {
        let bearer = Some(format!("Bearer {token}"));
        self.push(method, path, bearer, Ok(HttpResponse::new(status, body.to_string())));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, None, Err(SessionError::Network(message.to_owned())));
    }

    /// Hold every request to this route until the returned handle is notified.
    pub fn gate(&self, method: Method, path: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert((method, format!("{BASE}{path}")), notify.clone());
        notify
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        let url = format!("{BASE}{path}");
        self.requests().into_iter().filter(|r| r.method == method && r.url == url).collect()
    }

    fn push(&self, method: Method, path: &str, bearer: Option<String>, response: Result<HttpResponse, SessionError>) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, format!("{BASE}{path}"), bearer))
            .or_default()
            .push_back(response);
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Arc<MockTransport> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        let key = (request.method, request.url.clone());
        let bearer = request.header(AUTHORIZATION).map(str::to_owned);
        self.requests.lock().unwrap().push(request);

        let gate = self.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let (method, url) = key;
        let targeted = (method, url.clone(), bearer);
        let mut routes = self.routes.lock().unwrap();
        let route = if routes.contains_key(&targeted) { targeted } else { (method, url, None) };
        let Some(queue) = routes.get_mut(&route) else {
            return Err(SessionError::Network(format!("no scripted response for {} {}", route.0.as_str(), route.1)));
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: Some(name.to_owned()),
        email: Some(format!("{}@example.com", name.to_ascii_lowercase())),
        profile_image: None,
        created_at: None,
    }
}

pub fn user_json(user: &User) -> serde_json::Value {
    serde_json::to_value(user).unwrap()
}
