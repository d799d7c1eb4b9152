//! In-process stand-in for the Trello API, used by tests.
//!
//! Responses are canned per (method, path); every request that reaches the
//! server is recorded with its decoded query and JSON body.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::trello::client::TrelloClient;

pub const TEST_KEY: &str = "test-key";
pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Query parameters other than the credential pair.
    pub fn operation_params(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .filter(|(k, _)| k != "key" && k != "token")
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockTrello {
    base_url: String,
    state: MockState,
    handle: tokio::task::JoinHandle<()>,
}

impl MockTrello {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/1", addr),
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock server received no requests")
    }

    pub fn settings(&self) -> Settings {
        Settings::new(TEST_KEY, TEST_TOKEN).with_base_url(self.base_url.clone())
    }

    pub fn client(&self) -> TrelloClient {
        TrelloClient::new(&self.settings()).unwrap()
    }
}

impl Drop for MockTrello {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(State(state): State<MockState>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri
        .path()
        .strip_prefix("/1")
        .unwrap_or(uri.path())
        .to_string();

    let query = reqwest::Url::parse(&format!("http://mock{}", uri))
        .map(|url| url.query_pairs().into_owned().collect())
        .unwrap_or_default();

    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query,
        body,
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();

    match canned {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap();
            (status, Json(body)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "The requested resource was not found.").into_response(),
    }
}
