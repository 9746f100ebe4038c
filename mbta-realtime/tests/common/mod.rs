//! Local stand-in for the realtime v2 API.
//!
//! Serves the JSON files in `tests/fixtures` on an ephemeral port and
//! records every request it sees. A few parameter values trigger failures:
//! `missing` answers 404, `garbled` answers 200 with a non-JSON body and
//! `slow` waits two seconds before answering. `partial` serves the
//! variant in `tests/fixtures/partial`, where some elements carry nulls,
//! numbers or the wrong shape.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use mbta_realtime::{Config, Gateway};
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "wX9NwuHnZU2ToO7GmGR9uw";

type RequestLog = Arc<Mutex<Vec<String>>>;

pub struct MockApi {
    pub base_url: String,
    requests: RequestLog,
}

#[allow(dead_code)]
impl MockApi {
    pub async fn start() -> Self {
        let requests = RequestLog::default();
        let app = Router::new().fallback(serve).with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api server");
        });

        Self {
            base_url: format!("http://{addr}/developer/api/v2"),
            requests,
        }
    }

    pub fn config(&self) -> Config {
        Config::new(TEST_KEY).with_base_url(&self.base_url)
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(self.config()).expect("gateway for mock api")
    }

    /// Path and query of every request so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Query string of the most recent request.
    pub fn last_query(&self) -> String {
        let requests = self.requests();
        let last = requests.last().expect("at least one request");
        last.split_once('?').map(|(_, q)| q.to_string()).unwrap_or_default()
    }
}

async fn serve(State(log): State<RequestLog>, uri: Uri) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_default();
    log.lock().unwrap().push(path_and_query);

    let pairs: Vec<(&str, &str)> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();

    if !pairs.contains(&("api_key", TEST_KEY)) {
        return (StatusCode::FORBIDDEN, "invalid api_key").into_response();
    }

    let values: Vec<&str> = pairs.iter().map(|(_, v)| *v).collect();
    if values.contains(&"missing") {
        return (StatusCode::NOT_FOUND, "no such stop or route").into_response();
    }
    if values.contains(&"garbled") {
        return (StatusCode::OK, "<html>upstream error</html>").into_response();
    }
    if values.contains(&"slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let endpoint = uri.path().rsplit('/').next().unwrap_or_default();
    match fixture(endpoint, values.contains(&"partial")) {
        Some(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => (StatusCode::NOT_FOUND, "unknown query").into_response(),
    }
}

fn fixture(endpoint: &str, partial: bool) -> Option<&'static str> {
    match (endpoint, partial) {
        ("routes", false) => Some(include_str!("../fixtures/routes.json")),
        ("routesbystop", false) => Some(include_str!("../fixtures/routesbystop.json")),
        ("stopsbyroute", false) => Some(include_str!("../fixtures/stopsbyroute.json")),
        ("stopsbylocation", false) => Some(include_str!("../fixtures/stopsbylocation.json")),
        ("schedulebystop", false) => Some(include_str!("../fixtures/schedulebystop.json")),
        ("routesbystop", true) => Some(include_str!("../fixtures/partial/routesbystop.json")),
        ("stopsbylocation", true) => Some(include_str!("../fixtures/partial/stopsbylocation.json")),
        _ => None,
    }
}
