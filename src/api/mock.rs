//! Canned-response HTTP server for client tests
//!
//! Thin layer over `wiremock`: routes match on method and exact path, and
//! every request that reaches the server is recorded in arrival order,
//! including ones no route matched (answered 404).

use std::sync::{Arc, Mutex};

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

use super::client::TwistClient;

pub const TEST_TOKEN: &str = "test-token";

/// One request as received on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    fn from_wire(request: &Request) -> Self {
        Self {
            method: request.method.as_str().to_string(),
            path: request.url.path().to_string(),
            query: request.url.query().map(str::to_string),
            headers: request
                .headers
                .iter()
                .map(|(k, v)| {
                    (
                        k.as_str().to_ascii_lowercase(),
                        String::from_utf8_lossy(v.as_bytes()).into_owned(),
                    )
                })
                .collect(),
            body: request.body.clone(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

type Log = Arc<Mutex<Vec<RecordedRequest>>>;

/// Records the request, then answers with a fixed status and body.
struct Recording {
    log: Log,
    status: u16,
    body: Vec<u8>,
}

impl Respond for Recording {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.log
            .lock()
            .unwrap()
            .push(RecordedRequest::from_wire(request));
        ResponseTemplate::new(self.status).set_body_raw(self.body.clone(), "application/json")
    }
}

pub struct MockServer {
    inner: wiremock::MockServer,
    requests: Log,
}

impl MockServer {
    pub async fn start() -> Self {
        let inner = wiremock::MockServer::start().await;
        let requests = Log::default();

        Mock::given(any())
            .respond_with(Recording {
                log: requests.clone(),
                status: 404,
                body: b"no route".to_vec(),
            })
            .with_priority(u8::MAX)
            .mount(&inner)
            .await;

        Self { inner, requests }
    }

    /// Base URL of a port nothing listens on.
    pub async fn closed_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn url(&self) -> String {
        self.inner.uri()
    }

    pub fn client(&self) -> TwistClient {
        TwistClient::with_base_url(TEST_TOKEN, &self.inner.uri()).unwrap()
    }

    /// Earlier routes win when two match the same request.
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: impl Into<Vec<u8>>) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(Recording {
                log: self.requests.clone(),
                status,
                body: body.into(),
            })
            .mount(&self.inner)
            .await;
    }

    pub async fn respond_json(&self, verb: &str, route: &str, value: serde_json::Value) {
        self.respond(verb, route, 200, value.to_string()).await;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}
