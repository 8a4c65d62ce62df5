// Scripted transport for unit tests.
// Replies are queued per request path (falling back to a shared queue) and
// every request is recorded.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

#[derive(Clone, Default)]
pub struct MockTransport {
    queue: Rc<RefCell<VecDeque<Reply>>>,
    routes: Rc<RefCell<HashMap<String, VecDeque<Reply>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

fn json_response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.to_string().into_bytes(),
    }
}

/// Path and query of an absolute URL
fn path_of(url: &str) -> &str {
    let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    after_scheme.find('/').map(|i| &after_scheme[i..]).unwrap_or("/")
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for whatever request comes next
    pub fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.queue.borrow_mut().push_back(Ok(json_response(status, &body)));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &[u8], headers: &[(&str, &str)]) -> &Self {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.queue.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.queue
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    /// Queue a JSON reply for the next request to `path` (path + query)
    pub fn on(&self, path: &str, status: u16, body: Value) -> &Self {
        self.routes
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(Ok(json_response(status, &body)));
        self
    }

    pub fn request(&self, index: usize) -> HttpRequest {
        self.requests.borrow()[index].clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Requests sent to `path`
    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| path_of(&r.url) == path)
            .cloned()
            .collect()
    }

    pub fn body_json(&self, index: usize) -> Value {
        let body = self.request(index).body.expect("request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }

    fn next_reply(&self, request: &HttpRequest) -> Reply {
        let path = path_of(&request.url);
        if let Some(reply) = self
            .routes
            .borrow_mut()
            .get_mut(path)
            .and_then(|queue| queue.pop_front())
        {
            return reply;
        }
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {} {}", request.method.as_str(), request.url))
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        // Let concurrently polled callers interleave like real I/O would
        YieldNow(false).await;
        self.next_reply(&request)
    }
}

struct YieldNow(bool);

impl std::future::Future for YieldNow {
    type Output = ();

    fn poll(mut self: std::pin::Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> std::task::Poll<()> {
        if self.0 {
            std::task::Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    }
}

#[test]
fn path_of_strips_scheme_and_host() {
    assert_eq!(path_of("http://api.test/api/x?y=1"), "/api/x?y=1");
    assert_eq!(path_of("http://api.test"), "/");
}
