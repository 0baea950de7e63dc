//! In-memory transport for tests.
//!
//! Routes are matched on method plus URL path (query string ignored); every
//! request is recorded so tests can assert on headers, bodies, and call
//! counts. Unmatched requests get a 404.

use std::cell::RefCell;

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

struct Route {
    method: Method,
    path: String,
    reply: Result<HttpResponse, ApiError>,
}

#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with `status` and a JSON body.
    #[must_use]
    pub fn with_json(self, method: Method, path: &str, status: u16, body: &serde_json::Value) -> Self {
        self.with_raw(method, path, status, &body.to_string())
    }

    /// Reply to `method path` with `status` and a raw body.
    #[must_use]
    pub fn with_raw(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let reply = Ok(HttpResponse {
            status,
            status_text: reason(status).to_owned(),
            body: body.to_owned(),
        });
        self.routes.borrow_mut().push(Route { method, path: path.to_owned(), reply });
        self
    }

    /// Fail `method path` without a response.
    #[must_use]
    pub fn with_error(self, method: Method, path: &str, error: ApiError) -> Self {
        self.routes.borrow_mut().push(Route { method, path: path.to_owned(), reply: Err(error) });
        self
    }

    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Requests whose URL path equals `path`.
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests.borrow().iter().filter(|r| url_path(&r.url) == path).cloned().collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = url_path(&request.url).to_owned();
        let method = request.method;
        self.requests.borrow_mut().push(request);
        let routes = self.routes.borrow();
        match routes.iter().find(|r| r.method == method && r.path == path) {
            Some(route) => route.reply.clone(),
            None => Ok(HttpResponse {
                status: 404,
                status_text: reason(404).to_owned(),
                body: r#"{"message":"no mock route"}"#.to_owned(),
            }),
        }
    }
}

fn url_path(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = without_scheme.find('/').map_or("/", |i| &without_scheme[i..]);
    path.split('?').next().unwrap_or(path)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}
