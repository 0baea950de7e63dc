//! `Transport` over `reqwest`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use api::ApiError;
use api::transport::{HttpRequest, HttpResponse, Method, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns the builder error when the TLS backend cannot initialize.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(concat!("delfos-cli/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(Self { client })
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn classify(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() { ApiError::Timeout } else { ApiError::Network(err.to_string()) }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let mut builder = self.client.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(limit) = request.timeout {
            builder = builder.timeout(limit);
        }
        let response = builder.send().await.map_err(|e| classify(&e))?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = response.text().await.map_err(|e| classify(&e))?;
        Ok(HttpResponse { status: status.as_u16(), status_text, body })
    }
}
