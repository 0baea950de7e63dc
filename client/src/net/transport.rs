//! `Transport` over the browser fetch API.
//!
//! Client-side (hydrate): real requests via `gloo-net`, each bounded by the
//! request deadline and aborted when its future is dropped.
//! Server-side (SSR): every request fails with a network error, since the
//! REST backend is only called from the browser.

use api::ApiError;
use api::transport::{HttpRequest, HttpResponse, Transport};

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE_ON_SERVER: &str = "not available on server";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            match request.timeout {
                Some(limit) => with_deadline(fetch(request), limit).await,
                None => fetch(request).await,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network(UNAVAILABLE_ON_SERVER.to_owned()))
        }
    }
}

/// Aborts the pending fetch when dropped (deadline hit or caller cancelled).
#[cfg(feature = "hydrate")]
struct AbortOnDrop(web_sys::AbortController);

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    use api::transport::Method;
    use gloo_net::http::Request;

    let controller = web_sys::AbortController::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let guard = AbortOnDrop(controller);
    let signal = guard.0.signal();

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder = builder.abort_signal(Some(&signal));
    let outgoing = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(network)?;

    let response = outgoing.send().await.map_err(network)?;
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.map_err(network)?;
    Ok(HttpResponse { status, status_text, body })
}

#[cfg(feature = "hydrate")]
async fn with_deadline<F>(fut: F, limit: std::time::Duration) -> Result<HttpResponse, ApiError>
where
    F: std::future::Future<Output = Result<HttpResponse, ApiError>>,
{
    use futures::future::{Either, select};

    let timer = gloo_timers::future::sleep(limit);
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            log::warn!("request exceeded {}s deadline", limit.as_secs());
            Err(ApiError::Timeout)
        }
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
