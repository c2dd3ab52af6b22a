//! HTTP adapter over the browser `fetch()` API via gloo-net.
//!
//! Non-success statuses are passed through untouched; only network
//! failures and the optional timeout become errors here.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use newsgpt_core::ports::{HttpMethod, HttpPort, HttpRequest, HttpResponse};
use newsgpt_types::{config::ClientConfig, TransportError, TransportResult};

pub struct FetchHttp {
    timeout_ms: Option<u64>,
}

impl FetchHttp {
    pub fn new(timeout_ms: Option<u64>) -> Self {
        Self { timeout_ms }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.request_timeout_ms)
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn send(&self, req: HttpRequest) -> TransportResult<HttpResponse> {
        let Some(ms) = self.timeout_ms else {
            return fetch(req).await;
        };

        // The underlying fetch is not aborted; its result is simply dropped.
        let timer = TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX));
        let request = Box::pin(fetch(req));
        match future::select(request, Box::pin(timer)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("Request timed out after {}ms", ms);
                Err(TransportError::Timeout(ms))
            }
        }
    }
}

async fn fetch(req: HttpRequest) -> TransportResult<HttpResponse> {
    let mut builder = match req.method {
        HttpMethod::Get => Request::get(&req.url),
        HttpMethod::Post => Request::post(&req.url),
    };
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }

    let request = match req.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    Ok(HttpResponse { status, body })
}
