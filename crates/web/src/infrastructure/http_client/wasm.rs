//! Fetch-backed transport for the browser
//!
//! Timeouts abort the fetch through an `AbortController` armed by a gloo
//! timer. The timer is dropped (and cancelled) once the response arrives.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;

use crate::ports::outbound::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

#[derive(Clone, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

fn map_gloo_error(e: gloo_net::Error, timed_out: bool) -> TransportError {
    if timed_out {
        return TransportError::Timeout;
    }
    match e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => TransportError::Aborted,
        other => TransportError::Network(other.to_string()),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "HTTP request");

        let controller = web_sys::AbortController::new()
            .map_err(|_| TransportError::InvalidRequest("AbortController unavailable".into()))?;
        let signal = controller.signal();

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let timed_out = Rc::new(Cell::new(false));
        let _timer = request.timeout.map(|timeout| {
            let flag = timed_out.clone();
            let controller = controller.clone();
            let ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(ms, move || {
                flag.set(true);
                controller.abort();
            })
        });

        let response = prepared
            .send()
            .await
            .map_err(|e| map_gloo_error(e, timed_out.get()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_gloo_error(e, timed_out.get()))?;

        Ok(HttpResponse { status, body })
    }
}
