//! Blocking HTTP execution of built requests.
//!
//! # Design
//! `Transport` is the seam between the pure request/response layer and the
//! network. `UreqTransport` wraps one `ureq::Agent`, which is cheap to clone
//! and safe to share, so a single instance serves every call. Non-2xx
//! statuses come back as data, leaving status interpretation to
//! `PrinterClient::parse_*`.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and returns the corresponding `HttpResponse`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, fields = request.form.len(), "POST");
        let mut response = self
            .agent
            .post(&request.url)
            .send_form(request.form.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let transport = UreqTransport::new(Duration::from_secs(2));
        let request = HttpRequest::post(format!("http://{addr}/")).field("a", "b");
        let err = transport.execute(request).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
