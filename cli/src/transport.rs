//! ureq-backed `Transport`.
//!
//! # Design
//! The agent is built with `http_status_as_error(false)` so 4xx/5xx replies
//! come back as data for the core to print. No timeouts are configured; a
//! stalled server blocks the call.

use slide_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use tracing::warn;
use ureq::Agent;

/// Executes requests over real HTTP(S) with a single ureq agent.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Post => self.agent.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.send(request.body.as_slice()).map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            TransportError::new(e)
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(TransportError::new)?;

        Ok(HttpResponse { status, body })
    }
}
