use crate::error::AppError;
use std::io::Read;
use tracing::{debug, warn};

/// Response body still on the wire. Dropping it releases the connection.
pub struct RawResponse {
    status: u16,
    body: Box<dyn Read + Send + Sync + 'static>,
}

impl RawResponse {
    pub fn new(status: u16, body: Box<dyn Read + Send + Sync + 'static>) -> Self {
        RawResponse { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Read the whole body, consuming the response.
    pub fn into_string(mut self) -> Result<String, AppError> {
        let mut body = String::new();
        self.body
            .read_to_string(&mut body)
            .map_err(|e| AppError::BodyReadError(e.to_string()))?;
        Ok(body)
    }
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse").field("status", &self.status).finish()
    }
}

pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse, AppError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse, AppError> {
        debug!(url, "GET");

        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.set(name, value);
        }

        // The upstream ignores the body but the request has always carried one.
        match request.send_json(serde_json::Value::Null) {
            Ok(resp) => Ok(RawResponse::new(resp.status(), resp.into_reader())),
            Err(ureq::Error::Status(code, resp)) => {
                // Failures are reported in the body; let the decoder classify it.
                warn!(code, url, "upstream returned an error status");
                Ok(RawResponse::new(code, resp.into_reader()))
            }
            Err(e) => Err(AppError::TransportError(e.to_string())),
        }
    }
}
