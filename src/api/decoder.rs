use super::models::{StatsResponse, UpstreamError, STATUS_ERROR};
use super::request::StatsRequest;
use super::transport::RawResponse;
use crate::error::AppError;
use tracing::{debug, error, warn};

/// Turn a raw response into `R`. The upstream answers 200 with `"status": "error"`
/// for private profiles and stale tokens, so a clean parse is not enough.
pub fn decode<R: StatsResponse>(raw: RawResponse, request: &StatsRequest) -> Result<R, AppError> {
    debug!(status = raw.status(), kind = request.target(), "decoding response");
    let body = raw.into_string()?;

    let mut result: R = serde_json::from_str(&body).map_err(|e| {
        error!(kind = request.target(), error = %e, "response did not match the expected shape");
        AppError::DecodeError(e.to_string())
    })?;

    if result.status() == STATUS_ERROR {
        let reason = upstream_reason(&body);
        warn!(
            kind = request.target(),
            reason = reason.as_deref().unwrap_or("none given"),
            "upstream rejected {}; check the profile is public and the tokens are fresh",
            request.label()
        );
        let detail = match reason {
            Some(reason) => format!("{} ({})", request.label(), reason),
            None => request.label(),
        };
        return Err(AppError::UpstreamRejected(detail));
    }

    result.stamp(request);
    Ok(result)
}

/// The message from an error body, e.g. "Not permitted: not allowed" for a private profile.
fn upstream_reason(body: &str) -> Option<String> {
    serde_json::from_str::<UpstreamError>(body)
        .ok()
        .map(|e| e.data.message)
        .filter(|message| !message.is_empty())
}
