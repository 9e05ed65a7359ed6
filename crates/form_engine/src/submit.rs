use form_core::{parse_payload, ApiResult, SubmitError};
use form_logging::{form_debug, form_warn};
use serde_json::Value;

use crate::{decode_response, PostError, Poster};

/// Validate `raw` as JSON and post it.
///
/// Invalid text fails with [`SubmitError::InvalidJson`] before any network
/// call. Every failure after parsing collapses into
/// [`SubmitError::NetworkError`]; the cause is only logged.
pub async fn submit(poster: &dyn Poster, raw: &str) -> Result<ApiResult, SubmitError> {
    let payload = parse_payload(raw)?;
    post_payload(poster, &payload).await.map_err(|err| {
        form_warn!("Submission failed: {}", err);
        SubmitError::NetworkError
    })
}

/// POST an already parsed payload and decode the response body.
pub async fn post_payload(poster: &dyn Poster, payload: &Value) -> Result<ApiResult, PostError> {
    let output = poster.post_json(payload).await?;
    form_debug!(
        "POST {} -> {} ({} bytes, content_type={:?})",
        output.metadata.endpoint,
        output.metadata.status,
        output.metadata.byte_len,
        output.metadata.content_type
    );
    Ok(decode_response(&output.bytes)?)
}
