use serde_json::Value;

/// User-visible outcome of a failed submission attempt.
///
/// Each kind carries exactly one fixed message; the underlying cause is never
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid JSON format. Please check your input.")]
    InvalidJson,
    #[error("Error calling API. Please verify your endpoint and payload.")]
    NetworkError,
}

impl SubmitError {
    pub fn message(self) -> &'static str {
        match self {
            SubmitError::InvalidJson => "Invalid JSON format. Please check your input.",
            SubmitError::NetworkError => {
                "Error calling API. Please verify your endpoint and payload."
            }
        }
    }
}

/// Parse raw form text into the payload that will be posted.
pub fn parse_payload(raw: &str) -> Result<Value, SubmitError> {
    serde_json::from_str(raw).map_err(|_| SubmitError::InvalidJson)
}
