use std::fmt;

use form_core::ApiResult;

use crate::decode::DecodeError;

pub use form_core::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SubmissionCompleted {
        request_id: RequestId,
        result: Result<ApiResult, PostError>,
    },
}

/// The engine thread has exited; no further completions will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("submission engine stopped")]
pub struct EngineStopped;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOutput {
    pub bytes: Vec<u8>,
    pub metadata: PostMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMetadata {
    pub endpoint: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// Detailed failure of one POST. Logged, then reported to the user as a
/// plain network error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostError {
    pub kind: FailureKind,
    pub message: String,
}

impl PostError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PostError {}

impl From<DecodeError> for PostError {
    fn from(err: DecodeError) -> Self {
        let kind = match &err {
            DecodeError::Malformed(_) => FailureKind::MalformedBody,
            DecodeError::NotAnObject { .. } => FailureKind::NotAnObject,
        };
        PostError::new(kind, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    NotAnObject,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid endpoint url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::NotAnObject => write!(f, "response is not a json object"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
