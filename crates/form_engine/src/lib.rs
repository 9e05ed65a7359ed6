//! Submission engine: HTTP POST pipeline, response decoding and effect execution.
mod decode;
mod engine;
mod post;
mod submit;
mod types;

pub use decode::{decode_response, DecodeError};
pub use engine::EngineHandle;
pub use post::{PostSettings, Poster, ReqwestPoster, DEFAULT_ENDPOINT};
pub use submit::{post_payload, submit};
pub use types::{EngineEvent, EngineStopped, FailureKind, PostError, PostMetadata, PostOutput, RequestId};
