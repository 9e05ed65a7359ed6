use serde_json::Value;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST `payload` to the configured endpoint and report back with `request_id`.
    PostJson { request_id: RequestId, payload: Value },
    /// Replace the host window title.
    SetTitle { title: String },
}
