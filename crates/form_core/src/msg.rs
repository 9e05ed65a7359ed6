use crate::{ApiResult, FilterName, RequestId, SubmitError};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the JSON input.
    InputChanged(String),
    /// User submitted the current input.
    Submitted,
    /// Engine finished the request started for `request_id`.
    SubmissionCompleted {
        request_id: RequestId,
        result: Result<ApiResult, SubmitError>,
    },
    /// The filter widget reported a new selection; `None` when it has none.
    SelectionChanged(Option<Vec<FilterName>>),
}
