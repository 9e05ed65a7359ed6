//! Submission form core: pure state machine, filtered renderer and view-model helpers.
mod api_result;
mod effect;
mod error;
mod filter;
mod filtered;
mod msg;
mod state;
mod update;
mod view_model;

pub use api_result::ApiResult;
pub use effect::Effect;
pub use error::{parse_payload, SubmitError};
pub use filter::{FilterName, FilterParseError, SelectedFilters};
pub use filtered::render_filtered;
pub use msg::Msg;
pub use state::{AppState, RequestId, DEFAULT_TITLE};
pub use update::update;
pub use view_model::{AppViewModel, FilterOptionView};
