use crate::filtered::render_filtered;
use crate::view_model::{AppViewModel, FilterOptionView};
use crate::{ApiResult, FilterName, SelectedFilters, SubmitError};

pub type RequestId = u64;

/// Title shown until a response supplies a `roll_number`.
pub const DEFAULT_TITLE: &str = "Placement Assessment";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    input: String,
    title: String,
    result: Option<ApiResult>,
    error: Option<SubmitError>,
    selected: SelectedFilters,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            title: title.into(),
            result: None,
            error: None,
            selected: SelectedFilters::new(),
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            title: self.title.clone(),
            input: self.input.clone(),
            error_message: self.error.map(SubmitError::message),
            raw_response: self.result.as_ref().map(ApiResult::to_pretty_json),
            filter_options: FilterName::ALL
                .into_iter()
                .map(|name| FilterOptionView {
                    name,
                    selected: self.selected.contains(name),
                })
                .collect(),
            filtered_lines: render_filtered(self.result.as_ref(), &self.selected),
            pending: self.in_flight.is_some(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn result(&self) -> Option<&ApiResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<SubmitError> {
        self.error
    }

    pub fn selected(&self) -> &SelectedFilters {
        &self.selected
    }

    /// Id of the request whose completion will be applied, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn set_selection(&mut self, selected: SelectedFilters) {
        self.selected = selected;
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Start a network attempt; any older in-flight request becomes stale.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        id
    }

    pub(crate) fn is_latest_request(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn succeed(&mut self, result: ApiResult) {
        self.in_flight = None;
        self.error = None;
        self.result = Some(result);
    }

    /// Record a failed attempt. The previous result is dropped so the error is
    /// the only outcome on display, and any in-flight request becomes stale.
    pub(crate) fn fail(&mut self, error: SubmitError) {
        self.in_flight = None;
        self.result = None;
        self.error = Some(error);
    }
}
