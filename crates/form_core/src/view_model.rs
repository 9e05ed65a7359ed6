use crate::FilterName;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub title: String,
    pub input: String,
    pub error_message: Option<&'static str>,
    /// Pretty-printed response body of the last successful attempt.
    pub raw_response: Option<String>,
    pub filter_options: Vec<FilterOptionView>,
    pub filtered_lines: Vec<String>,
    pub pending: bool,
}

impl AppViewModel {
    pub fn selected_filters(&self) -> Vec<FilterName> {
        self.filter_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.name)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptionView {
    pub name: FilterName,
    pub selected: bool,
}
