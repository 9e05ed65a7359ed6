pub const HEADING: &str = "Placement Assessment";
pub const INPUT_LABEL: &str = "API Input (JSON):";
pub const INPUT_PLACEHOLDER: &str = r#"e.g., { "data": ["M", "1", "334", "4", "B"] }"#;
pub const EDITOR_HELP: &str = "Press e to edit the JSON, Enter to keep it";
pub const ACTION_PROMPT: &str = "What next?";
pub const RESPONSE_HEADING: &str = "API Response";
pub const FILTER_PROMPT: &str = "Select fields to display:";
pub const FILTERED_HEADING: &str = "Filtered Response";
pub const PENDING_TEXT: &str = "Waiting for response...";
