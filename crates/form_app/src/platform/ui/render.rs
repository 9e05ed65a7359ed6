use console::Style;
use form_core::AppViewModel;

use super::constants::*;

/// Terminal lines for the whole form, top to bottom.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let heading = Style::new().bold().underlined();
    let section = Style::new().bold();
    let dim = Style::new().dim();
    let error = Style::new().red();

    let mut lines = vec![
        heading.apply_to(HEADING).to_string(),
        dim.apply_to(format!("Title: {}", view.title)).to_string(),
        String::new(),
        section.apply_to(INPUT_LABEL).to_string(),
    ];

    if view.input.is_empty() {
        lines.push(format!("  {}", dim.apply_to(INPUT_PLACEHOLDER)));
    } else {
        lines.extend(view.input.lines().map(|line| format!("  {line}")));
    }

    if let Some(message) = view.error_message {
        lines.push(error.apply_to(message).to_string());
    }
    if view.pending {
        lines.push(dim.apply_to(PENDING_TEXT).to_string());
    }

    if view.raw_response.is_some() {
        lines.push(String::new());
        lines.extend(render_response(view));
    }

    lines
}

/// The response block: raw body, current selection and filtered lines.
/// Empty until a submission has succeeded.
pub fn render_response(view: &AppViewModel) -> Vec<String> {
    let section = Style::new().bold();
    let Some(raw) = &view.raw_response else {
        return Vec::new();
    };

    let mut lines = vec![section.apply_to(RESPONSE_HEADING).to_string()];
    lines.extend(raw.lines().map(ToOwned::to_owned));

    lines.push(String::new());
    lines.push(format!("{} {}", FILTER_PROMPT, selection_summary(view)));

    if !view.filtered_lines.is_empty() {
        lines.push(String::new());
        lines.push(section.apply_to(FILTERED_HEADING).to_string());
        lines.extend(view.filtered_lines.iter().cloned());
    }

    lines
}

fn selection_summary(view: &AppViewModel) -> String {
    let selected = view.selected_filters();
    if selected.is_empty() {
        return "(none)".to_string();
    }
    selected
        .iter()
        .map(|name| name.label())
        .collect::<Vec<_>>()
        .join(", ")
}
