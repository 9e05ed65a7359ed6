use std::fmt;

use form_core::{AppViewModel, FilterName};
use inquire::{Editor, InquireError, MultiSelect, Select};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditInput,
    Submit,
    ChooseFields,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::EditInput => "Edit JSON input",
            Action::Submit => "Submit",
            Action::ChooseFields => "Select fields to display",
            Action::Quit => "Quit",
        })
    }
}

/// Actions offered for the current view; field selection needs a response.
pub fn available_actions(view: &AppViewModel) -> Vec<Action> {
    let mut actions = vec![Action::EditInput, Action::Submit];
    if view.raw_response.is_some() {
        actions.push(Action::ChooseFields);
    }
    actions.push(Action::Quit);
    actions
}

/// `Ok(None)` when the user backs out of the prompt.
pub fn ask_action(view: &AppViewModel) -> Result<Option<Action>, InquireError> {
    cancel_as_none(Select::new(ACTION_PROMPT, available_actions(view)).prompt())
}

/// Multi-line JSON is edited in the user's `$VISUAL`/`$EDITOR`, seeded with
/// `current`.
pub fn ask_input(current: &str) -> Result<Option<String>, InquireError> {
    let answer = input_editor(current).prompt().map(strip_final_newline);
    cancel_as_none(answer)
}

fn input_editor(current: &str) -> Editor<'_> {
    let editor = Editor::new(INPUT_LABEL).with_file_extension(".json");
    if current.is_empty() {
        editor.with_help_message(INPUT_PLACEHOLDER)
    } else {
        editor
            .with_predefined_text(current)
            .with_help_message(EDITOR_HELP)
    }
}

/// Editors terminate the saved file with a newline the user never typed.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

pub fn ask_filters(view: &AppViewModel) -> Result<Option<Vec<FilterName>>, InquireError> {
    let defaults = selected_indices(view);
    cancel_as_none(
        MultiSelect::new(FILTER_PROMPT, FilterName::ALL.to_vec())
            .with_default(&defaults)
            .prompt(),
    )
}

fn selected_indices(view: &AppViewModel) -> Vec<usize> {
    view.filter_options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.selected)
        .map(|(index, _)| index)
        .collect()
}

fn cancel_as_none<T>(answer: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err),
    }
}
