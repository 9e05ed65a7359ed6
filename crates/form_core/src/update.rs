use form_logging::{form_debug, form_info};

use crate::{parse_payload, AppState, Effect, Msg, SelectedFilters};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => {
            state.clear_error();
            match parse_payload(state.input()) {
                Ok(payload) => {
                    let request_id = state.begin_request();
                    form_info!("Submitting request_id={}", request_id);
                    vec![Effect::PostJson {
                        request_id,
                        payload,
                    }]
                }
                Err(err) => {
                    form_debug!("Rejected input of {} bytes: {}", state.input().len(), err);
                    state.fail(err);
                    Vec::new()
                }
            }
        }
        Msg::SubmissionCompleted { request_id, result } => {
            // Latest submission wins: completions of superseded requests are dropped.
            if !state.is_latest_request(request_id) {
                form_debug!("Ignoring stale completion request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(result) => {
                    let title = result.roll_number().map(ToOwned::to_owned);
                    state.succeed(result);
                    match title {
                        Some(title) => {
                            state.set_title(title.clone());
                            vec![Effect::SetTitle { title }]
                        }
                        None => Vec::new(),
                    }
                }
                Err(err) => {
                    state.fail(err);
                    Vec::new()
                }
            }
        }
        Msg::SelectionChanged(selection) => {
            state.set_selection(SelectedFilters::from_selection(selection));
            Vec::new()
        }
    };

    (state, effects)
}
