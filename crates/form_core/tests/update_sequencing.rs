use form_core::{update, ApiResult, AppState, Effect, Msg, SubmitError};
use serde_json::json;

fn submit_text(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::Submitted)
}

fn request_id(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::PostJson { request_id, .. }] => *request_id,
        other => panic!("expected a single PostJson effect, got {other:?}"),
    }
}

fn ok(value: serde_json::Value) -> Result<ApiResult, SubmitError> {
    Ok(ApiResult::from_value(value).expect("object response"))
}

#[test]
fn request_ids_increase_per_attempt() {
    let (state, first) = submit_text(AppState::new(), "1");
    let (_state, second) = submit_text(state, "2");

    assert_eq!(request_id(&first), 1);
    assert_eq!(request_id(&second), 2);
}

#[test]
fn stale_completion_is_ignored() {
    let (state, first) = submit_text(AppState::new(), r#"{"n": 1}"#);
    let (state, second) = submit_text(state, r#"{"n": 2}"#);
    let first = request_id(&first);
    let second = request_id(&second);

    // The newer request resolves first.
    let (state, _) = update(
        state,
        Msg::SubmissionCompleted {
            request_id: second,
            result: ok(json!({"roll_number": "NEW"})),
        },
    );
    let (state, effects) = update(
        state,
        Msg::SubmissionCompleted {
            request_id: first,
            result: ok(json!({"roll_number": "OLD"})),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.title(), "NEW");
    assert_eq!(
        state.result().and_then(ApiResult::roll_number),
        Some("NEW")
    );
}

#[test]
fn stale_failure_does_not_hide_pending_request() {
    let (state, first) = submit_text(AppState::new(), "[]");
    let (state, second) = submit_text(state, "[1]");

    let (state, _) = update(
        state,
        Msg::SubmissionCompleted {
            request_id: request_id(&first),
            result: Err(SubmitError::NetworkError),
        },
    );

    assert_eq!(state.error(), None);
    assert!(state.view().pending);
    assert_eq!(state.in_flight(), Some(request_id(&second)));
}

#[test]
fn invalid_attempt_supersedes_in_flight_request() {
    let (state, first) = submit_text(AppState::new(), "{}");
    let (state, effects) = submit_text(state, "not json");
    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), None);

    let (state, _) = update(
        state,
        Msg::SubmissionCompleted {
            request_id: request_id(&first),
            result: ok(json!({"numbers": ["1"]})),
        },
    );

    assert_eq!(state.error(), Some(SubmitError::InvalidJson));
    assert!(state.result().is_none());
}
