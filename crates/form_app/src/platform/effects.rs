use std::time::Duration;

use console::Term;
use form_core::{Effect, Msg, RequestId, SubmitError};
use form_engine::{EngineEvent, EngineHandle, EngineStopped};
use form_logging::{form_debug, form_error, form_info, form_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    term: Term,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            term: Term::stdout(),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostJson {
                    request_id,
                    payload,
                } => {
                    form_info!("PostJson request_id={}", request_id);
                    if let Err(err) = self.engine.post(request_id, payload) {
                        form_error!("Could not queue request_id={}: {}", request_id, err);
                    }
                }
                Effect::SetTitle { title } => {
                    form_info!("SetTitle title={}", title);
                    self.set_title(&title);
                }
            }
        }
    }

    /// Writes the OSC window-title sequence; no-op when stdout is not a terminal.
    pub fn set_title(&self, title: &str) {
        if !self.term.is_term() {
            return;
        }
        if let Err(err) = self.term.write_str(&format!("\x1b]0;{title}\x07")) {
            form_debug!("Could not set terminal title: {}", err);
        }
    }

    /// Wait up to `timeout` for the next engine completion. A stopped engine
    /// fails the request in flight so the caller stops waiting for it.
    pub fn next_msg(&self, timeout: Duration, in_flight: Option<RequestId>) -> Option<Msg> {
        received_to_msg(self.engine.recv_timeout(timeout), in_flight)
    }
}

fn received_to_msg(
    received: Result<Option<EngineEvent>, EngineStopped>,
    in_flight: Option<RequestId>,
) -> Option<Msg> {
    match received {
        Ok(event) => event.map(event_to_msg),
        Err(err) => {
            let request_id = in_flight?;
            form_error!("Request {} abandoned: {}", request_id, err);
            Some(Msg::SubmissionCompleted {
                request_id,
                result: Err(SubmitError::NetworkError),
            })
        }
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted { request_id, result } => Msg::SubmissionCompleted {
            request_id,
            result: result.map_err(|err| {
                form_warn!("Request {} failed: {}", request_id, err);
                SubmitError::NetworkError
            }),
        },
    }
}
