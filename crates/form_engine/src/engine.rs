use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::post::{PostSettings, Poster, ReqwestPoster};
use crate::submit::post_payload;
use crate::{EngineEvent, EngineStopped, RequestId};

enum EngineCommand {
    Post { request_id: RequestId, payload: Value },
}

/// Runs posts on a background tokio runtime and hands completions back
/// through a channel. Requests run independently; completions arrive in
/// whatever order the server answers.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: PostSettings) -> std::io::Result<Self> {
        Self::with_poster(Arc::new(ReqwestPoster::new(settings)))
    }

    pub fn with_poster(poster: Arc<dyn Poster>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let poster = poster.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(poster.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn post(&self, request_id: RequestId, payload: Value) -> Result<(), EngineStopped> {
        self.cmd_tx
            .send(EngineCommand::Post {
                request_id,
                payload,
            })
            .map_err(|_| EngineStopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// `Ok(None)` when nothing completed within `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EngineStopped),
        }
    }
}

async fn handle_command(
    poster: &dyn Poster,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Post {
            request_id,
            payload,
        } => {
            let result = post_payload(poster, &payload).await;
            let _ = event_tx.send(EngineEvent::SubmissionCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stopped_engine() -> EngineHandle {
        let (cmd_tx, _) = mpsc::channel();
        let (_, event_rx) = mpsc::channel();
        EngineHandle { cmd_tx, event_rx }
    }

    #[test]
    fn stopped_engine_rejects_posts() {
        let engine = stopped_engine();
        assert_eq!(engine.post(1, json!({"data": []})), Err(EngineStopped));
    }

    #[test]
    fn stopped_engine_is_not_a_timeout() {
        let engine = stopped_engine();
        assert!(matches!(
            engine.recv_timeout(Duration::from_millis(10)),
            Err(EngineStopped)
        ));
    }

    #[test]
    fn idle_engine_times_out_quietly() {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle { cmd_tx, event_rx };
        assert!(matches!(
            engine.recv_timeout(Duration::from_millis(10)),
            Ok(None)
        ));
    }
}
