use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use form_core::{render_filtered, SelectedFilters, SubmitError};
use form_engine::{
    submit, FailureKind, PostError, PostMetadata, PostOutput, PostSettings, Poster, ReqwestPoster,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(form_logging::initialize_for_tests);
}

/// Records every payload and answers with a canned body.
struct CountingPoster {
    calls: AtomicUsize,
    payloads: Mutex<Vec<Value>>,
    reply: Result<Vec<u8>, FailureKind>,
}

impl CountingPoster {
    fn replying(body: Value) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
            reply: Ok(body.to_string().into_bytes()),
        }
    }

    fn failing(kind: FailureKind) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
            reply: Err(kind),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Poster for CountingPoster {
    async fn post_json(&self, payload: &Value) -> Result<PostOutput, PostError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.reply {
            Ok(bytes) => Ok(PostOutput {
                bytes: bytes.clone(),
                metadata: PostMetadata {
                    endpoint: "memory://fake".to_string(),
                    status: 200,
                    content_type: Some("application/json".to_string()),
                    byte_len: bytes.len() as u64,
                },
            }),
            Err(kind) => Err(PostError {
                kind: kind.clone(),
                message: "simulated".to_string(),
            }),
        }
    }
}

#[tokio::test]
async fn invalid_json_never_reaches_the_network() {
    init_logging();
    let poster = CountingPoster::replying(json!({}));

    for raw in ["", "{", "[1,,2]", "{\"data\": [\"M\"]", "undefined", "{'a': 1}"] {
        let result = submit(&poster, raw).await;
        assert_eq!(result, Err(SubmitError::InvalidJson), "{raw:?}");
    }
    assert_eq!(poster.calls(), 0);
}

#[tokio::test]
async fn valid_json_is_posted_exactly_once_as_parsed() {
    init_logging();
    let poster = CountingPoster::replying(json!({"is_success": true}));

    for (raw, parsed) in [
        (r#"{"data": ["A", "1"]}"#, json!({"data": ["A", "1"]})),
        ("  [1, 2, 3]\n", json!([1, 2, 3])),
        ("\"text\"", json!("text")),
    ] {
        let before = poster.calls();
        submit(&poster, raw).await.expect("submission ok");
        assert_eq!(poster.calls(), before + 1);
        assert_eq!(poster.payloads.lock().unwrap().last(), Some(&parsed));
    }
}

#[tokio::test]
async fn poster_failures_become_network_error() {
    init_logging();
    for kind in [
        FailureKind::Network,
        FailureKind::HttpStatus(404),
        FailureKind::HttpStatus(503),
        FailureKind::Timeout,
    ] {
        let poster = CountingPoster::failing(kind);
        let result = submit(&poster, r#"{"data": []}"#).await;
        assert_eq!(result, Err(SubmitError::NetworkError));
        assert_eq!(poster.calls(), 1);
    }
}

#[tokio::test]
async fn undecodable_response_becomes_network_error() {
    init_logging();
    let malformed = CountingPoster {
        calls: AtomicUsize::new(0),
        payloads: Mutex::new(Vec::new()),
        reply: Ok(b"<html>oops</html>".to_vec()),
    };
    let array = CountingPoster::replying(json!(["1", "2"]));

    assert_eq!(
        submit(&malformed, "{}").await,
        Err(SubmitError::NetworkError)
    );
    assert_eq!(submit(&array, "{}").await, Err(SubmitError::NetworkError));
}

#[tokio::test]
async fn round_trip_through_mock_endpoint() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bfhl"))
        .and(body_json(json!({"data": ["M", "1", "334", "4", "B"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_success": true,
            "roll_number": "22BCS12225",
            "numbers": ["1", "334", "4"],
            "alphabets": ["M", "B"],
            "highest_alphabet": ["M"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let poster = ReqwestPoster::new(PostSettings::with_endpoint(format!(
        "{}/bfhl",
        server.uri()
    )));

    let result = submit(&poster, r#"{"data":["M","1","334","4","B"]}"#)
        .await
        .expect("submission ok");

    assert_eq!(result.roll_number(), Some("22BCS12225"));
    assert_eq!(
        render_filtered(Some(&result), &SelectedFilters::all()),
        vec![
            "Numbers: 1, 334, 4",
            "Alphabets: M, B",
            "Highest Alphabet: M"
        ]
    );
}

#[tokio::test]
async fn invalid_json_sends_nothing_to_mock_endpoint() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let poster = ReqwestPoster::new(PostSettings::with_endpoint(server.uri()));

    assert_eq!(
        submit(&poster, "{ data: M }").await,
        Err(SubmitError::InvalidJson)
    );
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
}

#[tokio::test]
async fn server_error_from_mock_endpoint_is_network_error() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"is_success": false})))
        .expect(1)
        .mount(&server)
        .await;
    let poster = ReqwestPoster::new(PostSettings::with_endpoint(server.uri()));

    let result = submit(&poster, r#"{"data": ["A"]}"#).await;

    assert_eq!(result, Err(SubmitError::NetworkError));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Error calling API. Please verify your endpoint and payload."
    );
}
