//! Upload helper tests against a recording transport.

mod support;

use request_api::prelude::*;
use request_api::RequestBody;
use serde_json::json;
use std::sync::{Arc, Mutex};
use support::{MockReply, MockTransport, client, header};

fn recorder() -> (ProgressFn, Arc<Mutex<Vec<f64>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let cb: ProgressFn = Arc::new(move |p: f64| sink.lock().unwrap().push(p));
    (cb, seen)
}

#[tokio::test]
async fn upload_reports_progress_and_returns_raw_response() {
    let transport = MockTransport::new()
        .progress([0.42])
        .reply(MockReply::json(201, json!({"fileId": "f-1"})));
    let api = client(&transport);
    let (cb, seen) = recorder();

    let resp = api
        .file_upload("/upload", "multipart/form-data", b"--form--".to_vec(), Some(cb))
        .await
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![0.42]);
    assert_eq!(resp.status, 201);
    assert_eq!(
        resp.headers.get("content-type").unwrap(),
        "application/json"
    );
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["fileId"], "f-1");
}

#[tokio::test]
async fn upload_url_is_not_prefixed_and_carries_content_type_only() {
    let transport = MockTransport::new().reply(MockReply::text(200, "ok"));
    let api = client(&transport);

    api.file_upload(
        "/upload",
        "multipart/form-data; boundary=abc",
        &b"payload"[..],
        None,
    )
    .await
    .unwrap();

    let req = transport.only_request();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "/upload");
    assert_eq!(
        header(&req, "content-type"),
        Some("multipart/form-data; boundary=abc")
    );
    assert_eq!(header(&req, "authorization"), None);
    assert_eq!(
        req.body,
        RequestBody::Bytes(bytes::Bytes::from_static(b"payload"))
    );
    assert!(req.on_upload_progress.is_none());
}

#[tokio::test]
async fn upload_error_status_is_not_reshaped() {
    let transport = MockTransport::new().reply(MockReply::json(413, json!({"message": "too large"})));
    let api = client(&transport);

    let err = api
        .file_upload("https://files.example.com/upload", "image/png", vec![0u8; 16], None)
        .await
        .unwrap_err();

    let resp = err.into_response().expect("error carries the response");
    assert_eq!(resp.status, 413);
    assert_eq!(resp.text(), r#"{"message":"too large"}"#);
}

#[tokio::test]
async fn upload_network_failure_propagates_unchanged() {
    let transport = MockTransport::new().reply(MockReply::network("broken pipe"));
    let api = client(&transport);

    let err = api
        .file_upload("https://files.example.com/upload", "image/png", vec![1u8; 4], None)
        .await
        .unwrap_err();
    match err {
        TransportError::Network(reason) => assert_eq!(reason, "broken pipe"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upload_rejects_invalid_content_type_before_sending() {
    let transport = MockTransport::new();
    let api = client(&transport);

    let err = api
        .file_upload("/upload", "text/plain\r\nX-Injected: 1", Vec::<u8>::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::InvalidHeader(_)));
    assert!(transport.recorded().is_empty());
}
