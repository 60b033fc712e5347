//! Integration tests for the envelope pipeline against the running service.

use serde_json::Value;
use std::net::SocketAddr;
use web_standard::Envelope;

mod common;

#[tokio::test]
async fn text_result_becomes_envelope_serialized_as_string() {
    let addr: SocketAddr = "127.0.0.1:28481".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/success"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "textual body keeps its textual content type, got {content_type}"
    );

    // The body is the envelope itself, serialized to a JSON string.
    let body = res.text().await.unwrap();
    let envelope: Envelope<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.message, "success");
    assert_eq!(envelope.data.as_deref(), Some("success"));

    shutdown.trigger();
}

#[tokio::test]
async fn json_result_is_wrapped_structurally() {
    let addr: SocketAddr = "127.0.0.1:28482".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    let envelope: Envelope<Value> = client
        .get(format!("http://{addr}/api/user"))
        .send()
        .await
        .expect("service unreachable")
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.message, "success");
    let data = envelope.data.unwrap();
    assert_eq!(data["name"], "guest");
    assert_eq!(data["id"], 1);

    shutdown.trigger();
}

#[tokio::test]
async fn empty_body_becomes_success_null() {
    let addr: SocketAddr = "127.0.0.1:28483".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/ping"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 200);

    let value: Value = res.json().await.unwrap();
    assert_eq!(value["code"], 0);
    assert_eq!(value["message"], "success");
    assert_eq!(value["data"], Value::Null);

    shutdown.trigger();
}

#[tokio::test]
async fn domain_failure_maps_to_code_1000() {
    let addr: SocketAddr = "127.0.0.1:28484".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/error"))
        .send()
        .await
        .expect("service unreachable");
    // The failure category lives in the envelope code, not the HTTP status.
    assert_eq!(res.status(), 200);

    let envelope: Envelope<Value> = res.json().await.unwrap();
    assert_eq!(envelope.code, 1000);
    assert_eq!(envelope.message, "business rule violated");
    assert_eq!(envelope.data, None);

    shutdown.trigger();
}

#[tokio::test]
async fn panic_maps_to_code_1001_and_service_keeps_serving() {
    let addr: SocketAddr = "127.0.0.1:28485".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    let envelope: Envelope<Value> = client
        .get(format!("http://{addr}/api/panic"))
        .send()
        .await
        .expect("service unreachable")
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.code, 1001);
    assert_eq!(envelope.message, "simulated unexpected failure");

    // The process must keep serving subsequent calls.
    let envelope: Envelope<Value> = client
        .get(format!("http://{addr}/api/user"))
        .send()
        .await
        .expect("service died after a panic")
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.code, 0);

    shutdown.trigger();
}

#[tokio::test]
async fn framework_rejections_are_not_relabeled_as_success() {
    let addr: SocketAddr = "127.0.0.1:28487".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    // Wrong method: the 405 must not come back as a code-0 envelope.
    let res = client
        .post(format!("http://{addr}/api/success"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 405);
    let body = res.text().await.unwrap();
    assert!(
        !body.contains("\"code\":0"),
        "405 body must not claim success: {body}"
    );

    // Unknown path: same for the 404.
    let res = client
        .get(format!("http://{addr}/api/missing"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 404);
    let body = res.text().await.unwrap();
    assert!(
        !body.contains("\"code\":0"),
        "404 body must not claim success: {body}"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn suppressed_logging_does_not_change_responses() {
    let addr: SocketAddr = "127.0.0.1:28486".parse().unwrap();
    let shutdown = common::start_service(addr).await;
    let client = common::client();

    for (path, expected) in [
        ("/api/less-url", "lessUrl"),
        ("/api/less-request", "lessRequest"),
        ("/api/less-response", "lessResponse"),
        ("/api/quiet", "quiet"),
        ("/api/verbose", "verbose"),
    ] {
        let body = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .expect("service unreachable")
            .text()
            .await
            .unwrap();
        let envelope: Envelope<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.code, 0, "{path}");
        assert_eq!(envelope.data.as_deref(), Some(expected), "{path}");
    }

    shutdown.trigger();
}
