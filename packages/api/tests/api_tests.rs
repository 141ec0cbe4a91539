use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use nyaya_api::{build_router, AppState};
use nyaya_assistant::llm::MockLlmClient;
use nyaya_assistant::{AssistantError, LegalAssistant};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(mock: MockLlmClient) -> Router {
    build_router(AppState {
        assistant: Arc::new(LegalAssistant::new(Arc::new(mock))),
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app(MockLlmClient::new(vec![]));
    let response = app.oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_returns_parsed_fields() {
    let app = test_app(MockLlmClient::with_response(
        "Sure.\n{\"answer\": \"Yes, under Section 125 CrPC.\", \
         \"related_questions\": [\"How much maintenance?\", \"Which court?\"], \
         \"intent\": \"legal_information\"}",
    ));

    let (status, body) = send(
        app,
        post_json("/analyze", json!({ "user_text": "Can my wife claim maintenance?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "answer": "Yes, under Section 125 CrPC.",
            "related_questions": ["How much maintenance?", "Which court?"],
            "intent": "legal_information"
        })
    );
}

#[tokio::test]
async fn analyze_missing_answer_uses_raw_text() {
    let raw = "Please consult a local advocate.";
    let app = test_app(MockLlmClient::with_response(raw));

    let (status, body) = send(
        app,
        post_json(
            "/analyze",
            json!({ "user_text": "help", "ui_lang": "Hindi", "anon": true, "location": "Delhi" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "answer": raw, "related_questions": [], "intent": "unknown" })
    );
}

#[tokio::test]
async fn analyze_without_user_text_is_rejected() {
    let app = test_app(MockLlmClient::new(vec![]));
    let (status, _) = send(app, post_json("/analyze", json!({ "ui_lang": "English" }))).await;
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let app = test_app(MockLlmClient::with_error(AssistantError::LlmApiError {
        status: 500,
        message: "internal".into(),
    }));

    let (status, body) = send(app, post_json("/analyze", json!({ "user_text": "hi" }))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["error"].as_str().unwrap_or_default().contains("internal"),
        "got {body}"
    );
}

#[tokio::test]
async fn agreement_returns_decoded_mapping() {
    let app = test_app(MockLlmClient::with_response(
        "```json\n{\"risks\": [\"Deposit is non-refundable\"], \"clauses\": [], \"redFlags\": [\"Unilateral termination\"]}\n```",
    ));

    let (status, body) = send(
        app,
        post_json("/agreement", json!({ "details": "Rental agreement text" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "risks": ["Deposit is non-refundable"],
            "clauses": [],
            "redFlags": ["Unilateral termination"]
        })
    );
}

#[tokio::test]
async fn agreement_without_json_returns_empty_object() {
    let app = test_app(MockLlmClient::with_response("Looks fine to me."));

    let (status, body) = send(
        app,
        post_json("/agreement", json!({ "details": "x", "ui_lang": "Marathi" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn case_analysis_shapes_response() {
    let app = test_app(MockLlmClient::with_response(
        r#"{"summary": "Dishonoured cheque", "laws": ["NI Act, Section 138"], "advice": "Send a demand notice."}"#,
    ));

    let (status, body) = send(
        app,
        post_json("/case-analysis", json!({ "user_text": "Cheque bounced", "anon": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "summary": "Dishonoured cheque",
            "laws": ["NI Act, Section 138"],
            "advice": "Send a demand notice."
        })
    );
}

#[tokio::test]
async fn case_analysis_defaults_when_unparsed() {
    let raw = "The facts suggest a civil dispute.";
    let app = test_app(MockLlmClient::with_response(raw));

    let (_, body) = send(app, post_json("/case-analysis", json!({ "user_text": "x" }))).await;

    assert_eq!(
        body,
        json!({ "summary": "Analysis unavailable", "laws": [], "advice": raw })
    );
}

#[tokio::test]
async fn nearby_with_coordinates_returns_hits() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (status, body) = send(app, get("/nearby?q=Delhi&lat=28.6&lon=77.2&limit=3")).await;

    assert_eq!(status, StatusCode::OK);
    let hits = body["hits"].as_array().expect("hits array");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0]["name"], "City Civil Court, Delhi");
    for hit in hits {
        for field in ["name", "rating", "address", "type"] {
            assert!(hit.get(field).is_some(), "missing {field}");
        }
    }
}

#[tokio::test]
async fn nearby_with_query_only_returns_geo() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (status, body) = send(app, get("/nearby?q=Delhi")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["geo"]["name"], "Delhi");
    assert!(body["geo"]["lat"].is_f64());
    assert!(body["geo"]["lon"].is_f64());
}

#[tokio::test]
async fn nearby_without_query_returns_usage_error() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (status, body) = send(app, get("/nearby?lat=12.97&lon=77.59")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Provide q or q+lat+lon" }));
}

#[tokio::test]
async fn nearby_geo_name_is_query_verbatim() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (_, body) = send(app, get("/nearby?q=%20Delhi%20")).await;

    assert_eq!(body["geo"]["name"], " Delhi ");
}

#[tokio::test]
async fn nearby_blank_query_returns_usage_error() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (_, body) = send(app, get("/nearby?q=%20%20&lat=1&lon=2")).await;

    assert_eq!(body, json!({ "error": "Provide q or q+lat+lon" }));
}

#[tokio::test]
async fn nearby_negative_limit_uses_default() {
    let app = test_app(MockLlmClient::new(vec![]));

    let (status, body) = send(app, get("/nearby?q=Delhi&lat=28.6&lon=77.2&limit=-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hits"].as_array().map(Vec::len), Some(5));
}
