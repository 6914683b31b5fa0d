use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use todo_api::application::simple_todo_service::SimpleTodoServiceImpl;
use todo_api::domain::clock::SteppingClock;
use todo_api::http::routes::simple_todos;
use todo_api::http::routing;
use todo_api::infrastructure::memory_repo::MemoryRepository;
use tower::ServiceExt;

fn app() -> Router {
    let clock = Arc::new(SteppingClock::new(Utc::now(), 1));
    let service = SimpleTodoServiceImpl::with_clock(MemoryRepository::new(), clock);
    routing::app(simple_todos::router(simple_todos::AppState { service }))
}

#[tokio::test]
async fn duplicate_text_is_rejected() {
    let app = app();
    let res = request(&app, "POST", "/", Some(r#"{"text":"x"}"#)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = json_body(res).await;
    assert_eq!(body["message"], "Successfully created todo");
    assert_eq!(body["todo"]["id"], 0);
    assert_eq!(body["todo"]["text"], "x");
    assert!(body["todo"]["date"].is_string());

    let res = request(&app, "POST", "/", Some(r#"{"text":"x"}"#)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(res).await, json!({ "message": "Todo already exists" }));

    let res = request(&app, "GET", "/", None).await;
    assert_eq!(json_body(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_requires_text() {
    let app = app();
    for body in [r#"{}"#, r#"{"text":""}"#] {
        let res = request(&app, "POST", "/", Some(body)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["message"], "Todo text is required");
    }
}

#[tokio::test]
async fn unreadable_bodies_are_server_errors() {
    let app = app();
    let res = request(&app, "POST", "/", Some("not json")).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(res).await, json!({ "message": "Failed to create todo" }));

    let res = request(&app, "PUT", "/0", None).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(res).await, json!({ "message": "Failed to update todo" }));
}

#[tokio::test]
async fn update_and_delete() {
    let app = app();
    request(&app, "POST", "/", Some(r#"{"text":"a"}"#)).await;
    let res = request(&app, "POST", "/", Some(r#"{"text":"b"}"#)).await;
    let created_date = parse_time(&json_body(res).await["todo"]["date"]);

    let res = request(&app, "PUT", "/1", Some(r#"{"text":"a"}"#)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["message"], "Todo updated");
    assert_eq!(body["todo"], json!({ "id": 1, "text": "a", "date": body["todo"]["date"].clone() }));
    assert!(parse_time(&body["todo"]["date"]) > created_date);

    let res = request(&app, "PUT", "/9", Some(r#"{"text":"z"}"#)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = request(&app, "PUT", "/abc", Some(r#"{}"#)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = request(&app, "DELETE", "/0", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["message"], "Todo successfully deleted");
    assert_eq!(body["todo"]["text"], "a");

    let res = request(&app, "DELETE", "/0", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = request(&app, "DELETE", "/abc", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request(&app, "GET", "/", None).await;
    let ids: Vec<_> = json_body(res).await.as_array().unwrap().iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec![json!(1)]);
}

#[tokio::test]
async fn ids_keep_growing_after_deletions() {
    let app = app();
    request(&app, "POST", "/", Some(r#"{"text":"a"}"#)).await;
    request(&app, "DELETE", "/0", None).await;
    let res = request(&app, "POST", "/", Some(r#"{"text":"b"}"#)).await;
    assert_eq!(json_body(res).await["todo"]["id"], 1);
}

#[tokio::test]
async fn unsupported_methods_and_paths_are_not_found() {
    let app = app();
    request(&app, "POST", "/", Some(r#"{"text":"a"}"#)).await;
    for (method, path) in [("GET", "/0"), ("PATCH", "/"), ("POST", "/0"), ("GET", "/0/extra")] {
        let res = request(&app, method, path, None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {path}");
    }
}

// Bodies are sent without a content type; they are parsed as JSON regardless.
async fn request(app: &Router, method: &str, path: &str, body: Option<&str>) -> Response {
    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(raw) => req.body(Body::from(raw.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn json_body(res: Response) -> Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}

fn parse_time(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}
