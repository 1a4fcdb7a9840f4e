use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use futures::stream::{Stream, StreamExt};
use serde_json::{json, Value};
use tower::ServiceExt;

use shopping_cart::{create_router, spawn_store, Action, AppState, Item, Store, StoreHandle};

fn app_with_store() -> (Router, StoreHandle) {
    let store = spawn_store(Store::new(), 16);
    let shelf = vec![Item::from("apple"), Item::from("banana")];
    let app = create_router(Arc::new(AppState::new(store.clone(), shelf)));
    (app, store)
}

fn app() -> Router {
    app_with_store().0
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get_cart(app: &Router) -> Value {
    let request = Request::builder().uri("/cart").body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn cart_starts_empty() {
    let app = app();
    assert_eq!(get_cart(&app).await, json!({"items": [], "count": 0}));
}

#[tokio::test]
async fn add_add_add_remove_through_the_api() {
    let app = app();

    for name in ["apple", "banana", "apple"] {
        let (status, body) = send_json(&app, "POST", "/cart/items", json!({"item": name})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "changed");
    }
    assert_eq!(get_cart(&app).await["items"], json!(["apple", "banana", "apple"]));

    let request = Request::builder()
        .method("DELETE")
        .uri("/cart/items/apple")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["cart"], json!(["banana", "apple"]));
}

#[tokio::test]
async fn removing_an_absent_item_is_not_an_error() {
    let app = app();
    send_json(&app, "POST", "/cart/items", json!({"item": "apple"})).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/cart/actions",
        json!({"type": "REMOVE_ITEM", "item": "pear"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unchanged");
    assert_eq!(body["cart"], json!(["apple"]));
}

#[tokio::test]
async fn unknown_action_type_leaves_the_cart_alone() {
    let app = app();
    send_json(&app, "POST", "/cart/actions", json!({"type": "ADD_ITEM", "item": "x"})).await;

    let (status, body) = send_json(&app, "POST", "/cart/actions", json!({"type": "UNKNOWN"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unchanged");
    assert_eq!(body["cart"], json!(["x"]));
}

#[tokio::test]
async fn empty_item_name_is_rejected() {
    let app = app();
    let (status, _) = send_json(&app, "POST", "/cart/items", json!({"item": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(get_cart(&app).await["count"], 0);
}

#[tokio::test]
async fn page_buttons_dispatch_and_redirect() {
    let app = app();

    let form = |uri: &str, body: &'static str| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    };

    let response = app.clone().oneshot(form("/ui/add", "item=banana")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    app.clone().oneshot(form("/ui/add", "item=apple")).await.unwrap();
    app.clone().oneshot(form("/ui/remove", "item=banana")).await.unwrap();
    assert_eq!(get_cart(&app).await["items"], json!(["apple"]));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes).unwrap();
    assert_eq!(html.matches("action=\"/ui/add\"").count(), 2);
    assert_eq!(html.matches("action=\"/ui/remove\"").count(), 1);
}

#[tokio::test]
async fn shelf_and_health() {
    let app = app();

    let request = Request::builder().uri("/shelf").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), json!(["apple", "banana"]));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap()["status"], "ok");
}

#[tokio::test]
async fn raw_add_action_with_empty_name_is_rejected() {
    let app = app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/cart/actions",
        json!({"type": "ADD_ITEM", "item": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(get_cart(&app).await["count"], 0);
}

/// Read body chunks until one full server-sent event has arrived
async fn next_event<S>(body: &mut S) -> String
where
    S: Stream<Item = Result<axum::body::Bytes, axum::Error>> + Unpin,
{
    let mut text = String::new();
    while !text.contains("\n\n") {
        let chunk = tokio::time::timeout(Duration::from_secs(5), body.next())
            .await
            .expect("timed out waiting for an event")
            .expect("event stream ended")
            .unwrap();
        text.push_str(std::str::from_utf8(&chunk).unwrap());
    }
    text
}

#[tokio::test]
async fn event_stream_sends_current_cart_then_each_change() {
    let (app, store) = app_with_store();
    store.dispatch(Action::add("apple")).await.unwrap();

    let request = Request::builder().uri("/cart/events").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    let mut body = response.into_body().into_data_stream();

    let first = next_event(&mut body).await;
    assert!(first.contains("event: cart"));
    assert!(first.contains(r#"data: ["apple"]"#));

    store.dispatch(Action::add("z")).await.unwrap();
    let second = next_event(&mut body).await;
    assert!(second.contains("event: cart"));
    assert!(second.contains(r#"data: ["apple","z"]"#));

    store.dispatch(Action::remove("apple")).await.unwrap();
    let third = next_event(&mut body).await;
    assert!(third.contains(r#"data: ["z"]"#));
}
