use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use axum::Router;
use bird_server::routes::{router, Db};
use bird_server::{app, Bird, BirdServer, BirdStore};
use http_body_util::BodyExt;
use tokio::sync::RwLock;
use tower::ServiceExt;

const HUMMINGBIRD: &str = r#"{"name":"Hummingbird","type":"Tiny Tiny","info":"Cute but mean."}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

/// Router plus a handle on its store, for asserting what got persisted.
fn app_with_store() -> (Router, Db) {
    let db: Db = Arc::new(RwLock::new(BirdStore::new()));
    (router(db.clone()), db)
}

// --- create ---

#[tokio::test]
async fn create_bird_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/v1/bird", HUMMINGBIRD))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let bird: serde_json::Value = body_json(resp).await;
    assert_eq!(bird["name"], "Hummingbird");
    assert_eq!(bird["type"], "Tiny Tiny");
    assert_eq!(bird["info"], "Cute but mean.");
    assert!(bird["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn create_bird_without_content_type_is_accepted() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/bird")
                .body(HUMMINGBIRD.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn create_bird_nonsense_body_returns_400_and_stores_nothing() {
    let (app, db) = app_with_store();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/bird",
            r#"{"nonsense":"More nonsense"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = body_json(resp).await;
    assert_eq!(err["error"], "validation_error");
    assert!(db.read().await.is_empty());
}

#[tokio::test]
async fn create_bird_empty_object_returns_400() {
    let (app, db) = app_with_store();
    let resp = app
        .oneshot(json_request("POST", "/api/v1/bird", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(db.read().await.is_empty());
}

#[tokio::test]
async fn create_bird_empty_body_returns_400() {
    let (app, db) = app_with_store();
    let resp = app
        .oneshot(json_request("POST", "/api/v1/bird", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(db.read().await.is_empty());
}

#[tokio::test]
async fn create_bird_blank_field_returns_400() {
    let (app, db) = app_with_store();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/bird",
            r#"{"name":"Hummingbird","type":"","info":"Cute but mean."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(db.read().await.is_empty());
}

// --- get ---

#[tokio::test]
async fn get_bird_unknown_id_returns_404() {
    let resp = app()
        .oneshot(get_request("/api/v1/bird?id=1234"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = body_json(resp).await;
    assert_eq!(err["error"], "not_found");
}

#[tokio::test]
async fn get_bird_without_id_returns_400() {
    let resp = app().oneshot(get_request("/api/v1/bird")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_bird_with_empty_id_returns_400() {
    let resp = app().oneshot(get_request("/api/v1/bird?id=")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- list ---

#[tokio::test]
async fn list_birds_empty_returns_200() {
    let resp = app().oneshot(get_request("/api/v1/allbirds")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let birds: Vec<Bird> = body_json(resp).await;
    assert!(birds.is_empty());
}

#[tokio::test]
async fn list_bird_ids_empty_returns_200() {
    let resp = app().oneshot(get_request("/api/v1/bird/ids")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"[]");
}

// --- unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(get_request("/api/v1/nrkreisldkfe"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_returns_405() {
    let resp = app()
        .oneshot(json_request("DELETE", "/api/v1/bird?id=1234", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- full scenario ---

#[tokio::test]
async fn bird_lifecycle() {
    let (app, db) = app_with_store();

    // create
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/bird", HUMMINGBIRD))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Bird = body_json(resp).await;
    let id = created.id.to_string();

    // rejected payloads leave the store alone
    for body in [r#"{"nonsense":"More nonsense"}"#, "{}"] {
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/bird", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(db.read().await.len(), 1);

    // get
    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/bird?id={id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Bird = body_json(resp).await;
    assert_eq!(fetched, created);

    // list
    let resp = app
        .clone()
        .oneshot(get_request("/api/v1/allbirds"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let birds: Vec<Bird> = body_json(resp).await;
    assert_eq!(birds, vec![created]);

    // ids
    let resp = app.oneshot(get_request("/api/v1/bird/ids")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ids: Vec<String> = body_json(resp).await;
    assert_eq!(ids, vec![id]);
}

// --- lifecycle ---

#[tokio::test]
async fn server_starts_and_stops() {
    bird_server::telemetry::init();
    let server = BirdServer::start(0).await.unwrap();
    let addr = server.local_addr();
    assert_ne!(addr.port(), 0);

    tokio::net::TcpStream::connect(addr).await.unwrap();

    server.stop().await.unwrap();
    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}

/// Blocking GET/POST over real HTTP, run off the async runtime.
async fn http_call(method: &'static str, url: String, body: Option<&'static str>) -> (u16, String) {
    tokio::task::spawn_blocking(move || {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut response = match (method, body) {
            ("POST", Some(body)) => agent
                .post(&url)
                .content_type("application/json")
                .send(body.as_bytes()),
            _ => agent.get(&url).call(),
        }
        .unwrap();
        let status = response.status().as_u16();
        (status, response.body_mut().read_to_string().unwrap())
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn restarted_server_starts_with_empty_store() {
    let first = BirdServer::start(0).await.unwrap();
    let base = format!("http://{}", first.local_addr());

    let (status, _) = http_call("POST", format!("{base}/api/v1/bird"), Some(HUMMINGBIRD)).await;
    assert_eq!(status, 201);
    let (status, body) = http_call("GET", format!("{base}/api/v1/bird/ids"), None).await;
    assert_eq!(status, 200);
    let ids: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(ids.len(), 1);
    first.stop().await.unwrap();

    let second = BirdServer::start(0).await.unwrap();
    let base = format!("http://{}", second.local_addr());
    let (status, body) = http_call("GET", format!("{base}/api/v1/bird/ids"), None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "[]");

    let (status, _) = http_call("GET", format!("{base}/api/v1/bird?id={}", ids[0]), None).await;
    assert_eq!(status, 404);
    second.stop().await.unwrap();
}
