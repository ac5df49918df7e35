//! Router-level tests driving the full API against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use roster_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  api_router(Arc::new(store))
}

fn request(method: &str, path: &str, body: Option<Value>) -> Request<Body> {
  let builder = Request::builder().method(method).uri(path);
  match body {
    Some(json) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(json.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  }
}

async fn send(app: &Router, req: Request<Body>) -> Response {
  app.clone().oneshot(req).await.unwrap()
}

async fn body_json(response: Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  }
}

// ─── Lifecycle scenario ──────────────────────────────────────────────────────

#[tokio::test]
async fn student_lifecycle() {
  let app = app().await;

  // Create.
  let response = send(
    &app,
    request(
      "POST",
      "/students",
      Some(json!({
        "student_id": "S1",
        "first_name": "Ann",
        "last_name":  "Lee",
        "email":      "a@x.com",
        "major":      "CS",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::CREATED);
  let record = body_json(response).await;
  assert_eq!(record["id"], 1);
  assert_eq!(record["major"], "CS");
  assert!(record["created_at"].is_string());
  assert!(record["updated_at"].is_null());

  // Same external code, different email: duplicate on student_id.
  let response = send(
    &app,
    request(
      "POST",
      "/students",
      Some(json!({
        "student_id": "S1",
        "first_name": "Bob",
        "last_name":  "Ray",
        "email":      "b@x.com",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    body_json(response).await["error"],
    "student_id already exists",
  );

  // Different code, same email: duplicate on email.
  let response = send(
    &app,
    request(
      "POST",
      "/students",
      Some(json!({
        "student_id": "S2",
        "first_name": "Bob",
        "last_name":  "Ray",
        "email":      "a@x.com",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"], "email already exists");

  // Partial update changes only the supplied field.
  let response = send(
    &app,
    request("PUT", "/students/1", Some(json!({ "major": "Math" }))),
  )
  .await;
  assert_eq!(response.status(), StatusCode::OK);
  let updated = body_json(response).await;
  assert_eq!(updated["major"], "Math");
  assert_eq!(updated["first_name"], "Ann");
  assert!(updated["updated_at"].is_string());

  // Delete, then the record is gone.
  let response = send(&app, request("DELETE", "/students/1", None)).await;
  assert_eq!(response.status(), StatusCode::NO_CONTENT);
  assert_eq!(body_json(response).await, Value::Null);

  let response = send(&app, request("GET", "/students/1", None)).await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_validation_reports_every_field() {
  let app = app().await;

  let response = send(
    &app,
    request("POST", "/students", Some(json!({ "email": "nope" }))),
  )
  .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let body = body_json(response).await;
  assert_eq!(body["error"], "validation failed");
  assert_eq!(body["fields"]["student_id"], "field is required");
  assert_eq!(body["fields"]["first_name"], "field is required");
  assert_eq!(body["fields"]["last_name"], "field is required");
  assert_eq!(body["fields"]["email"], "must be a valid email address");
}

#[tokio::test]
async fn update_validation_rejects_blank_fields() {
  let app = app().await;
  send(
    &app,
    request(
      "POST",
      "/patients",
      Some(json!({
        "patient_id": "P1",
        "first_name": "Bo",
        "last_name":  "Hart",
        "email":      "bo@x.com",
      })),
    ),
  )
  .await;

  let response = send(
    &app,
    request("PUT", "/patients/1", Some(json!({ "first_name": " " }))),
  )
  .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert_eq!(body["fields"]["first_name"], "must not be empty");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
  let app = app().await;

  let response = send(
    &app,
    Request::builder()
      .method("POST")
      .uri("/students")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap(),
  )
  .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ─── Not-found paths ─────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_ids_are_not_found() {
  let app = app().await;

  let response = send(&app, request("GET", "/faculty/9", None)).await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);

  let response = send(
    &app,
    request("PUT", "/faculty/9", Some(json!({ "position": "Professor" }))),
  )
  .await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);

  let response = send(&app, request("DELETE", "/faculty/9", None)).await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    body_json(response).await["error"],
    "faculty member not found: 9",
  );
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_respects_skip_and_limit() {
  let app = app().await;
  for i in 0..4 {
    let response = send(
      &app,
      request(
        "POST",
        "/patients",
        Some(json!({
          "patient_id": format!("P{i}"),
          "first_name": "Bo",
          "last_name":  "Hart",
          "email":      format!("p{i}@x.com"),
        })),
      ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
  }

  let response =
    send(&app, request("GET", "/patients?skip=1&limit=2", None)).await;
  assert_eq!(response.status(), StatusCode::OK);

  let page = body_json(response).await;
  let codes: Vec<&str> = page
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["patient_id"].as_str().unwrap())
    .collect();
  assert_eq!(codes, ["P1", "P2"]);
}

// ─── Category specifics ──────────────────────────────────────────────────────

#[tokio::test]
async fn it_staff_defaults_are_applied() {
  let app = app().await;

  let response = send(
    &app,
    request(
      "POST",
      "/it-staff",
      Some(json!({
        "staff_id":   "IT1",
        "first_name": "Sam",
        "last_name":  "Ortiz",
        "email":      "sam@x.com",
        "role":       "System Admin",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::CREATED);

  let record = body_json(response).await;
  assert_eq!(record["department"], "Information Technology");
  assert_eq!(record["access_level"], "standard");
}

#[tokio::test]
async fn email_uniqueness_is_per_category() {
  let app = app().await;

  let response = send(
    &app,
    request(
      "POST",
      "/students",
      Some(json!({
        "student_id": "S1",
        "first_name": "Ann",
        "last_name":  "Lee",
        "email":      "shared@x.com",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::CREATED);

  let response = send(
    &app,
    request(
      "POST",
      "/patients",
      Some(json!({
        "patient_id": "P1",
        "first_name": "Bo",
        "last_name":  "Hart",
        "email":      "shared@x.com",
      })),
    ),
  )
  .await;
  assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn put_with_null_clears_a_nullable_field() {
  let app = app().await;
  send(
    &app,
    request(
      "POST",
      "/staff",
      Some(json!({
        "staff_id":   "ST1",
        "first_name": "Kai",
        "last_name":  "Ruiz",
        "email":      "kai@x.com",
        "department": "Facilities",
      })),
    ),
  )
  .await;

  let response = send(
    &app,
    request("PUT", "/staff/1", Some(json!({ "department": null }))),
  )
  .await;
  assert_eq!(response.status(), StatusCode::OK);
  assert!(body_json(response).await["department"].is_null());
}
