//! JSON REST API for the Apexora marketing site.
//!
//! Exposes an axum [`Router`] backed by any
//! [`apexora_core::store::SiteStore`]. Transport, CORS, and static-asset
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", apexora_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod inquiries;
pub mod newsletter;
pub mod testimonials;

use std::sync::Arc;

use apexora_core::store::SiteStore;
use axum::{
  Router,
  routing::{get, post},
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SiteStore + 'static,
{
  Router::new()
    .route("/inquiries", post(inquiries::create::<S>))
    .route("/testimonials", get(testimonials::list::<S>))
    .route("/newsletter/subscribe", post(newsletter::subscribe::<S>))
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use apexora_core::{
    memory::MemStore,
    model::{
      Inquiry, NewInquiry, NewSubscriber, NewTestimonial, Subscriber, Testimonial,
    },
    seed::seed_testimonials,
  };
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn app(store: &Arc<MemStore>) -> Router {
    api_router(store.clone())
  }

  async fn post(router: Router, uri: &str, body: Value) -> Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    router.oneshot(req).await.unwrap()
  }

  async fn get_uri(router: Router, uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn valid_inquiry() -> Value {
    json!({
      "name": "Jane Doe",
      "email": "jane@example.com",
      "subject": "Hello",
      "message": "Hi there",
    })
  }

  // ── POST /inquiries ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_inquiry_round_trip() {
    let store = Arc::new(MemStore::new());

    let resp = post(app(&store), "/inquiries", valid_inquiry()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["subject"], "Hello");
    assert_eq!(body["message"], "Hi there");
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
  }

  #[tokio::test]
  async fn missing_required_fields_are_named() {
    let store = Arc::new(MemStore::new());

    for field in ["name", "email", "subject", "message"] {
      let mut body = valid_inquiry();
      body.as_object_mut().unwrap().remove(field);

      let resp = post(app(&store), "/inquiries", body).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

      let err = body_json(resp).await;
      assert_eq!(err["field"], field);
      assert!(err["message"].is_string());
    }

    // Nothing was persisted along the way.
    let resp = post(app(&store), "/inquiries", valid_inquiry()).await;
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
  }

  #[tokio::test]
  async fn invalid_email_is_rejected_with_field() {
    let store = Arc::new(MemStore::new());

    let mut body = valid_inquiry();
    body["email"] = json!("not-an-email");

    let resp = post(app(&store), "/inquiries", body).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err = body_json(resp).await;
    assert_eq!(err["field"], "email");
    assert_eq!(err["message"], "Invalid email address");
  }

  #[tokio::test]
  async fn successive_inquiries_get_distinct_ids() {
    let store = Arc::new(MemStore::new());

    let first = body_json(post(app(&store), "/inquiries", valid_inquiry()).await).await;
    let second = body_json(post(app(&store), "/inquiries", valid_inquiry()).await).await;

    assert_ne!(first["id"], second["id"]);
    assert!(first["id"].as_i64() < second["id"].as_i64());
  }

  // ── GET /testimonials ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn testimonials_return_the_seeded_set() {
    let store = Arc::new(MemStore::new());
    seed_testimonials(store.as_ref()).await.unwrap();

    let resp = get_uri(app(&store), "/testimonials").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "Sarah Chen");
    assert_eq!(list[2]["name"], "Emily Watson");

    // Idempotent absent intervening writes.
    let again = body_json(get_uri(app(&store), "/testimonials").await).await;
    assert_eq!(body, again);
  }

  #[tokio::test]
  async fn testimonials_empty_store_returns_empty_list() {
    let store = Arc::new(MemStore::new());

    let resp = get_uri(app(&store), "/testimonials").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
  }

  // ── POST /newsletter/subscribe ──────────────────────────────────────────────

  #[tokio::test]
  async fn subscribe_returns_confirmation_message() {
    let store = Arc::new(MemStore::new());

    let resp = post(
      app(&store),
      "/newsletter/subscribe",
      json!({ "email": "jane@example.com" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
      body_json(resp).await,
      json!({ "message": "Subscribed successfully" })
    );
  }

  #[tokio::test]
  async fn subscribe_rejects_bad_email_with_message_only() {
    let store = Arc::new(MemStore::new());

    let resp = post(
      app(&store),
      "/newsletter/subscribe",
      json!({ "email": "not-an-email" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err = body_json(resp).await;
    assert_eq!(err["message"], "Invalid email address");
    assert!(err.get("field").is_none());
  }

  // ── Store failures ──────────────────────────────────────────────────────────

  #[derive(Debug, thiserror::Error)]
  #[error("backend unavailable")]
  struct BackendDown;

  /// A store whose every operation fails, for exercising the 500 path.
  #[derive(Debug, Default)]
  struct FailingStore;

  impl SiteStore for FailingStore {
    type Error = BackendDown;

    async fn create_inquiry(&self, _input: NewInquiry) -> Result<Inquiry, BackendDown> {
      Err(BackendDown)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, BackendDown> {
      Err(BackendDown)
    }

    async fn create_testimonial(
      &self,
      _input: NewTestimonial,
    ) -> Result<Testimonial, BackendDown> {
      Err(BackendDown)
    }

    async fn subscribe_newsletter(
      &self,
      _input: NewSubscriber,
    ) -> Result<Subscriber, BackendDown> {
      Err(BackendDown)
    }
  }

  #[tokio::test]
  async fn store_failures_answer_a_generic_500() {
    let store = Arc::new(FailingStore);
    let generic = json!({ "message": "Internal server error" });

    let resp = post(api_router(store.clone()), "/inquiries", valid_inquiry()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Exactly the generic body; the backend detail stays out of the response.
    assert_eq!(body_json(resp).await, generic);

    let resp = get_uri(api_router(store.clone()), "/testimonials").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, generic);

    let resp = post(
      api_router(store),
      "/newsletter/subscribe",
      json!({ "email": "jane@example.com" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, generic);
  }

  #[tokio::test]
  async fn subscribe_accepts_duplicate_emails() {
    let store = Arc::new(MemStore::new());
    let body = json!({ "email": "repeat@example.com" });

    let first = post(app(&store), "/newsletter/subscribe", body.clone()).await;
    let second = post(app(&store), "/newsletter/subscribe", body).await;

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);
  }
}
