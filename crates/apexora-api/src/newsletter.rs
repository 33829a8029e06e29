//! Handler for `/newsletter/subscribe`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/newsletter/subscribe` | Body: `{email}` |

use std::sync::Arc;

use apexora_core::{
  model::NewSubscriber, store::SiteStore, validate::validate_subscriber,
};
use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::ApiError;

/// `POST /newsletter/subscribe` — 201 `{message}` on success.
///
/// Validation failures answer `{message}` without a field path; the public
/// contract for this endpoint never carried one.
pub async fn subscribe<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSubscriber>,
) -> Result<Response, ApiError>
where
  S: SiteStore,
{
  if let Err(e) = validate_subscriber(&body) {
    let reply = (StatusCode::BAD_REQUEST, Json(json!({ "message": e.message })));
    return Ok(reply.into_response());
  }

  store
    .subscribe_newsletter(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let reply = (
    StatusCode::CREATED,
    Json(json!({ "message": "Subscribed successfully" })),
  );
  Ok(reply.into_response())
}
