//! Handler for `/inquiries`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/inquiries` | Body: `{name, email, subject, message}` |

use std::sync::Arc;

use apexora_core::{
  model::NewInquiry, store::SiteStore, validate::validate_inquiry,
};
use axum::{
  Json, extract::State, http::StatusCode, response::IntoResponse,
};

use crate::error::ApiError;

/// `POST /inquiries` — 201 with the stored record, or 400 with
/// `{message, field}` for the first failed constraint.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewInquiry>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SiteStore,
{
  validate_inquiry(&body)?;

  let inquiry = store
    .create_inquiry(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  // Email delivery is not wired up; log the notification instead.
  tracing::info!(
    name = %inquiry.name,
    email = %inquiry.email,
    subject = %inquiry.subject,
    "new inquiry received",
  );

  Ok((StatusCode::CREATED, Json(inquiry)))
}
