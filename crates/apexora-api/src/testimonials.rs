//! Handler for `/testimonials`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/testimonials` | Insertion order; seeded at server startup |

use std::sync::Arc;

use apexora_core::{model::Testimonial, store::SiteStore};
use axum::{Json, extract::State};

use crate::error::ApiError;

/// `GET /testimonials`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Testimonial>>, ApiError>
where
  S: SiteStore,
{
  let testimonials = store
    .testimonials()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(testimonials))
}
