//! Domain records: inquiries, testimonials, and newsletter subscribers.
//!
//! Records are create-only; nothing in the system updates or deletes them.
//! The `New*` input types carry the client-supplied fields and deserialise
//! leniently (missing required strings become empty and are caught by the
//! validation schema, which owns the error message). The store assigns `id`
//! and any timestamp on insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Inquiry ─────────────────────────────────────────────────────────────────

/// Client-supplied fields of a contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub subject: String,
  #[serde(default)]
  pub message: String,
}

/// A stored contact-form submission awaiting human follow-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}

// ─── Testimonial ─────────────────────────────────────────────────────────────

/// Client- or seed-supplied fields of a testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
  #[serde(default)]
  pub name:         String,
  #[serde(default)]
  pub title:        String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company:      Option<String>,
  #[serde(default)]
  pub quote:        String,
  /// 1–5 stars; 5 when the key is omitted.
  #[serde(default = "default_rating")]
  pub rating:       i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url:    Option<String>,
}

/// A displayed client endorsement with attribution and rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
  pub id:           i64,
  pub name:         String,
  pub title:        String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company:      Option<String>,
  pub quote:        String,
  pub rating:       i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url:    Option<String>,
}

const fn default_rating() -> i64 { 5 }

// ─── Subscriber ──────────────────────────────────────────────────────────────

/// Client-supplied fields of a newsletter signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriber {
  #[serde(default)]
  pub email: String,
}

/// An email address opted into newsletter communications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
  pub id:            i64,
  pub email:         String,
  pub subscribed_at: DateTime<Utc>,
}
