//! The shared validation schema — single source of truth for field
//! constraints, applied identically wherever a record enters the system.
//!
//! Checks run in field declaration order and stop at the first violation,
//! so callers always receive exactly one field path + message pair. The
//! model is flat, so field paths are bare field names.

use thiserror::Error;

use crate::model::{NewInquiry, NewSubscriber, NewTestimonial};

/// A single failed constraint: the offending field and its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
  pub field:   &'static str,
  pub message: &'static str,
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn required(
  field: &'static str,
  value: &str,
  message: &'static str,
) -> Result<(), ValidationError> {
  if value.is_empty() {
    Err(ValidationError { field, message })
  } else {
    Ok(())
  }
}

/// `local@domain` with a dotted domain, a top-level label of at least two
/// characters, and no whitespace. Matches the permissive client-side check;
/// not a full RFC 5322 parser.
fn is_email(s: &str) -> bool {
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.is_empty()
    && !domain.contains('@')
    && domain.contains('.')
    && !domain.starts_with('.')
    && !domain.ends_with('.')
    && domain.rsplit('.').next().is_some_and(|tld| tld.len() >= 2)
    && !s.chars().any(char::is_whitespace)
}

fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
  if is_email(value) {
    Ok(())
  } else {
    Err(ValidationError { field, message: "Invalid email address" })
  }
}

// ─── Entity schemas ──────────────────────────────────────────────────────────

/// Validate a contact-form submission.
pub fn validate_inquiry(input: &NewInquiry) -> Result<(), ValidationError> {
  required("name", &input.name, "Name is required")?;
  email("email", &input.email)?;
  required("subject", &input.subject, "Subject is required")?;
  required("message", &input.message, "Message is required")?;
  Ok(())
}

/// Validate a testimonial. Optional fields (company, projectType, imageUrl)
/// accept absence without comment.
pub fn validate_testimonial(input: &NewTestimonial) -> Result<(), ValidationError> {
  required("name", &input.name, "Name is required")?;
  required("title", &input.title, "Title is required")?;
  required("quote", &input.quote, "Quote is required")?;
  if !(1..=5).contains(&input.rating) {
    return Err(ValidationError {
      field:   "rating",
      message: "Rating must be between 1 and 5",
    });
  }
  Ok(())
}

/// Validate a newsletter signup.
pub fn validate_subscriber(input: &NewSubscriber) -> Result<(), ValidationError> {
  email("email", &input.email)
}
