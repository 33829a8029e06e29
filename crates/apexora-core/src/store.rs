//! The `SiteStore` trait — the storage service behind the API.
//!
//! Implemented by [`MemStore`](crate::memory::MemStore) and by the SQLite
//! backend crate. Handlers depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::model::{
  Inquiry, NewInquiry, NewSubscriber, NewTestimonial, Subscriber, Testimonial,
};

/// Abstraction over the site's persistence backend.
///
/// Inputs are validated before they reach the store; no operation here
/// re-checks field constraints. Identifier assignment is monotonic and
/// atomic with respect to concurrent calls — two concurrent creates never
/// receive the same id.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with `axum`).
pub trait SiteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new inquiry, assigning the next identifier and the current
  /// timestamp.
  fn create_inquiry(
    &self,
    input: NewInquiry,
  ) -> impl Future<Output = Result<Inquiry, Self::Error>> + Send + '_;

  /// All testimonials, in insertion order. Repeated calls return the same
  /// sequence absent intervening writes.
  fn testimonials(
    &self,
  ) -> impl Future<Output = Result<Vec<Testimonial>, Self::Error>> + Send + '_;

  /// Persist a new testimonial, assigning the next identifier.
  ///
  /// Not exposed over HTTP; used by the startup seed path and by tests.
  fn create_testimonial(
    &self,
    input: NewTestimonial,
  ) -> impl Future<Output = Result<Testimonial, Self::Error>> + Send + '_;

  /// Persist a newsletter signup, assigning the next identifier and the
  /// subscription timestamp. Duplicate emails are accepted as-is.
  fn subscribe_newsletter(
    &self,
    input: NewSubscriber,
  ) -> impl Future<Output = Result<Subscriber, Self::Error>> + Send + '_;
}
