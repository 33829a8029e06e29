//! `MemStore` — the in-memory reference backend.
//!
//! Keeps the contract a persistent backend must honour: one process-wide
//! monotonic identifier counter and insertion-ordered reads. Used by the
//! router tests and for running the server without infrastructure.

use std::{
  convert::Infallible,
  sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;

use crate::{
  model::{
    Inquiry, NewInquiry, NewSubscriber, NewTestimonial, Subscriber, Testimonial,
  },
  store::SiteStore,
};

#[derive(Debug, Default)]
struct State {
  inquiries:    Vec<Inquiry>,
  testimonials: Vec<Testimonial>,
  subscribers:  Vec<Subscriber>,
  next_id:      i64,
}

/// An in-memory [`SiteStore`]. Share it behind an `Arc`; the single mutex
/// gives the identifier counter its single-writer discipline.
#[derive(Debug, Default)]
pub struct MemStore {
  state: Mutex<State>,
}

impl MemStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn state(&self) -> MutexGuard<'_, State> {
    // The state is plain data; a poisoned lock leaves it consistent.
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl SiteStore for MemStore {
  type Error = Infallible;

  async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, Infallible> {
    let mut state = self.state();
    state.next_id += 1;

    let inquiry = Inquiry {
      id:         state.next_id,
      name:       input.name,
      email:      input.email,
      subject:    input.subject,
      message:    input.message,
      created_at: Utc::now(),
    };
    state.inquiries.push(inquiry.clone());
    Ok(inquiry)
  }

  async fn testimonials(&self) -> Result<Vec<Testimonial>, Infallible> {
    Ok(self.state().testimonials.clone())
  }

  async fn create_testimonial(
    &self,
    input: NewTestimonial,
  ) -> Result<Testimonial, Infallible> {
    let mut state = self.state();
    state.next_id += 1;

    let testimonial = Testimonial {
      id:           state.next_id,
      name:         input.name,
      title:        input.title,
      company:      input.company,
      quote:        input.quote,
      rating:       input.rating,
      project_type: input.project_type,
      image_url:    input.image_url,
    };
    state.testimonials.push(testimonial.clone());
    Ok(testimonial)
  }

  async fn subscribe_newsletter(
    &self,
    input: NewSubscriber,
  ) -> Result<Subscriber, Infallible> {
    let mut state = self.state();
    state.next_id += 1;

    let subscriber = Subscriber {
      id:            state.next_id,
      email:         input.email,
      subscribed_at: Utc::now(),
    };
    state.subscribers.push(subscriber.clone());
    Ok(subscriber)
  }
}
