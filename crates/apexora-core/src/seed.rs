//! The canonical testimonial seed set.
//!
//! Three fixed records inserted once, by the caller, when the store holds
//! no testimonials — a fresh deployment should not render an empty
//! social-proof section.

use crate::{model::NewTestimonial, store::SiteStore};

fn seed_set() -> [NewTestimonial; 3] {
  [
    NewTestimonial {
      name:         "Sarah Chen".into(),
      title:        "CTO".into(),
      company:      Some("TechFlow Solutions".into()),
      quote:        "Apexora transformed our legacy infrastructure into a scalable \
                     cloud-native powerhouse. Their technical expertise is unmatched."
        .into(),
      rating:       5,
      project_type: Some("Cloud Migration".into()),
      image_url:    None,
    },
    NewTestimonial {
      name:         "Marcus Rodriguez".into(),
      title:        "Product Director".into(),
      company:      Some("Innovate Inc".into()),
      quote:        "The mobile app they built for us captured our brand perfectly \
                     and performs flawlessly on both platforms."
        .into(),
      rating:       5,
      project_type: Some("Mobile App Development".into()),
      image_url:    None,
    },
    NewTestimonial {
      name:         "Emily Watson".into(),
      title:        "Marketing Head".into(),
      company:      Some("Growth Digital".into()),
      quote:        "Their data analytics dashboard gave us insights we didn't know \
                     we were missing. Truly game-changing for our strategy."
        .into(),
      rating:       5,
      project_type: Some("Data Analytics".into()),
      image_url:    None,
    },
  ]
}

/// Insert the canonical testimonials if the store holds none.
///
/// Idempotent: a store that already contains any testimonial is left
/// untouched.
pub async fn seed_testimonials<S: SiteStore>(store: &S) -> Result<(), S::Error> {
  if !store.testimonials().await?.is_empty() {
    return Ok(());
  }
  for input in seed_set() {
    store.create_testimonial(input).await?;
  }
  Ok(())
}
