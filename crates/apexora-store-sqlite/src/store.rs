//! [`SqliteStore`] — the SQLite implementation of [`SiteStore`].

use std::path::Path;

use chrono::{DateTime, Utc};

use apexora_core::{
  model::{
    Inquiry, NewInquiry, NewSubscriber, NewTestimonial, Subscriber, Testimonial,
  },
  store::SiteStore,
};

use crate::{Result, schema::SCHEMA};

fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Apexora site store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SiteStore impl ──────────────────────────────────────────────────────────

impl SiteStore for SqliteStore {
  type Error = crate::Error;

  async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry> {
    let created_at = Utc::now();

    let name    = input.name.clone();
    let email   = input.email.clone();
    let subject = input.subject.clone();
    let message = input.message.clone();
    let at_str  = encode_dt(created_at);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO inquiries (name, email, subject, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![name, email, subject, message, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Inquiry {
      id,
      name: input.name,
      email: input.email,
      subject: input.subject,
      message: input.message,
      created_at,
    })
  }

  async fn testimonials(&self) -> Result<Vec<Testimonial>> {
    let rows: Vec<Testimonial> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, title, company, quote, rating, project_type, image_url
           FROM testimonials
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Testimonial {
              id:           row.get(0)?,
              name:         row.get(1)?,
              title:        row.get(2)?,
              company:      row.get(3)?,
              quote:        row.get(4)?,
              rating:       row.get(5)?,
              project_type: row.get(6)?,
              image_url:    row.get(7)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial> {
    let name         = input.name.clone();
    let title        = input.title.clone();
    let company      = input.company.clone();
    let quote        = input.quote.clone();
    let rating       = input.rating;
    let project_type = input.project_type.clone();
    let image_url    = input.image_url.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO testimonials
             (name, title, company, quote, rating, project_type, image_url)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            name,
            title,
            company,
            quote,
            rating,
            project_type,
            image_url,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Testimonial {
      id,
      name: input.name,
      title: input.title,
      company: input.company,
      quote: input.quote,
      rating: input.rating,
      project_type: input.project_type,
      image_url: input.image_url,
    })
  }

  async fn subscribe_newsletter(&self, input: NewSubscriber) -> Result<Subscriber> {
    let subscribed_at = Utc::now();

    let email  = input.email.clone();
    let at_str = encode_dt(subscribed_at);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subscribers (email, subscribed_at) VALUES (?1, ?2)",
          rusqlite::params![email, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Subscriber { id, email: input.email, subscribed_at })
  }
}
