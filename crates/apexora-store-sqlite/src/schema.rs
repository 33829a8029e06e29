//! SQL schema for the Apexora SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Identifiers are SQLite-owned `AUTOINCREMENT` keys, which gives each
/// table the unique, monotonically-assigned ids the store contract
/// requires. Records are create-only; no UPDATE or DELETE is ever issued.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS inquiries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    subject     TEXT NOT NULL,
    message     TEXT NOT NULL,
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS testimonials (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    title        TEXT NOT NULL,
    company      TEXT,
    quote        TEXT NOT NULL,
    rating       INTEGER NOT NULL DEFAULT 5,   -- validated to [1,5] upstream
    project_type TEXT,
    image_url    TEXT
);

-- No uniqueness constraint on email: duplicate signups are accepted as-is.
CREATE TABLE IF NOT EXISTS subscribers (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL,
    subscribed_at TEXT NOT NULL  -- ISO 8601 UTC; server-assigned
);

PRAGMA user_version = 1;
";
