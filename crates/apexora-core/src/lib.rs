//! Core types and trait definitions for the Apexora site backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It holds the shared validation schema, the domain records, the
//! [`store::SiteStore`] trait, and the in-memory reference backend.

pub mod memory;
pub mod model;
pub mod seed;
pub mod store;
pub mod validate;

pub use validate::ValidationError;
