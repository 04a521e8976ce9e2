//! Unique, URL-safe slugs for persisted records.
//!
//! A [`domain::slug::SlugConfig`] names the source fields of a record type,
//! the field the slug is stored in and whether the slug is permanent. The
//! [`domain::slug::SlugResolver`] turns that into a pre-save step which
//! normalizes the source text and appends `-1`, `-2`, ... until the slug is
//! free within the record's collection (or within its parent, for embedded
//! records).

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
