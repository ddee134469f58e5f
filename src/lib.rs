//! Self-hosted audio upload service: accepts `.wav` uploads over HTTP,
//! persists them to a flat directory, and keeps a CSV registry of what was
//! stored.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
