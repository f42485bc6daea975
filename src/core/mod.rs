//! Core module for ingestion, the university join, and reporting

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;

/// Returns the current version of the `course-repository` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
