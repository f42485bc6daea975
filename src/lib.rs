//! Shared library for `course-repository`
//! Contains the ingestion, join, and reporting logic used by the `courserepo` CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{RepositoryError, RepositoryResult};
pub use crate::core::get_version;
pub use crate::core::models::{Instructor, Major, Student, University, UniversityBuilder};
