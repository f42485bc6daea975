//! Error type shared by ingestion, the university join, and report rendering

use crate::core::models::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Every failure that can abort building a [`crate::University`].
///
/// The aggregator never recovers locally: any of these stops construction and
/// the partially built state is dropped with the builder.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The university path does not name a directory.
    #[error("{} is not a valid directory", .path.display())]
    NotADirectory {
        /// Absolute path that was checked
        path: PathBuf,
    },

    /// A data line does not have the expected number of fields.
    #[error("{} has {found} fields on line {line} but expected {expected}", .path.display())]
    FieldCount {
        /// Absolute path of the offending file
        path: PathBuf,
        /// 0-based line number
        line: usize,
        /// Fields found on the line
        found: usize,
        /// Fields the file format requires
        expected: usize,
    },

    /// A file that must start with a header line is empty.
    #[error("{} has no lines but expected at least a header", .path.display())]
    MissingHeader {
        /// Absolute path of the empty file
        path: PathBuf,
    },

    /// A data file could not be opened or read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A grade record names a student CWID that was never imported.
    #[error("grade for course '{course}' references unknown student '{cwid}'")]
    UnknownStudent {
        /// Student CWID from the grade record
        cwid: String,
        /// Normalized course code from the grade record
        course: String,
    },

    /// A major record carries a course-type tag other than `R` or `E`.
    #[error("invalid course type '{tag}': expected 'R' (required) or 'E' (elective)")]
    InvalidCourseType {
        /// The unrecognized tag
        tag: String,
    },

    /// An ingestion phase was requested before or after its turn.
    #[error("cannot import {requested} while the university is expecting {expected}")]
    PhaseOrder {
        /// Phase the builder is currently in
        expected: Phase,
        /// Phase that was requested
        requested: Phase,
    },

    /// A report template failed to render.
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),
}

impl RepositoryError {
    /// Returns whether this error describes bad input the user can fix
    /// (a wrong directory, a malformed file, or a missing file).
    ///
    /// The CLI reports these as plain messages; everything else is logged as
    /// an internal failure.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory { .. }
                | Self::FieldCount { .. }
                | Self::MissingHeader { .. }
                | Self::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_message() {
        let err = RepositoryError::FieldCount {
            path: PathBuf::from("/data/students.txt"),
            line: 4,
            found: 2,
            expected: 3,
        };
        assert_eq!(
            err.to_string(),
            "/data/students.txt has 2 fields on line 4 but expected 3"
        );
    }

    #[test]
    fn test_user_facing_classification() {
        let not_dir = RepositoryError::NotADirectory {
            path: PathBuf::from("/nope"),
        };
        let unknown = RepositoryError::UnknownStudent {
            cwid: "1".to_string(),
            course: "SSW 540".to_string(),
        };
        let tag = RepositoryError::InvalidCourseType {
            tag: "X".to_string(),
        };

        assert!(not_dir.is_user_facing());
        assert!(!unknown.is_user_facing());
        assert!(!tag.is_user_facing());
    }

    #[test]
    fn test_phase_order_message() {
        let err = RepositoryError::PhaseOrder {
            expected: Phase::Majors,
            requested: Phase::Grades,
        };
        assert_eq!(
            err.to_string(),
            "cannot import grades while the university is expecting majors"
        );
    }
}
