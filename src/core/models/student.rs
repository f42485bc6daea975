//! Student model

use super::major::{completed_with, Major, Remaining, DEFAULT_PASSING_GRADES};
use std::collections::HashMap;
use std::sync::Arc;

/// A student's declared major
#[derive(Debug, Clone)]
pub enum MajorRef {
    /// The major exists in the university's majors file
    Resolved(Arc<Major>),
    /// Only the department name is known (uppercased)
    Unresolved(String),
}

impl MajorRef {
    /// Department name of the major, resolved or not
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Resolved(major) => &major.name,
            Self::Unresolved(name) => name,
        }
    }
}

/// Remaining coursework as far as the student's major allows it to be computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The major was resolved, so both requirements are known
    Known {
        /// Required courses still open
        required: Remaining,
        /// Elective requirement status
        electives: Remaining,
    },
    /// The major is not in the majors file
    UnknownMajor,
}

/// One row of the student summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    /// Student CWID
    pub cwid: String,
    /// Display name
    pub name: String,
    /// Department name of the declared major
    pub major: String,
    /// Passed courses, sorted
    pub completed: Vec<String>,
    /// Remaining requirements
    pub progress: Progress,
}

impl StudentSummary {
    /// Column labels for [`StudentSummary`] rows
    pub const FIELD_NAMES: [&'static str; 6] = [
        "CWID",
        "Name",
        "Major",
        "Completed Courses",
        "Remaining Required",
        "Remaining Electives",
    ];
}

/// Represents a student and the latest grade recorded for each course
#[derive(Debug, Clone)]
pub struct Student {
    /// Campus-wide ID
    pub cwid: String,

    /// Display name (e.g., "Baldwin, C")
    pub name: String,

    /// Declared major
    pub major: MajorRef,

    /// Latest grade per normalized course code
    courses: HashMap<String, String>,
}

impl Student {
    /// Create a student with no grades
    #[must_use]
    pub fn new(cwid: String, name: String, major: MajorRef) -> Self {
        Self {
            cwid,
            name,
            major,
            courses: HashMap::new(),
        }
    }

    /// Record a grade, replacing any earlier grade for the same course
    ///
    /// The course code must already be normalized by the caller.
    ///
    /// # Returns
    /// `true` if the student did not have this course before, `false` if an
    /// existing grade was overwritten
    pub fn add_course(&mut self, course: String, grade: String) -> bool {
        self.courses.insert(course, grade).is_none()
    }

    /// Latest grade for a course, if any
    #[must_use]
    pub fn grade(&self, course: &str) -> Option<&str> {
        self.courses.get(course).map(String::as_str)
    }

    /// All recorded course grades
    #[must_use]
    pub const fn courses(&self) -> &HashMap<String, String> {
        &self.courses
    }

    /// Build this student's summary row
    ///
    /// Students with an unresolved major are judged against the default
    /// passing grades and cannot have remaining requirements computed.
    #[must_use]
    pub fn summary(&self) -> StudentSummary {
        let (completed, progress) = match &self.major {
            MajorRef::Resolved(major) => (
                major.check_completed(&self.courses),
                Progress::Known {
                    required: major.required_remaining(&self.courses),
                    electives: major.electives_remaining(&self.courses),
                },
            ),
            MajorRef::Unresolved(_) => (
                completed_with(&self.courses, |grade| {
                    DEFAULT_PASSING_GRADES.contains(&grade)
                }),
                Progress::UnknownMajor,
            ),
        };

        StudentSummary {
            cwid: self.cwid.clone(),
            name: self.name.clone(),
            major: self.major.name().to_string(),
            completed,
            progress,
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.cwid == other.cwid
    }
}

impl Eq for Student {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::major::CourseType;
    use std::collections::BTreeSet;

    fn sfen() -> Arc<Major> {
        let mut major = Major::new("SFEN".to_string());
        major.add_course(CourseType::Required, "SSW 564");
        major.add_course(CourseType::Elective, "CS 501");
        Arc::new(major)
    }

    #[test]
    fn test_add_course_reports_first_time() {
        let mut student = Student::new(
            "100".to_string(),
            "Baldwin, C".to_string(),
            MajorRef::Resolved(sfen()),
        );

        assert!(student.add_course("SSW 564".to_string(), "B".to_string()));
        assert!(!student.add_course("SSW 564".to_string(), "F".to_string()));
        assert_eq!(student.grade("SSW 564"), Some("F"));
        assert_eq!(student.courses().len(), 1);
    }

    #[test]
    fn test_summary_with_resolved_major() {
        let mut student = Student::new(
            "100".to_string(),
            "Baldwin, C".to_string(),
            MajorRef::Resolved(sfen()),
        );
        student.add_course("SSW 564".to_string(), "A".to_string());

        let summary = student.summary();
        assert_eq!(summary.major, "SFEN");
        assert_eq!(summary.completed, vec!["SSW 564".to_string()]);
        assert_eq!(
            summary.progress,
            Progress::Known {
                required: Remaining::Satisfied,
                electives: Remaining::Pending(BTreeSet::from(["CS 501".to_string()])),
            }
        );
    }

    #[test]
    fn test_summary_with_unresolved_major() {
        let mut student = Student::new(
            "101".to_string(),
            "Kelly, P".to_string(),
            MajorRef::Unresolved("ARTS".to_string()),
        );
        student.add_course("ART 100".to_string(), "C+".to_string());
        student.add_course("ART 200".to_string(), "D".to_string());

        let summary = student.summary();
        assert_eq!(summary.major, "ARTS");
        assert_eq!(summary.completed, vec!["ART 100".to_string()]);
        assert_eq!(summary.progress, Progress::UnknownMajor);
    }

    #[test]
    fn test_equality_is_by_cwid() {
        let a = Student::new(
            "100".to_string(),
            "Baldwin, C".to_string(),
            MajorRef::Unresolved("SFEN".to_string()),
        );
        let b = Student::new(
            "100".to_string(),
            "Someone Else".to_string(),
            MajorRef::Unresolved("SYEN".to_string()),
        );
        let c = Student::new(
            "101".to_string(),
            "Baldwin, C".to_string(),
            MajorRef::Unresolved("SFEN".to_string()),
        );

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
