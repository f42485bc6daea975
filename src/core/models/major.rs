//! Major model

use crate::core::error::RepositoryError;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Grades that count a course as completed unless a major says otherwise.
pub const DEFAULT_PASSING_GRADES: [&str; 7] = ["A", "A-", "B+", "B", "B-", "C+", "C"];

/// How a course counts toward a major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseType {
    /// Must be passed, no substitute (`R`)
    Required,
    /// Any one passing elective satisfies the whole set (`E`)
    Elective,
}

impl FromStr for CourseType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Self::Required),
            "E" => Ok(Self::Elective),
            _ => Err(RepositoryError::InvalidCourseType { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "R"),
            Self::Elective => write!(f, "E"),
        }
    }
}

/// What is left of a requirement for one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remaining {
    /// Nothing left to take
    Satisfied,
    /// Courses still open, sorted by code
    Pending(BTreeSet<String>),
}

impl Remaining {
    /// Returns whether the requirement is met
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// One row of the majors summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorSummary {
    /// Department code
    pub dept: String,
    /// Required courses, sorted
    pub required: Vec<String>,
    /// Elective courses, sorted
    pub electives: Vec<String>,
}

impl MajorSummary {
    /// Column labels for [`MajorSummary`] rows
    pub const FIELD_NAMES: [&'static str; 3] = ["Dept", "Required", "Electives"];
}

/// Represents a major (degree program) and its course requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Major {
    /// Department code (e.g., "SFEN")
    pub name: String,

    /// Required course codes
    required: BTreeSet<String>,

    /// Elective course codes
    electives: BTreeSet<String>,

    /// Grades that count as passing for this major
    passing_grades: BTreeSet<String>,
}

impl Major {
    /// Create a major with the default passing grades
    ///
    /// # Arguments
    /// * `name` - Department code
    #[must_use]
    pub fn new(name: String) -> Self {
        Self::with_passing_grades(name, DEFAULT_PASSING_GRADES.iter().map(ToString::to_string))
    }

    /// Create a major with a custom passing-grade policy
    ///
    /// # Arguments
    /// * `name` - Department code
    /// * `passing_grades` - Grades that count a course as completed
    #[must_use]
    pub fn with_passing_grades<I>(name: String, passing_grades: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            name,
            required: BTreeSet::new(),
            electives: BTreeSet::new(),
            passing_grades: passing_grades.into_iter().collect(),
        }
    }

    /// Add a course under the given type; re-adding is a no-op
    pub fn add_course(&mut self, course_type: CourseType, course: &str) {
        let course = course.to_uppercase();
        match course_type {
            CourseType::Required => self.required.insert(course),
            CourseType::Elective => self.electives.insert(course),
        };
    }

    /// Required course codes, sorted
    #[must_use]
    pub const fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Elective course codes, sorted
    #[must_use]
    pub const fn electives(&self) -> &BTreeSet<String> {
        &self.electives
    }

    /// Passing grades for this major
    #[must_use]
    pub const fn passing_grades(&self) -> &BTreeSet<String> {
        &self.passing_grades
    }

    /// Every course the student passed, sorted
    ///
    /// This is not limited to the major's own courses.
    #[must_use]
    pub fn check_completed(&self, grades: &HashMap<String, String>) -> Vec<String> {
        completed_with(grades, |grade| self.passing_grades.contains(grade))
    }

    /// Required courses the student has not passed yet
    #[must_use]
    pub fn required_remaining(&self, grades: &HashMap<String, String>) -> Remaining {
        let passed = self.passed(grades);
        let remaining: BTreeSet<String> = self.required.difference(&passed).cloned().collect();
        if remaining.is_empty() {
            Remaining::Satisfied
        } else {
            Remaining::Pending(remaining)
        }
    }

    /// Electives are all-or-nothing: one passing elective clears the set,
    /// otherwise the full elective set stays open.
    #[must_use]
    pub fn electives_remaining(&self, grades: &HashMap<String, String>) -> Remaining {
        let passed = self.passed(grades);
        if self.electives.is_disjoint(&passed) {
            Remaining::Pending(self.electives.clone())
        } else {
            Remaining::Satisfied
        }
    }

    /// Build this major's summary row
    #[must_use]
    pub fn summary(&self) -> MajorSummary {
        MajorSummary {
            dept: self.name.clone(),
            required: self.required.iter().cloned().collect(),
            electives: self.electives.iter().cloned().collect(),
        }
    }

    fn passed(&self, grades: &HashMap<String, String>) -> BTreeSet<String> {
        self.check_completed(grades).into_iter().collect()
    }
}

/// Sorted course codes whose grade satisfies `is_passing`
pub(crate) fn completed_with<F>(grades: &HashMap<String, String>, is_passing: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut completed: Vec<String> = grades
        .iter()
        .filter(|(_, grade)| is_passing(grade.as_str()))
        .map(|(course, _)| course.clone())
        .collect();
    completed.sort();
    completed
}
