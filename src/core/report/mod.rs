//! Report generation for a loaded university
//!
//! This module turns the three summary projections (majors, students,
//! instructors) into titled tables and renders them as a plain-text grid,
//! Markdown, or HTML.

pub mod formats;

use crate::core::error::RepositoryResult;
use crate::core::models::{
    InstructorSummary, MajorSummary, Progress, Remaining, StudentSummary, University,
};
use std::fmt;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Cell text for a requirement with nothing left
pub const NOTHING_REMAINING: &str = "None";

/// Cell text for requirements of a major that is not in the majors file
pub const UNKNOWN_MAJOR: &str = "Unknown Major";

/// A titled table of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Section title (e.g., "Student Summary")
    pub title: String,
    /// Column labels
    pub headers: Vec<String>,
    /// Rows, each with one cell per header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    #[must_use]
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of each column (header included)
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Majors table: `Dept, Required, Electives`
    #[must_use]
    pub fn majors(summaries: &[MajorSummary]) -> Self {
        let mut table = Self::new("Majors Summary", &MajorSummary::FIELD_NAMES);
        for major in summaries {
            table.add_row(vec![
                major.dept.clone(),
                format_courses(&major.required),
                format_courses(&major.electives),
            ]);
        }
        table
    }

    /// Students table: `CWID, Name, Major, Completed Courses, Remaining Required, Remaining Electives`
    #[must_use]
    pub fn students(summaries: &[StudentSummary]) -> Self {
        let mut table = Self::new("Student Summary", &StudentSummary::FIELD_NAMES);
        for student in summaries {
            let (required, electives) = match &student.progress {
                Progress::Known {
                    required,
                    electives,
                } => (format_remaining(required), format_remaining(electives)),
                Progress::UnknownMajor => (UNKNOWN_MAJOR.to_string(), UNKNOWN_MAJOR.to_string()),
            };
            table.add_row(vec![
                student.cwid.clone(),
                student.name.clone(),
                student.major.clone(),
                format_courses(&student.completed),
                required,
                electives,
            ]);
        }
        table
    }

    /// Instructors table: `CWID, Name, Dept, Course, Students`
    #[must_use]
    pub fn instructors(summaries: &[InstructorSummary]) -> Self {
        let mut table = Self::new("Instructor Summary", &InstructorSummary::FIELD_NAMES);
        for row in summaries {
            table.add_row(vec![
                row.cwid.clone(),
                row.name.clone(),
                row.dept.clone(),
                row.course.clone(),
                row.students.to_string(),
            ]);
        }
        table
    }
}

/// Render a course list as `[A, B]`
#[must_use]
pub fn format_courses<S: AsRef<str>>(courses: &[S]) -> String {
    let joined: Vec<&str> = courses.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}

/// Render a remaining requirement: `None` when satisfied, else the open courses
#[must_use]
pub fn format_remaining(remaining: &Remaining) -> String {
    match remaining {
        Remaining::Satisfied => NOTHING_REMAINING.to_string(),
        Remaining::Pending(courses) => {
            let courses: Vec<&String> = courses.iter().collect();
            format_courses(&courses)
        }
    }
}

/// Everything a report renders for one university
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The loaded university
    pub university: &'a University,
    /// Majors, students, and instructors tables, in that order
    pub tables: Vec<Table>,
}

impl<'a> ReportContext<'a> {
    /// Project the university into its three summary tables
    #[must_use]
    pub fn new(university: &'a University) -> Self {
        let tables = vec![
            Table::majors(&university.major_summaries()),
            Table::students(&university.student_summaries()),
            Table::instructors(&university.instructor_summaries()),
        ];
        Self { university, tables }
    }

    /// Report heading
    #[must_use]
    pub fn title(&self) -> String {
        format!("Summary for {}", self.university.name())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report content as a string
    ///
    /// # Errors
    /// Returns an error if a template fails to render
    fn render(&self, ctx: &ReportContext) -> RepositoryResult<String>;
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextReporter::new().render_text(&ReportContext::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_format_courses() {
        assert_eq!(format_courses::<&str>(&[]), "[]");
        assert_eq!(format_courses(&["CS 501", "SSW 564"]), "[CS 501, SSW 564]");
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(&Remaining::Satisfied), "None");
        let pending = Remaining::Pending(BTreeSet::from([
            "SSW 555".to_string(),
            "SSW 540".to_string(),
        ]));
        assert_eq!(format_remaining(&pending), "[SSW 540, SSW 555]");
    }

    #[test]
    fn test_student_table_unknown_major() {
        let table = Table::students(&[StudentSummary {
            cwid: "1".to_string(),
            name: "Kelly, P".to_string(),
            major: "ARTS".to_string(),
            completed: vec!["ART 100".to_string()],
            progress: Progress::UnknownMajor,
        }]);

        assert_eq!(table.headers.len(), 6);
        assert_eq!(
            table.rows[0],
            vec!["1", "Kelly, P", "ARTS", "[ART 100]", "Unknown Major", "Unknown Major"]
        );
    }

    #[test]
    fn test_column_widths() {
        let mut table = Table::new("T", &["CWID", "Name"]);
        table.add_row(vec!["10103".to_string(), "Al".to_string()]);
        assert_eq!(table.column_widths(), vec![5, 4]);
    }
}
