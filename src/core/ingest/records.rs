//! Typed records for each of the four university files

use crate::core::error::RepositoryError;
use crate::core::models::CourseType;

/// A line of `majors.txt`: department, course type tag, course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorRecord {
    /// Department code
    pub dept: String,
    /// Required or elective
    pub course_type: CourseType,
    /// Course code
    pub course: String,
}

impl TryFrom<[String; 3]> for MajorRecord {
    type Error = RepositoryError;

    fn try_from([dept, tag, course]: [String; 3]) -> Result<Self, Self::Error> {
        Ok(Self {
            dept,
            course_type: tag.parse()?,
            course,
        })
    }
}

/// A line of `students.txt`: CWID, name, major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Student CWID
    pub cwid: String,
    /// Display name
    pub name: String,
    /// Declared major (department name)
    pub major: String,
}

impl From<[String; 3]> for StudentRecord {
    fn from([cwid, name, major]: [String; 3]) -> Self {
        Self { cwid, name, major }
    }
}

/// A line of `instructors.txt`: CWID, name, department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorRecord {
    /// Instructor CWID
    pub cwid: String,
    /// Display name
    pub name: String,
    /// Department code
    pub dept: String,
}

impl From<[String; 3]> for InstructorRecord {
    fn from([cwid, name, dept]: [String; 3]) -> Self {
        Self { cwid, name, dept }
    }
}

/// A line of `grades.txt`: student CWID, course, grade, instructor CWID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    /// Student CWID
    pub student_cwid: String,
    /// Course code as written in the file
    pub course: String,
    /// Letter grade
    pub grade: String,
    /// Instructor CWID
    pub instructor_cwid: String,
}

impl From<[String; 4]> for GradeRecord {
    fn from([student_cwid, course, grade, instructor_cwid]: [String; 4]) -> Self {
        Self {
            student_cwid,
            course,
            grade,
            instructor_cwid,
        }
    }
}
