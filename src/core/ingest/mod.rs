//! Reading the university data directory
//!
//! Each file is opened, fully read, and closed on its own; nothing is held
//! open between ingestion phases.

pub mod reader;
pub mod records;

pub use reader::DelimitedReader;
pub use records::{GradeRecord, InstructorRecord, MajorRecord, StudentRecord};

/// Majors file name inside a university directory
pub const MAJORS_FILE: &str = "majors.txt";
/// Students file name inside a university directory
pub const STUDENTS_FILE: &str = "students.txt";
/// Instructors file name inside a university directory
pub const INSTRUCTORS_FILE: &str = "instructors.txt";
/// Grades file name inside a university directory
pub const GRADES_FILE: &str = "grades.txt";
