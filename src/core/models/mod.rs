//! Data models for the university repository

pub mod instructor;
pub mod major;
pub mod student;
pub mod university;

pub use instructor::{Instructor, InstructorSummary};
pub use major::{CourseType, Major, MajorSummary, Remaining, DEFAULT_PASSING_GRADES};
pub use student::{MajorRef, Progress, Student, StudentSummary};
pub use university::{Phase, University, UniversityBuilder};
