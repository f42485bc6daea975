//! Instructor model

use indexmap::IndexMap;

/// One row of the instructor summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorSummary {
    /// Instructor CWID
    pub cwid: String,
    /// Display name
    pub name: String,
    /// Department code
    pub dept: String,
    /// Course code
    pub course: String,
    /// Distinct students taught in the course
    pub students: usize,
}

impl InstructorSummary {
    /// Column labels for [`InstructorSummary`] rows
    pub const FIELD_NAMES: [&'static str; 5] = ["CWID", "Name", "Dept", "Course", "Students"];
}

/// Represents an instructor and per-course enrollment counts
#[derive(Debug, Clone)]
pub struct Instructor {
    /// Campus-wide ID
    pub cwid: String,

    /// Display name
    pub name: String,

    /// Department code
    pub dept: String,

    /// Student count per course, in the order courses were first seen
    courses: IndexMap<String, usize>,
}

impl Instructor {
    /// Create an instructor with no courses
    #[must_use]
    pub fn new(cwid: String, name: String, dept: String) -> Self {
        Self {
            cwid,
            name,
            dept,
            courses: IndexMap::new(),
        }
    }

    /// Count one more student in a course
    pub fn add_student(&mut self, course: &str) {
        self.add_students(course, 1);
    }

    /// Count `count` more students in a course
    pub fn add_students(&mut self, course: &str, count: usize) {
        *self.courses.entry(course.to_string()).or_insert(0) += count;
    }

    /// Students counted for a course (0 if never taught)
    #[must_use]
    pub fn student_count(&self, course: &str) -> usize {
        self.courses.get(course).copied().unwrap_or(0)
    }

    /// Number of distinct courses taught
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// One summary row per course, in first-seen order
    pub fn summary(&self) -> impl Iterator<Item = InstructorSummary> + '_ {
        self.courses
            .iter()
            .map(|(course, &students)| InstructorSummary {
                cwid: self.cwid.clone(),
                name: self.name.clone(),
                dept: self.dept.clone(),
                course: course.clone(),
                students,
            })
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.cwid == other.cwid
    }
}

impl Eq for Instructor {}

#[cfg(test)]
mod tests {
    use super::*;

    fn einstein() -> Instructor {
        Instructor::new(
            "98765".to_string(),
            "Einstein, A".to_string(),
            "SFEN".to_string(),
        )
    }

    #[test]
    fn test_add_student_counts() {
        let mut inst = einstein();
        inst.add_student("SSW 567");
        inst.add_student("SSW 567");
        inst.add_students("SSW 540", 3);

        assert_eq!(inst.student_count("SSW 567"), 2);
        assert_eq!(inst.student_count("SSW 540"), 3);
        assert_eq!(inst.student_count("CS 501"), 0);
        assert_eq!(inst.course_count(), 2);
    }

    #[test]
    fn test_summary_keeps_first_seen_order() {
        let mut inst = einstein();
        inst.add_student("SSW 567");
        inst.add_student("SSW 540");
        inst.add_student("SSW 567");

        let rows: Vec<InstructorSummary> = inst.summary().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].course, "SSW 567");
        assert_eq!(rows[0].students, 2);
        assert_eq!(rows[1].course, "SSW 540");
        assert_eq!(rows[1].students, 1);
        assert_eq!(rows[1].name, "Einstein, A");
    }

    #[test]
    fn test_no_courses_no_rows() {
        assert_eq!(einstein().summary().count(), 0);
    }

    #[test]
    fn test_equality_is_by_cwid() {
        let other_dept = Instructor::new(
            "98765".to_string(),
            "Einstein, A".to_string(),
            "SYEN".to_string(),
        );
        assert_eq!(einstein(), other_dept);
    }
}
