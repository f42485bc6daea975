//! University model: the four-phase ingestion and the student/instructor join

use super::{
    Instructor, InstructorSummary, Major, MajorRef, MajorSummary, Student, StudentSummary,
    DEFAULT_PASSING_GRADES,
};
use crate::core::error::{RepositoryError, RepositoryResult};
use crate::core::ingest::{
    DelimitedReader, GradeRecord, InstructorRecord, MajorRecord, StudentRecord, GRADES_FILE,
    INSTRUCTORS_FILE, MAJORS_FILE, STUDENTS_FILE,
};
use crate::{debug, info};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Ingestion phases, in the only order they may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Majors and their course requirements
    Majors,
    /// Students, resolved against the imported majors
    Students,
    /// Instructors
    Instructors,
    /// Grade events joined against students and instructors
    Grades,
    /// All phases done; the university can be built
    Complete,
}

impl Phase {
    const fn next(self) -> Self {
        match self {
            Self::Majors => Self::Students,
            Self::Students => Self::Instructors,
            Self::Instructors => Self::Grades,
            Self::Grades | Self::Complete => Self::Complete,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Majors => write!(f, "majors"),
            Self::Students => write!(f, "students"),
            Self::Instructors => write!(f, "instructors"),
            Self::Grades => write!(f, "grades"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Builds a [`University`] one ingestion phase at a time
///
/// Each `import_*` call consumes the builder and hands it back advanced to the
/// next phase. Calling a phase out of turn fails with
/// [`RepositoryError::PhaseOrder`], and any failure drops everything imported
/// so far.
///
/// # Examples
/// ```ignore
/// let university = UniversityBuilder::new("Stevens")
///     .import_majors(majors)?
///     .import_students(students)?
///     .import_instructors(instructors)?
///     .import_grades(grades)?
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct UniversityBuilder {
    name: String,
    path: Option<PathBuf>,
    phase: Phase,
    passing_grades: Vec<String>,
    majors: IndexMap<String, Arc<Major>>,
    students: IndexMap<String, Student>,
    instructors: IndexMap<String, Instructor>,
}

impl UniversityBuilder {
    /// Start an empty university in the majors phase
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            phase: Phase::Majors,
            passing_grades: DEFAULT_PASSING_GRADES.iter().map(ToString::to_string).collect(),
            majors: IndexMap::new(),
            students: IndexMap::new(),
            instructors: IndexMap::new(),
        }
    }

    /// Set the passing grades used by every major this builder creates
    ///
    /// Students whose major is unknown are always judged against
    /// [`DEFAULT_PASSING_GRADES`].
    #[must_use]
    pub fn with_passing_grades<I, S>(mut self, grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passing_grades = grades.into_iter().map(Into::into).collect();
        self
    }

    /// Phase the builder expects next
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&self, requested: Phase) -> RepositoryResult<()> {
        if self.phase == requested {
            Ok(())
        } else {
            Err(RepositoryError::PhaseOrder {
                expected: self.phase,
                requested,
            })
        }
    }

    fn advance(mut self) -> Self {
        self.phase = self.phase.next();
        self
    }

    /// Majors phase: create each department's major on first sight and add
    /// the course under its type
    ///
    /// # Errors
    /// [`RepositoryError::PhaseOrder`] if called out of turn.
    pub fn import_majors<I>(mut self, records: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = MajorRecord>,
    {
        self.enter(Phase::Majors)?;

        for record in records {
            let dept = record.dept.to_uppercase();
            let passing = &self.passing_grades;
            let major = self
                .majors
                .entry(dept.clone())
                .or_insert_with(|| Arc::new(Major::with_passing_grades(dept, passing.iter().cloned())));
            Arc::make_mut(major).add_course(record.course_type, &record.course);
        }

        info!("Imported {} majors", self.majors.len());
        Ok(self.advance())
    }

    /// Students phase: resolve each student's major and create the student
    ///
    /// A later record with the same CWID replaces the earlier student entirely.
    ///
    /// # Errors
    /// [`RepositoryError::PhaseOrder`] if called out of turn.
    pub fn import_students<I>(mut self, records: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = StudentRecord>,
    {
        self.enter(Phase::Students)?;

        for StudentRecord { cwid, name, major } in records {
            let major = major.to_uppercase();
            let major = match self.majors.get(&major) {
                Some(resolved) => MajorRef::Resolved(Arc::clone(resolved)),
                None => {
                    debug!("Student {cwid} declares unknown major {major}");
                    MajorRef::Unresolved(major)
                }
            };
            let student = Student::new(cwid.clone(), name, major);
            if self.students.insert(cwid, student).is_some() {
                debug!("Replaced earlier student record with the same CWID");
            }
        }

        info!("Imported {} students", self.students.len());
        Ok(self.advance())
    }

    /// Instructors phase
    ///
    /// # Errors
    /// [`RepositoryError::PhaseOrder`] if called out of turn.
    pub fn import_instructors<I>(mut self, records: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = InstructorRecord>,
    {
        self.enter(Phase::Instructors)?;

        for InstructorRecord { cwid, name, dept } in records {
            let instructor = Instructor::new(cwid.clone(), name, dept.to_uppercase());
            self.instructors.insert(cwid, instructor);
        }

        info!("Imported {} instructors", self.instructors.len());
        Ok(self.advance())
    }

    /// Grades phase: record each grade on its student and, for a first-time
    /// course, count the student for the instructor
    ///
    /// An unknown instructor only skips the enrollment count; the grade is
    /// still recorded.
    ///
    /// # Errors
    /// - [`RepositoryError::UnknownStudent`] if a grade names a student that was not imported
    /// - [`RepositoryError::PhaseOrder`] if called out of turn
    pub fn import_grades<I>(mut self, records: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = GradeRecord>,
    {
        self.enter(Phase::Grades)?;

        let mut count = 0usize;
        for record in records {
            let course = record.course.to_uppercase();
            let student = self.students.get_mut(&record.student_cwid).ok_or_else(|| {
                RepositoryError::UnknownStudent {
                    cwid: record.student_cwid.clone(),
                    course: course.clone(),
                }
            })?;

            if student.add_course(course.clone(), record.grade) {
                match self.instructors.get_mut(&record.instructor_cwid) {
                    Some(instructor) => instructor.add_student(&course),
                    None => debug!(
                        "Grade for {} in {course} names unknown instructor {}; enrollment not counted",
                        record.student_cwid, record.instructor_cwid
                    ),
                }
            }
            count += 1;
        }

        info!("Imported {count} grades");
        Ok(self.advance())
    }

    /// Finish ingestion
    ///
    /// # Errors
    /// [`RepositoryError::PhaseOrder`] unless all four phases have run.
    pub fn build(self) -> RepositoryResult<University> {
        self.enter(Phase::Complete)?;
        Ok(University {
            name: self.name,
            path: self.path,
            majors: self.majors,
            students: self.students,
            instructors: self.instructors,
        })
    }

    /// Run all four phases from the files in a university directory
    ///
    /// The directory is checked before any file is opened; each file is then
    /// read in its own phase.
    ///
    /// # Errors
    /// - [`RepositoryError::NotADirectory`] if `dir` is not a directory
    /// - [`RepositoryError::Io`] if one of the four files is missing or unreadable
    /// - any format, tag, or join error raised while importing
    pub fn load_dir(mut self, dir: impl AsRef<Path>) -> RepositoryResult<University> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RepositoryError::NotADirectory {
                path: std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf()),
            });
        }
        self.path = Some(dir.to_path_buf());
        info!("Loading university {} from {}", self.name, dir.display());

        let reader = DelimitedReader::tab_separated();

        let majors: Vec<[String; 3]> = reader.read(dir.join(MAJORS_FILE))?;
        let majors = majors
            .into_iter()
            .map(MajorRecord::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;
        let builder = self.import_majors(majors)?;

        let students: Vec<[String; 3]> = reader.read(dir.join(STUDENTS_FILE))?;
        let builder = builder.import_students(students.into_iter().map(StudentRecord::from))?;

        let instructors: Vec<[String; 3]> = reader.read(dir.join(INSTRUCTORS_FILE))?;
        let builder =
            builder.import_instructors(instructors.into_iter().map(InstructorRecord::from))?;

        let grades: Vec<[String; 4]> = reader.read(dir.join(GRADES_FILE))?;
        builder
            .import_grades(grades.into_iter().map(GradeRecord::from))?
            .build()
    }
}

/// A fully ingested university: majors, students, and instructors
///
/// Read-only once built; every summary method can be called any number of times.
#[derive(Debug, Clone)]
pub struct University {
    name: String,
    path: Option<PathBuf>,
    majors: IndexMap<String, Arc<Major>>,
    students: IndexMap<String, Student>,
    instructors: IndexMap<String, Instructor>,
}

impl University {
    /// Load a university from a directory containing `majors.txt`,
    /// `students.txt`, `instructors.txt`, and `grades.txt`
    ///
    /// # Arguments
    /// * `dir` - University data directory
    /// * `name` - Display name; defaults to the directory's base name
    ///
    /// # Errors
    /// See [`UniversityBuilder::load_dir`].
    pub fn from_dir(dir: impl AsRef<Path>, name: Option<&str>) -> RepositoryResult<Self> {
        let dir = dir.as_ref();
        let name = name.map_or_else(|| Self::default_name(dir), ToString::to_string);
        UniversityBuilder::new(name).load_dir(dir)
    }

    /// Base name of the absolute directory path (e.g., "Stevens" for `./Stevens`)
    #[must_use]
    pub fn default_name(dir: &Path) -> String {
        let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        absolute
            .file_name()
            .map_or_else(|| absolute.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the university was loaded from, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look up a major by department code (case-insensitive)
    #[must_use]
    pub fn major(&self, name: &str) -> Option<&Major> {
        self.majors.get(&name.to_uppercase()).map(Arc::as_ref)
    }

    /// Look up a student by CWID
    #[must_use]
    pub fn student(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    /// Look up an instructor by CWID
    #[must_use]
    pub fn instructor(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    /// All students, in first-imported order
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// All instructors, in first-imported order
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    /// One row per major
    #[must_use]
    pub fn major_summaries(&self) -> Vec<MajorSummary> {
        self.majors.values().map(|major| major.summary()).collect()
    }

    /// One row per student
    #[must_use]
    pub fn student_summaries(&self) -> Vec<StudentSummary> {
        self.students.values().map(Student::summary).collect()
    }

    /// One row per (instructor, course) pair
    #[must_use]
    pub fn instructor_summaries(&self) -> Vec<InstructorSummary> {
        self.instructors
            .values()
            .flat_map(Instructor::summary)
            .collect()
    }
}
