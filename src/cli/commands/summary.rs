//! Summary command handler
//!
//! Loads a university directory and prints the majors, student, and
//! instructor tables in the configured format.

use super::prompt_line;
use course_repository::config::Config;
use course_repository::core::report::{ReportContext, ReportFormat};
use course_repository::{debug, error, info};
use course_repository::{RepositoryError, University, UniversityBuilder};
use std::path::{Path, PathBuf};

/// Run the summary command and return the process exit code.
///
/// # Arguments
/// * `dir` - University data directory; falls back to config `data_dir`, then a prompt
/// * `name` - Display name; prompted for alongside the directory, otherwise the directory name
/// * `config` - Configuration with CLI overrides already applied
pub fn run(dir: Option<&Path>, name: Option<&str>, config: &Config) -> i32 {
    let format: ReportFormat = match config.report.format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            return 1;
        }
    };

    let Some((dir, name)) = resolve_target(dir, name, config) else {
        eprintln!("✗ No university directory given");
        return 1;
    };

    let university = match load(&dir, &name, config) {
        Ok(university) => university,
        Err(err) => {
            report_failure(&err);
            return 1;
        }
    };

    match format.generator().render(&ReportContext::new(&university)) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(err) => {
            report_failure(&err);
            1
        }
    }
}

/// Pick the directory and display name, prompting when neither the argument
/// nor the config names a directory
fn resolve_target(
    dir: Option<&Path>,
    name: Option<&str>,
    config: &Config,
) -> Option<(PathBuf, String)> {
    let configured = (!config.paths.data_dir.is_empty())
        .then(|| PathBuf::from(&config.paths.data_dir));

    if let Some(dir) = dir.map(Path::to_path_buf).or(configured) {
        let name = name.map_or_else(|| University::default_name(&dir), ToString::to_string);
        return Some((dir, name));
    }

    let dir = prompt_line("University directory: ").filter(|d| !d.is_empty())?;
    let dir = PathBuf::from(dir);
    let default_name = University::default_name(&dir);

    let name = match name {
        Some(name) => name.to_string(),
        None => prompt_line(&format!("University name [{default_name}]: "))
            .filter(|n| !n.is_empty())
            .unwrap_or(default_name),
    };
    Some((dir, name))
}

fn load(dir: &Path, name: &str, config: &Config) -> Result<University, RepositoryError> {
    let passing = config.passing_grades();
    debug!("Passing grades: {}", passing.join(", "));

    let university = UniversityBuilder::new(name)
        .with_passing_grades(passing)
        .load_dir(dir)?;

    info!(
        "Loaded {}: {} students, {} instructors",
        university.name(),
        university.students().count(),
        university.instructors().count()
    );
    Ok(university)
}

/// Console line for a failed summary; every failure gets one
fn failure_message(err: &RepositoryError) -> String {
    if err.is_user_facing() {
        format!("✗ {err}")
    } else {
        format!("✗ Summary failed: {err}")
    }
}

/// Input problems are shown as plain messages; anything else is also logged
fn report_failure(err: &RepositoryError) {
    if !err.is_user_facing() {
        error!("Summary failed: {err}");
    }
    eprintln!("{}", failure_message(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_student_reaches_console() {
        let err = RepositoryError::UnknownStudent {
            cwid: "999".to_string(),
            course: "SSW 564".to_string(),
        };
        assert_eq!(
            failure_message(&err),
            "✗ Summary failed: grade for course 'SSW 564' references unknown student '999'"
        );
    }

    #[test]
    fn test_invalid_tag_reaches_console() {
        let err = RepositoryError::InvalidCourseType {
            tag: "X".to_string(),
        };
        assert!(failure_message(&err).contains("invalid course type 'X'"));
    }

    #[test]
    fn test_user_facing_message_is_plain() {
        let err = RepositoryError::NotADirectory {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(failure_message(&err), "✗ /nope is not a valid directory");
    }
}
