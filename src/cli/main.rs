//! Command-line interface entry point for `courserepo`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_repository::config::Config;
use course_repository::info;
use course_repository::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::Path;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Err(e) = ensure_log_dir(log_path) {
            eprintln!("✗ Failed to initialize file logging at: {display_path}: {e}");
        } else if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Summary { dir, name, .. } => {
            let code = commands::summary::run(dir.as_deref(), name.as_deref(), &config);
            if code != 0 {
                std::process::exit(code);
            }
        }
    }
}

/// Create the directory that will hold the log file
fn ensure_log_dir(log_path: &Path) -> Result<(), String> {
    match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| format!("could not create {}: {e}", parent.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_log_dir_creates_parents() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let log_path = dir.path().join("logs/nested/courserepo.log");

        assert!(ensure_log_dir(&log_path).is_ok());
        assert!(dir.path().join("logs/nested").is_dir());
    }

    #[test]
    fn test_ensure_log_dir_reports_blocked_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = dir.path().join("logs");
        std::fs::write(&blocker, "not a directory").expect("write blocker");

        let err = ensure_log_dir(&blocker.join("courserepo.log")).unwrap_err();
        assert!(err.contains(&blocker.display().to_string()));
    }

    #[test]
    fn test_ensure_log_dir_bare_file_name() {
        assert!(ensure_log_dir(Path::new("courserepo.log")).is_ok());
    }
}
