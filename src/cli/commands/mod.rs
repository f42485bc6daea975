//! CLI command handlers for `courserepo`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod summary;

use std::io::{self, BufRead, Write};

/// Print `message` and read one trimmed line from stdin
///
/// Returns `None` on end of input or a read error.
pub fn prompt_line(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok();

    let mut response = String::new();
    match io::stdin().lock().read_line(&mut response) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(response.trim().to_string()),
    }
}
