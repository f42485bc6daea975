//! Markdown report generator
//!
//! Generates one Markdown table per summary section. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::error::RepositoryResult;
use crate::core::report::{ReportContext, ReportGenerator, Table};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn generate_table(table: &Table) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "## {}\n", table.title);
        let _ = writeln!(output, "| {} |", table.headers.join(" | "));
        let _ = writeln!(output, "|{}", "---|".repeat(table.headers.len()));

        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape(cell)).collect();
            let _ = writeln!(output, "| {} |", cells.join(" | "));
        }

        output
    }
}

/// Pipes would end the cell early
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> RepositoryResult<String> {
        let mut output = String::new();
        let _ = writeln!(output, "# {}\n", ctx.title());
        for table in &ctx.tables {
            output.push_str(&Self::generate_table(table));
            output.push('\n');
        }
        Ok(output)
    }
}
