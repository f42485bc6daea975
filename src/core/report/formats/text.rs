//! Plain-text report generator
//!
//! Renders each table as a bordered grid:
//!
//! ```text
//! +-------+------------+
//! | CWID  | Name       |
//! +-------+------------+
//! | 10103 | Baldwin, C |
//! +-------+------------+
//! ```

use crate::core::error::RepositoryResult;
use crate::core::report::{ReportContext, ReportGenerator, Table};
use std::fmt::Write;

/// Plain-text grid report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the whole report; text rendering cannot fail
    #[must_use]
    pub fn render_text(&self, ctx: &ReportContext) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", ctx.title());
        for table in &ctx.tables {
            let _ = writeln!(output, "{}", table.title);
            output.push_str(&Self::render_table(table));
        }
        output
    }

    /// Render one table as a bordered grid
    #[must_use]
    pub fn render_table(table: &Table) -> String {
        let widths = table.column_widths();
        let border = Self::border(&widths);

        let mut grid = String::new();
        grid.push_str(&border);
        grid.push_str(&Self::line(&table.headers, &widths));
        grid.push_str(&border);
        for row in &table.rows {
            grid.push_str(&Self::line(row, &widths));
        }
        if !table.rows.is_empty() {
            grid.push_str(&border);
        }
        grid
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (cell, &width) in cells.iter().zip(widths) {
            let _ = write!(line, " {cell:<width$} |");
        }
        line.push('\n');
        line
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> RepositoryResult<String> {
        Ok(self.render_text(ctx))
    }
}
