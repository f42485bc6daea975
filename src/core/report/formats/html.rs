//! HTML report generator
//!
//! Renders a self-contained HTML page from the `report.html` askama template.
//! Cell contents are HTML-escaped by the template engine.

use crate::core::error::RepositoryResult;
use crate::core::report::{ReportContext, ReportGenerator, Table};
use askama::Template;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    title: &'a str,
    tables: &'a [Table],
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> RepositoryResult<String> {
        let title = ctx.title();
        let template = ReportTemplate {
            title: &title,
            tables: &ctx.tables,
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_escapes_cells() {
        let mut table = Table::new("Student Summary", &["CWID", "Name"]);
        table.add_row(vec!["1".to_string(), "O'Neil & <Sons>".to_string()]);
        let tables = vec![table];

        let html = ReportTemplate {
            title: "Summary for Test",
            tables: &tables,
        }
        .render()
        .unwrap();

        assert!(html.contains("<h1>Summary for Test</h1>"));
        assert!(html.contains("<th>CWID</th>"));
        assert!(html.contains("&amp; &lt;Sons&gt;"));
        assert!(!html.contains("<Sons>"));
    }
}
