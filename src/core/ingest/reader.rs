//! Delimited text reader for the university data files

use crate::core::error::{RepositoryError, RepositoryResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads separator-delimited lines into fixed-width field arrays
///
/// Every field is trimmed of surrounding whitespace. A line whose field count
/// differs from the requested width fails the whole read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedReader {
    separator: char,
    header: bool,
}

impl DelimitedReader {
    /// Create a reader for the given separator with no header line
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self {
            separator,
            header: false,
        }
    }

    /// Reader for the tab-separated university files
    #[must_use]
    pub const fn tab_separated() -> Self {
        Self::new('\t')
    }

    /// Skip the first line of every file
    #[must_use]
    pub const fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Read a whole file into records of `N` fields
    ///
    /// # Errors
    /// - [`RepositoryError::Io`] if the file cannot be opened or read
    /// - [`RepositoryError::MissingHeader`] if a header is expected but the file is empty
    /// - [`RepositoryError::FieldCount`] on the first line with the wrong number of fields
    pub fn read<const N: usize, P: AsRef<Path>>(&self, path: P) -> RepositoryResult<Vec<[String; N]>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content, path)
    }

    /// Parse already-loaded content; `path` is only used in error messages
    ///
    /// # Errors
    /// Same format errors as [`DelimitedReader::read`].
    pub fn parse<const N: usize>(&self, content: &str, path: &Path) -> RepositoryResult<Vec<[String; N]>> {
        let mut lines = content.lines().enumerate();

        if self.header && lines.next().is_none() {
            return Err(RepositoryError::MissingHeader {
                path: absolute(path),
            });
        }

        lines
            .map(|(line, text)| {
                let fields: Vec<String> = text
                    .split(self.separator)
                    .map(|field| field.trim().to_string())
                    .collect();
                let found = fields.len();
                <[String; N]>::try_from(fields).map_err(|_| RepositoryError::FieldCount {
                    path: absolute(path),
                    line,
                    found,
                    expected: N,
                })
            })
            .collect()
    }
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::tab_separated()
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let reader = DelimitedReader::tab_separated();
        let rows: Vec<[String; 3]> = reader
            .parse("10103 \t Baldwin, C\tSFEN\n10115\tWyatt, X\tSFEN\n", Path::new("s.txt"))
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["10103", "Baldwin, C", "SFEN"].map(String::from));
        assert_eq!(rows[1][1], "Wyatt, X");
    }

    #[test]
    fn test_parse_reports_zero_based_line() {
        let reader = DelimitedReader::tab_separated();
        let err = reader
            .parse::<3>("a\tb\tc\na\tb\n", Path::new("/tmp/students.txt"))
            .unwrap_err();

        match err {
            RepositoryError::FieldCount {
                path,
                line,
                found,
                expected,
            } => {
                assert_eq!(path, PathBuf::from("/tmp/students.txt"));
                assert_eq!(line, 1);
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_with_header() {
        let reader = DelimitedReader::new(',').with_header(true);
        let rows: Vec<[String; 2]> = reader
            .parse("cwid,name\n1,Ada\n", Path::new("h.csv"))
            .unwrap();
        assert_eq!(rows, vec![["1".to_string(), "Ada".to_string()]]);

        let err = reader.parse::<2>("", Path::new("h.csv")).unwrap_err();
        assert!(matches!(err, RepositoryError::MissingHeader { .. }));
    }

    #[test]
    fn test_header_line_counts_toward_line_numbers() {
        let reader = DelimitedReader::new(',').with_header(true);
        let err = reader
            .parse::<2>("cwid,name\n1\n", Path::new("/h.csv"))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::FieldCount { line: 1, .. }));
    }

    #[test]
    fn test_empty_content_yields_no_records() {
        let reader = DelimitedReader::default();
        let rows: Vec<[String; 4]> = reader.parse("", Path::new("g.txt")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_blank_line_is_a_format_error() {
        let reader = DelimitedReader::default();
        let err = reader
            .parse::<3>("a\tb\tc\n\na\tb\tc\n", Path::new("/s.txt"))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::FieldCount { line: 1, found: 1, .. }));
    }
}
