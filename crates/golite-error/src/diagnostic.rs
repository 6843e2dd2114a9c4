//! Diagnostic - compiler-style error reports
//!
//! A diagnostic carries an optional error code (EL001, EL002, ...), labels
//! pointing at regions of the source and fix suggestions.
//!
//! Rendering is plain text; terminals and editors decide on colors.

use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// A label pointing to a specific region of the code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    /// Category (L = Lexer)
    pub category: char,
    /// Error number within the category
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Lexer errors
    pub const ILLEGAL_CHARACTER: Self = Self::new('L', 1);
    pub const INVALID_LEADING_ZERO: Self = Self::new('L', 2);
    pub const INVALID_HEX_LITERAL: Self = Self::new('L', 3);
    pub const INVALID_NUMERIC_SUFFIX: Self = Self::new('L', 4);
    pub const MALFORMED_FLOAT: Self = Self::new('L', 5);
    pub const UNSUPPORTED_NUMERIC_FORM: Self = Self::new('L', 6);
    pub const UNTERMINATED_STRING: Self = Self::new('L', 7);
    pub const UNTERMINATED_CHAR: Self = Self::new('L', 8);
    pub const UNTERMINATED_RAW_STRING: Self = Self::new('L', 9);
    pub const CHAR_LITERAL_TOO_LONG: Self = Self::new('L', 10);
    pub const EMPTY_CHAR_LITERAL: Self = Self::new('L', 11);
    pub const UNTERMINATED_COMMENT: Self = Self::new('L', 12);
    pub const INVALID_UNICODE_ESCAPE: Self = Self::new('L', 13);
    pub const INVALID_OCTAL_ESCAPE: Self = Self::new('L', 14);
    pub const UNKNOWN_ESCAPE_SEQUENCE: Self = Self::new('L', 15);
    pub const FLOAT_OUT_OF_RANGE: Self = Self::new('L', 16);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A complete diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error: {message}")]
pub struct Diagnostic {
    pub code: Option<ErrorCode>,
    /// Main message
    pub message: String,
    /// Labels pointing to the code
    pub labels: Vec<Label>,
    /// Fix suggestions
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Span of the first label, if any
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.first().map(|l| l.span)
    }

    /// Renders the diagnostic against the file it was reported in
    ///
    /// ```text
    /// error[EL001]: illegal character '@'
    ///  --> main.go:3:5
    ///   |
    /// 3 | abc@ 123
    ///   |    ^ not part of any token
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str("error");
        if let Some(code) = &self.code {
            out.push_str(&format!("[{}]", code));
        }
        out.push_str(": ");
        out.push_str(&self.message);
        out.push('\n');

        for label in &self.labels {
            let start = label.span.start;
            out.push_str(&format!(" --> {}:{}:{}\n", file.name, start.line, start.column));

            let Some(line) = file.get_line(start.line) else {
                continue;
            };
            let gutter = " ".repeat(start.line.to_string().len());
            out.push_str(&format!("{} |\n", gutter));
            out.push_str(&format!("{} | {}\n", start.line, line));

            // Multi-line spans are underlined to the end of their first line
            let line_width = line.chars().count() as u32;
            let width = if label.span.end.line == start.line {
                label.span.end.column.saturating_sub(start.column)
            } else {
                (line_width + 1).saturating_sub(start.column)
            }
            .max(1);

            out.push_str(&format!(
                "{} | {}{} {}\n",
                gutter,
                " ".repeat(start.column.saturating_sub(1) as usize),
                "^".repeat(width as usize),
                label.message
            ));
        }

        for help in &self.help {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

/// A named source text with precomputed line starts
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Byte offset of each line
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Returns a line of code without its terminator (line is 1-indexed)
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());

        self.source.get(start..end).map(|l| l.trim_end_matches('\r'))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_diagnostic_rendering() {
        let file = SourceFile::new("main.go", "var a = 1\nabc@ 123\n");
        let span = Span::new(Position::new(2, 4, 13), Position::new(2, 5, 14), 0);

        let diagnostic = Diagnostic::error("illegal character '@'")
            .with_code(ErrorCode::ILLEGAL_CHARACTER)
            .with_label(span, "not part of any token")
            .with_help("remove this character");

        let output = diagnostic.render(&file);
        let expected = "error[EL001]: illegal character '@'\n \
                        --> main.go:2:4\n  \
                        |\n\
                        2 | abc@ 123\n  \
                        |    ^ not part of any token\n  \
                        = help: remove this character\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_multiline_label_underlines_rest_of_line() {
        let file = SourceFile::new("raw.go", "x := `abc\ndef");
        let span = Span::new(Position::new(1, 6, 5), Position::new(2, 4, 13), 0);
        let output = Diagnostic::error("unterminated raw string")
            .with_label(span, "opened here")
            .render(&file);
        assert!(output.contains("1 | x := `abc\n"));
        assert!(output.contains("  |      ^^^^ opened here\n"));
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::UNKNOWN_ESCAPE_SEQUENCE.to_string(), "EL015");
        assert_eq!(ErrorCode::new('P', 7).to_string(), "EP007");
    }

    #[test]
    fn test_diagnostic_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Diagnostic::error("unterminated comment"));
        assert_eq!(err.to_string(), "error: unterminated comment");
    }

    #[test]
    fn test_source_file_lines() {
        let file = SourceFile::new("crlf.go", "a\r\nb\n");
        assert_eq!(file.get_line(1), Some("a"));
        assert_eq!(file.get_line(2), Some("b"));
        assert_eq!(file.get_line(3), Some(""));
        assert_eq!(file.get_line(4), None);
        assert_eq!(file.line_count(), 3);
    }
}
