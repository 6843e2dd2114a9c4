//! golite-error - Diagnostics system for the golite toolchain
//!
//! This crate provides the structures used to report compilation errors:
//! source positions and spans, structured error codes, and diagnostics that
//! render against the source text they were reported in.
//!
//! # Example
//!
//! ```rust
//! use golite_error::{Diagnostic, ErrorCode, SourceFile};
//! use golite_error::span::{Position, Span};
//!
//! let file = SourceFile::new("main.go", "var x = 1 @");
//! let span = Span::new(Position::new(1, 11, 10), Position::new(1, 12, 11), 0);
//!
//! let diagnostic = Diagnostic::error("illegal character '@'")
//!     .with_code(ErrorCode::ILLEGAL_CHARACTER)
//!     .with_label(span, "not part of any token");
//!
//! println!("{}", diagnostic.render(&file));
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, ErrorCode, Label, SourceFile};
pub use span::{Position, Span, Spanned};

/// Collection of diagnostics accumulated during a compilation phase
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Whether the next phase must be skipped
    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Appends every diagnostic of another collection
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Renders all diagnostics against one source file
    pub fn render(&self, file: &SourceFile) -> String {
        self.items
            .iter()
            .map(|d| d.render(file))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
