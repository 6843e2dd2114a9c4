//! Rune-level cursor over the source text
//!
//! The source is decoded into characters once, so any lookahead distance is
//! an O(1) index. Line, column (in characters) and byte offset are tracked
//! as the cursor advances.

use golite_error::span::{Position, Span};

pub struct Cursor<'src> {
    /// Source code being analyzed
    source: &'src str,
    /// Source code characters
    chars: Vec<char>,
    /// Current index in `chars`
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
    /// Current column (1-indexed)
    column: u32,
    /// Byte offset of `pos` in `source`
    offset: usize,
    file_id: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, file_id: u32) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            offset: 0,
            file_id,
        }
    }

    /// Returns the k-th character ahead without consuming it, or `None`
    /// past the end of input
    #[inline]
    pub fn peek(&self, k: usize) -> Option<char> {
        self.chars.get(self.pos + k).copied()
    }

    /// Returns the current character without advancing
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consumes one character
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Consumes up to `n` characters
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes characters while `pred` holds, returning how many were eaten
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.current().is_some_and(&pred) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Whether the upcoming characters spell `s`
    pub fn starts_with(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, ch)| self.peek(i) == Some(ch))
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// Span from `start` to the current position
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position(), self.file_id)
    }

    /// Source text from `start` to the current position
    pub fn slice_from(&self, start: Position) -> &'src str {
        self.source.get(start.offset..self.offset).unwrap_or_default()
    }

    pub fn file_id(&self) -> u32 {
        self.file_id
    }
}
