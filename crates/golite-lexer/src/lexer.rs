//! Lexer for the golite language
//!
//! Converts source code into a sequence of tokens. Every call to
//! [`Lexer::next_token`] skips trivia, dispatches once on the next
//! character and returns exactly one token or one error. Errors never stop
//! the lexer: the offending lexeme is consumed and the next call carries on
//! after it.

use crate::classify::{is_digit, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::ident::scan_identifier;
use crate::literal::{scan_char, scan_raw_string, scan_string};
use crate::number::scan_number;
use crate::punct::scan_punctuation;
use crate::token::Token;
use golite_error::{
    span::{Position, Span},
    Diagnostics,
};

/// Sub-scanner chosen by the first character of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scanner {
    Number,
    String,
    RawString,
    Char,
    Identifier,
    Punctuation,
}

impl Scanner {
    fn select(ch: char) -> Scanner {
        match ch {
            '"' => Scanner::String,
            '`' => Scanner::RawString,
            '\'' => Scanner::Char,
            c if is_digit(c) => Scanner::Number,
            c if is_ident_start(c) => Scanner::Identifier,
            _ => Scanner::Punctuation,
        }
    }
}

/// The golite language Lexer
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// Errors recorded by [`Lexer::tokenize`]
    diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source code
    pub fn new(source: &'src str, file_id: u32) -> Self {
        Self {
            cursor: Cursor::new(source, file_id),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the accumulated diagnostics
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes and returns the diagnostics
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Position of the next unread character
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Reads the next token.
    ///
    /// `Ok` with an end-of-input token is returned once the source is
    /// exhausted, and again on every later call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let result = self.scan_token();

        match &result {
            Ok(token) => tracing::trace!("{} {}", token, token.specific),
            Err(err) => tracing::debug!("{} [{}]", err, err.code()),
        }

        result
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let Some(ch) = self.cursor.current() else {
            return Ok(Token::end_of_input(Span::point(
                self.cursor.position(),
                self.cursor.file_id(),
            )));
        };

        match Scanner::select(ch) {
            Scanner::Number => scan_number(&mut self.cursor),
            Scanner::String => scan_string(&mut self.cursor),
            Scanner::RawString => scan_raw_string(&mut self.cursor),
            Scanner::Char => scan_char(&mut self.cursor),
            Scanner::Identifier => Ok(scan_identifier(&mut self.cursor)),
            Scanner::Punctuation => match scan_punctuation(&mut self.cursor) {
                Some(token) => Ok(token),
                None => {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    Err(LexError::new(
                        LexErrorKind::IllegalCharacter(ch),
                        self.cursor.span_from(start),
                    ))
                }
            },
        }
    }

    /// Skips whitespace, line comments and block comments
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.cursor.eat_while(is_whitespace);

            if self.cursor.starts_with("//") {
                self.cursor.eat_while(|c| c != '\n');
            } else if self.cursor.starts_with("/*") {
                self.skip_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Block comments do not nest: the first `*/` closes the comment
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        self.cursor.advance_by(2);

        loop {
            if self.cursor.starts_with("*/") {
                self.cursor.advance_by(2);
                return Ok(());
            }
            if self.cursor.advance().is_none() {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedComment,
                    self.cursor.span_from(start),
                ));
            }
        }
    }

    /// Tokenizes the entire source code.
    ///
    /// Errors are recorded as diagnostics and lexing continues; the returned
    /// tokens always end with the end-of-input token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            match self.next_token() {
                Ok(token) => {
                    let is_eof = token.is_eof();
                    tokens.push(token);

                    if is_eof {
                        break;
                    }
                }
                Err(err) => self.diagnostics.push(err.to_diagnostic()),
            }
        }

        tracing::debug!(
            "lexed {} tokens with {} errors",
            tokens.len(),
            self.diagnostics.len()
        );

        tokens
    }
}

/// Yields tokens and errors in source order, stopping before end of input
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

/// Tokenizes source code and returns the tokens
pub fn tokenize(source: &str, file_id: u32) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::new(source, file_id);
    let tokens = lexer.tokenize();
    (tokens, lexer.take_diagnostics())
}
