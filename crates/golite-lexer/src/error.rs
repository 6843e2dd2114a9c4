//! Lexical errors
//!
//! Every error is local to the `next_token` call that produced it. The span
//! always covers the whole offending lexeme, which is also exactly what the
//! lexer consumed before returning.

use golite_error::span::{Span, Spanned};
use golite_error::{Diagnostic, ErrorCode};
use std::fmt;
use thiserror::Error;

/// Numeric literal forms the language deliberately does not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericForm {
    /// `1e10`, `2.5E-3`
    Exponent,
    /// `0777`
    LegacyOctal,
    /// `0b1010`
    Binary,
    /// `0o17`
    OctalPrefix,
}

impl fmt::Display for NumericForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NumericForm::Exponent => "exponent notation",
            NumericForm::LegacyOctal => "legacy octal literal",
            NumericForm::Binary => "binary literal",
            NumericForm::OctalPrefix => "0o-prefixed octal literal",
        };
        f.write_str(text)
    }
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),
    #[error("integer literal has a redundant leading zero")]
    InvalidLeadingZero,
    #[error("invalid hexadecimal literal")]
    InvalidHexLiteral,
    #[error("invalid suffix on integer literal")]
    InvalidNumericSuffix,
    #[error("malformed floating-point literal")]
    MalformedFloat,
    #[error("floating-point literal out of range")]
    FloatOutOfRange,
    #[error("unsupported numeric literal: {0}")]
    UnsupportedNumericForm(NumericForm),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("character literal holds more than one character")]
    CharLiteralTooLong,
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
    #[error("invalid octal escape sequence")]
    InvalidOctalEscape,
    #[error("unknown escape sequence '\\{}'", .0.escape_debug())]
    UnknownEscapeSequence(char),
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::IllegalCharacter(_) => ErrorCode::ILLEGAL_CHARACTER,
            LexErrorKind::InvalidLeadingZero => ErrorCode::INVALID_LEADING_ZERO,
            LexErrorKind::InvalidHexLiteral => ErrorCode::INVALID_HEX_LITERAL,
            LexErrorKind::InvalidNumericSuffix => ErrorCode::INVALID_NUMERIC_SUFFIX,
            LexErrorKind::MalformedFloat => ErrorCode::MALFORMED_FLOAT,
            LexErrorKind::FloatOutOfRange => ErrorCode::FLOAT_OUT_OF_RANGE,
            LexErrorKind::UnsupportedNumericForm(_) => ErrorCode::UNSUPPORTED_NUMERIC_FORM,
            LexErrorKind::UnterminatedString => ErrorCode::UNTERMINATED_STRING,
            LexErrorKind::UnterminatedChar => ErrorCode::UNTERMINATED_CHAR,
            LexErrorKind::UnterminatedRawString => ErrorCode::UNTERMINATED_RAW_STRING,
            LexErrorKind::CharLiteralTooLong => ErrorCode::CHAR_LITERAL_TOO_LONG,
            LexErrorKind::EmptyCharLiteral => ErrorCode::EMPTY_CHAR_LITERAL,
            LexErrorKind::UnterminatedComment => ErrorCode::UNTERMINATED_COMMENT,
            LexErrorKind::InvalidUnicodeEscape => ErrorCode::INVALID_UNICODE_ESCAPE,
            LexErrorKind::InvalidOctalEscape => ErrorCode::INVALID_OCTAL_ESCAPE,
            LexErrorKind::UnknownEscapeSequence(_) => ErrorCode::UNKNOWN_ESCAPE_SEQUENCE,
        }
    }

    /// Text under the primary label
    fn label(&self) -> &'static str {
        match self {
            LexErrorKind::IllegalCharacter(_) => "not part of any token",
            LexErrorKind::UnterminatedString
            | LexErrorKind::UnterminatedChar
            | LexErrorKind::UnterminatedRawString => "literal starts here but is never closed",
            LexErrorKind::UnterminatedComment => "comment starts here but is never closed",
            LexErrorKind::InvalidUnicodeEscape
            | LexErrorKind::InvalidOctalEscape
            | LexErrorKind::UnknownEscapeSequence(_) => "in this literal",
            _ => "invalid literal",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::InvalidLeadingZero => Some("remove the leading zeros"),
            LexErrorKind::InvalidHexLiteral => {
                Some("hex literals are `0x` followed by 0-9, a-f or A-F")
            }
            LexErrorKind::InvalidNumericSuffix => {
                Some("separate the number from the following name")
            }
            LexErrorKind::MalformedFloat => {
                Some("floats are written as digits, `.`, digits (e.g. `1.5`)")
            }
            LexErrorKind::FloatOutOfRange => Some("the value does not fit in a 64-bit float"),
            LexErrorKind::UnsupportedNumericForm(NumericForm::LegacyOctal) => {
                Some("octal integers are not supported; write the value in decimal or hex")
            }
            LexErrorKind::UnsupportedNumericForm(_) => Some("write the value in decimal or hex"),
            LexErrorKind::UnterminatedString => {
                Some("add a closing `\"`; use a backtick string for multiple lines")
            }
            LexErrorKind::UnterminatedChar => Some("add a closing `'`"),
            LexErrorKind::UnterminatedRawString => Some("add a closing backtick"),
            LexErrorKind::CharLiteralTooLong => {
                Some("use a double-quoted string for more than one character")
            }
            LexErrorKind::UnterminatedComment => Some("add `*/` to close the comment"),
            LexErrorKind::InvalidUnicodeEscape => {
                Some("`\\u` takes exactly 4 hex digits and `\\U` exactly 8, naming a valid code point")
            }
            LexErrorKind::InvalidOctalEscape => {
                Some("octal escapes are exactly 3 digits 0-7, at most `\\377`")
            }
            LexErrorKind::UnknownEscapeSequence(_) => {
                Some("valid escapes are \\n \\t \\\\ \\\" \\' \\uXXXX \\UXXXXXXXX and \\ooo")
            }
            _ => None,
        }
    }
}

/// A lexical error and the source region it covers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {}", .span.start)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Converts the error into a renderable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.kind.to_string())
            .with_code(self.code())
            .with_label(self.span, self.kind.label());

        match self.kind.help() {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

impl Spanned for LexError {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.to_diagnostic()
    }
}
