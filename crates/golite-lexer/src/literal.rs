//! String, raw string and character literals

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::escape::{self, EscapeError};
use crate::token::{Specific, Token, TokenKind};
use golite_error::span::Position;

/// Scans a double-quoted string, decoding escapes
pub(crate) fn scan_string(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let start = cursor.position();
    cursor.advance(); // Consume the opening quote
    let mut value = String::new();

    loop {
        match cursor.current() {
            None | Some('\n') => {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedString,
                    cursor.span_from(start),
                ))
            }
            Some('"') => {
                cursor.advance();
                return Ok(Token::new(
                    TokenKind::String,
                    value,
                    Specific::Interpreted,
                    cursor.span_from(start),
                ));
            }
            Some('\\') => match escape::decode(cursor) {
                Ok(escape) => {
                    value.push(escape.value);
                    cursor.advance_by(escape.len);
                }
                Err(err) => {
                    return Err(escape_failure(
                        cursor,
                        start,
                        err,
                        '"',
                        LexErrorKind::UnterminatedString,
                    ))
                }
            },
            Some(ch) => {
                value.push(ch);
                cursor.advance();
            }
        }
    }
}

/// Scans a backtick string; nothing inside is interpreted
pub(crate) fn scan_raw_string(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let start = cursor.position();
    cursor.advance(); // Consume the opening backtick
    let mut value = String::new();

    loop {
        match cursor.advance() {
            Some('`') => {
                return Ok(Token::new(
                    TokenKind::String,
                    value,
                    Specific::Raw,
                    cursor.span_from(start),
                ))
            }
            Some(ch) => value.push(ch),
            None => {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedRawString,
                    cursor.span_from(start),
                ))
            }
        }
    }
}

/// Scans a character literal holding exactly one character or escape
pub(crate) fn scan_char(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let start = cursor.position();
    cursor.advance(); // Consume the opening quote

    let value = match cursor.current() {
        Some('\'') => {
            cursor.advance();
            return Err(LexError::new(
                LexErrorKind::EmptyCharLiteral,
                cursor.span_from(start),
            ));
        }
        None | Some('\n') => {
            return Err(LexError::new(
                LexErrorKind::UnterminatedChar,
                cursor.span_from(start),
            ))
        }
        Some('\\') => match escape::decode(cursor) {
            Ok(escape) => {
                cursor.advance_by(escape.len);
                escape.value
            }
            Err(err) => {
                return Err(escape_failure(
                    cursor,
                    start,
                    err,
                    '\'',
                    LexErrorKind::UnterminatedChar,
                ))
            }
        },
        Some(ch) => {
            cursor.advance();
            ch
        }
    };

    match cursor.current() {
        Some('\'') => {
            cursor.advance();
            Ok(Token::new(
                TokenKind::Char,
                value.to_string(),
                Specific::None,
                cursor.span_from(start),
            ))
        }
        None | Some('\n') => Err(LexError::new(
            LexErrorKind::UnterminatedChar,
            cursor.span_from(start),
        )),
        Some(_) => {
            let kind = if skip_past_closing(cursor, '\'') {
                LexErrorKind::CharLiteralTooLong
            } else {
                LexErrorKind::UnterminatedChar
            };
            Err(LexError::new(kind, cursor.span_from(start)))
        }
    }
}

/// Consumes a failed escape and the rest of its literal.
///
/// A backslash right before a line break or the end of input leaves the
/// literal unterminated; that is reported instead of the escape.
fn escape_failure(
    cursor: &mut Cursor<'_>,
    start: Position,
    err: EscapeError,
    quote: char,
    unterminated: LexErrorKind,
) -> LexError {
    if matches!(cursor.peek(1), None | Some('\n')) {
        cursor.advance();
        return LexError::new(unterminated, cursor.span_from(start));
    }

    cursor.advance_by(err.len);
    skip_past_closing(cursor, quote);
    LexError::new(err.kind, cursor.span_from(start))
}

/// Skips to just past `quote` on the current line, stepping over escaped
/// characters. Returns false if the line or the input ends first; the line
/// break itself is never consumed.
fn skip_past_closing(cursor: &mut Cursor<'_>, quote: char) -> bool {
    loop {
        match cursor.current() {
            None | Some('\n') => return false,
            Some('\\') => {
                cursor.advance();
                if !matches!(cursor.current(), None | Some('\n')) {
                    cursor.advance();
                }
            }
            Some(ch) => {
                cursor.advance();
                if ch == quote {
                    return true;
                }
            }
        }
    }
}
