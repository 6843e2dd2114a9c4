//! Escape sequence decoding shared by string and character literals
//!
//! Decoding is pure lookahead: the cursor sits on the backslash and is not
//! moved. The caller advances by the reported length, which on failure
//! covers the backslash, the trigger and every valid digit read before the
//! offending character.

use crate::classify::{is_hex_digit, is_octal_digit};
use crate::cursor::Cursor;
use crate::error::LexErrorKind;

/// A decoded escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Escape {
    pub value: char,
    /// Characters belonging to the escape, backslash included
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EscapeError {
    pub kind: LexErrorKind,
    pub len: usize,
}

pub(crate) fn decode(cursor: &Cursor<'_>) -> Result<Escape, EscapeError> {
    debug_assert_eq!(cursor.current(), Some('\\'));

    let simple = |value| Ok(Escape { value, len: 2 });
    match cursor.peek(1) {
        Some('n') => simple('\n'),
        Some('t') => simple('\t'),
        Some('\\') => simple('\\'),
        Some('"') => simple('"'),
        Some('\'') => simple('\''),
        Some('u') => hex_escape(cursor, 4),
        Some('U') => hex_escape(cursor, 8),
        Some('0'..='7') => octal_escape(cursor),
        // A line break is never part of a literal
        Some('\n') => Err(EscapeError {
            kind: LexErrorKind::UnknownEscapeSequence('\n'),
            len: 1,
        }),
        Some(other) => Err(EscapeError {
            kind: LexErrorKind::UnknownEscapeSequence(other),
            len: 2,
        }),
        None => Err(EscapeError {
            kind: LexErrorKind::UnknownEscapeSequence('\\'),
            len: 1,
        }),
    }
}

/// `\uXXXX` or `\UXXXXXXXX`
fn hex_escape(cursor: &Cursor<'_>, digits: usize) -> Result<Escape, EscapeError> {
    let mut value: u32 = 0;
    for i in 0..digits {
        match cursor.peek(2 + i).filter(|&c| is_hex_digit(c)).and_then(|c| c.to_digit(16)) {
            Some(digit) => value = value * 16 + digit,
            None => {
                return Err(EscapeError {
                    kind: LexErrorKind::InvalidUnicodeEscape,
                    len: 2 + i,
                })
            }
        }
    }

    // Rejects surrogates and anything above U+10FFFF
    char::from_u32(value)
        .map(|value| Escape {
            value,
            len: 2 + digits,
        })
        .ok_or(EscapeError {
            kind: LexErrorKind::InvalidUnicodeEscape,
            len: 2 + digits,
        })
}

/// `\ooo`, exactly three octal digits naming a byte
fn octal_escape(cursor: &Cursor<'_>) -> Result<Escape, EscapeError> {
    let mut value: u32 = 0;
    for i in 0..3 {
        match cursor.peek(1 + i).filter(|&c| is_octal_digit(c)).and_then(|c| c.to_digit(8)) {
            Some(digit) => value = value * 8 + digit,
            None => {
                return Err(EscapeError {
                    kind: LexErrorKind::InvalidOctalEscape,
                    len: 1 + i,
                })
            }
        }
    }

    match u8::try_from(value) {
        Ok(byte) => Ok(Escape {
            value: char::from(byte),
            len: 4,
        }),
        Err(_) => Err(EscapeError {
            kind: LexErrorKind::InvalidOctalEscape,
            len: 4,
        }),
    }
}
