//! Character classes used by the scanners

use unicode_xid::UnicodeXID;

/// ASCII decimal digit; the only digits that may start a number
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

#[inline]
pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

/// Unicode letter or underscore
#[inline]
pub fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_xid_start()
}

/// Unicode letter, Unicode decimal digit or underscore
#[inline]
pub fn is_ident_continue(ch: char) -> bool {
    ch == '_' || ch.is_xid_continue()
}

#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}
