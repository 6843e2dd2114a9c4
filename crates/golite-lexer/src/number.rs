//! Numeric literals
//!
//! Accepted forms are decimal integers without redundant leading zeros,
//! `0x`/`0X` hexadecimal integers and `digits.digits` floats. Everything
//! else that starts with a digit is rejected as a single lexeme, so one
//! malformed number produces exactly one error.

use crate::classify::{is_digit, is_hex_digit, is_ident_continue, is_octal_digit};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, NumericForm};
use crate::token::{Specific, Token, TokenKind};
use golite_error::span::Position;

pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let start = cursor.position();
    cursor.eat_while(is_digit);
    let int_part = cursor.slice_from(start);

    if int_part == "0" {
        match cursor.current() {
            Some('x' | 'X') => return scan_hex(cursor, start),
            Some('b' | 'B') => {
                return Err(reject(
                    cursor,
                    start,
                    LexErrorKind::UnsupportedNumericForm(NumericForm::Binary),
                ))
            }
            Some('o' | 'O') => {
                return Err(reject(
                    cursor,
                    start,
                    LexErrorKind::UnsupportedNumericForm(NumericForm::OctalPrefix),
                ))
            }
            _ => {}
        }
    }

    if int_part.len() > 1 && int_part.starts_with('0') && cursor.current() != Some('.') {
        let kind = if is_legacy_octal(int_part) {
            LexErrorKind::UnsupportedNumericForm(NumericForm::LegacyOctal)
        } else {
            LexErrorKind::InvalidLeadingZero
        };
        return Err(reject(cursor, start, kind));
    }

    if cursor.current() == Some('.') {
        return scan_fraction(cursor, start);
    }

    if at_exponent(cursor) {
        return Err(reject_exponent(cursor, start));
    }

    if cursor.current().is_some_and(is_ident_continue) {
        return Err(reject(cursor, start, LexErrorKind::InvalidNumericSuffix));
    }

    Ok(Token::new(
        TokenKind::Integer,
        int_part,
        Specific::Decimal,
        cursor.span_from(start),
    ))
}

/// Cursor on the `x` of a `0x` prefix
fn scan_hex(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexError> {
    cursor.advance();
    let digits = cursor.eat_while(is_hex_digit);

    if digits == 0 || cursor.current().is_some_and(|c| is_ident_continue(c) || c == '.') {
        return Err(reject(cursor, start, LexErrorKind::InvalidHexLiteral));
    }

    Ok(Token::new(
        TokenKind::Integer,
        cursor.slice_from(start),
        Specific::Hex,
        cursor.span_from(start),
    ))
}

/// Cursor on the `.` following the integer part
fn scan_fraction(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexError> {
    cursor.advance();
    if cursor.eat_while(is_digit) == 0 {
        // `1.e+5`
        if at_exponent(cursor) {
            skip_exponent_marker(cursor);
        }
        return Err(reject(cursor, start, LexErrorKind::MalformedFloat));
    }

    if at_exponent(cursor) {
        return Err(reject_exponent(cursor, start));
    }

    // `123.456.789`, `1.5f`
    if cursor.current().is_some_and(|c| is_ident_continue(c) || c == '.') {
        return Err(reject(cursor, start, LexErrorKind::MalformedFloat));
    }

    let span = cursor.span_from(start);
    let value: f64 = cursor
        .slice_from(start)
        .parse()
        .map_err(|_| LexError::new(LexErrorKind::MalformedFloat, span))?;

    if !value.is_finite() {
        return Err(LexError::new(LexErrorKind::FloatOutOfRange, span));
    }

    Ok(Token::new(
        TokenKind::Float,
        canonical_float(value),
        Specific::None,
        span,
    ))
}

/// `e`/`E` followed by a digit, or by a sign and a digit
fn at_exponent(cursor: &Cursor<'_>) -> bool {
    if !matches!(cursor.current(), Some('e' | 'E')) {
        return false;
    }
    match cursor.peek(1) {
        Some('+' | '-') => cursor.peek(2).is_some_and(is_digit),
        Some(ch) => is_digit(ch),
        None => false,
    }
}

/// Consumes `e`/`E` and an optional sign
fn skip_exponent_marker(cursor: &mut Cursor<'_>) {
    cursor.advance();
    if matches!(cursor.current(), Some('+' | '-')) {
        cursor.advance();
    }
}

fn reject_exponent(cursor: &mut Cursor<'_>, start: Position) -> LexError {
    skip_exponent_marker(cursor);
    reject(cursor, start, LexErrorKind::UnsupportedNumericForm(NumericForm::Exponent))
}

/// Consumes the rest of a malformed number and reports it as one error
fn reject(cursor: &mut Cursor<'_>, start: Position, kind: LexErrorKind) -> LexError {
    cursor.eat_while(|c| is_ident_continue(c) || c == '.');
    LexError::new(kind, cursor.span_from(start))
}

/// `0[1-7][0-7]*`
fn is_legacy_octal(digits: &str) -> bool {
    let mut chars = digits.chars();
    chars.next() == Some('0')
        && chars.next().is_some_and(|c| matches!(c, '1'..='7'))
        && chars.all(is_octal_digit)
}

/// Shortest decimal text that parses back to a finite `value`, always with
/// a fractional part
pub(crate) fn canonical_float(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Scans one number and reports what is left of the input
    fn scan(source: &str) -> (Result<(TokenKind, String, Specific), LexErrorKind>, &str) {
        let mut cursor = Cursor::new(source, 0);
        let result = scan_number(&mut cursor)
            .map(|t| (t.kind, t.value, t.specific))
            .map_err(|e| e.kind);
        let rest = &source[cursor.position().offset..];
        (result, rest)
    }

    fn int(text: &str, specific: Specific) -> Result<(TokenKind, String, Specific), LexErrorKind> {
        Ok((TokenKind::Integer, text.to_string(), specific))
    }

    fn float(text: &str) -> Result<(TokenKind, String, Specific), LexErrorKind> {
        Ok((TokenKind::Float, text.to_string(), Specific::None))
    }

    #[test]
    fn test_decimal_integers() {
        assert_eq!(scan("0"), (int("0", Specific::Decimal), ""));
        assert_eq!(scan("2147483647;"), (int("2147483647", Specific::Decimal), ";"));
        assert_eq!(scan("42 + 1"), (int("42", Specific::Decimal), " + 1"));
        // far beyond any machine integer; range is not checked here
        assert_eq!(
            scan("99999999999999999999999"),
            (int("99999999999999999999999", Specific::Decimal), "")
        );
    }

    #[test]
    fn test_hex_keeps_spelling() {
        assert_eq!(scan("0x1A2B3C4D"), (int("0x1A2B3C4D", Specific::Hex), ""));
        assert_eq!(scan("0X1a2b3c4d)"), (int("0X1a2b3c4d", Specific::Hex), ")"));
    }

    #[test]
    fn test_invalid_hex() {
        for source in ["0XGHI", "0xghi", "0x123.456", "0x", "0X", "0xfg"] {
            let (result, rest) = scan(source);
            assert_eq!(result, Err(LexErrorKind::InvalidHexLiteral), "{source}");
            assert_eq!(rest, "", "{source}");
        }
        assert_eq!(scan("0x\n1").1, "\n1");
    }

    #[test]
    fn test_floats() {
        assert_eq!(scan("0.0"), (float("0.0"), ""));
        assert_eq!(scan("00.0"), (float("0.0"), ""));
        assert_eq!(scan("0.1"), (float("0.1"), ""));
        assert_eq!(scan("3.141592653589793"), (float("3.141592653589793"), ""));
        assert_eq!(scan("1.50 "), (float("1.5"), " "));
        assert_eq!(scan("007.25"), (float("7.25"), ""));
    }

    #[test]
    fn test_malformed_floats() {
        assert_eq!(scan("123.456.789"), (Err(LexErrorKind::MalformedFloat), ""));
        assert_eq!(scan("1."), (Err(LexErrorKind::MalformedFloat), ""));
        assert_eq!(scan("1.x y"), (Err(LexErrorKind::MalformedFloat), " y"));
        assert_eq!(scan("2.5f"), (Err(LexErrorKind::MalformedFloat), ""));
        assert_eq!(scan("1.e+5;"), (Err(LexErrorKind::MalformedFloat), ";"));
        assert_eq!(scan("1.E-2"), (Err(LexErrorKind::MalformedFloat), ""));
        assert_eq!(scan("1.e5"), (Err(LexErrorKind::MalformedFloat), ""));
        assert_eq!(scan("1.e+x"), (Err(LexErrorKind::MalformedFloat), "+x"));
    }

    #[test]
    fn test_float_out_of_range() {
        let huge = format!("{}.0 x", "1".repeat(400));
        assert_eq!(scan(&huge), (Err(LexErrorKind::FloatOutOfRange), " x"));

        let mut cursor = Cursor::new(&huge, 0);
        let err = scan_number(&mut cursor).unwrap_err();
        assert_eq!(err.span.len(), 402);

        // large but finite values keep a plain decimal rendering
        let (result, _) = scan(&format!("{}.5", "9".repeat(300)));
        let (kind, value, _) = result.unwrap();
        assert_eq!(kind, TokenKind::Float);
        assert!(value.ends_with(".0"));
        assert!(!value.contains(['e', 'i']));
    }

    #[test]
    fn test_exponents_are_unsupported() {
        let exponent = LexErrorKind::UnsupportedNumericForm(NumericForm::Exponent);
        assert_eq!(scan("1e10"), (Err(exponent), ""));
        assert_eq!(scan("1E+5;"), (Err(exponent), ";"));
        assert_eq!(scan("2.5e-3 x"), (Err(exponent), " x"));
        // not an exponent: the `e` is just a bad suffix
        assert_eq!(scan("1e"), (Err(LexErrorKind::InvalidNumericSuffix), ""));
        assert_eq!(scan("1e+x"), (Err(LexErrorKind::InvalidNumericSuffix), "+x"));
    }

    #[test]
    fn test_leading_zeros() {
        let legacy = LexErrorKind::UnsupportedNumericForm(NumericForm::LegacyOctal);
        assert_eq!(scan("0777"), (Err(legacy), ""));
        assert_eq!(scan("01"), (Err(legacy), ""));
        assert_eq!(scan("001"), (Err(LexErrorKind::InvalidLeadingZero), ""));
        assert_eq!(scan("089"), (Err(LexErrorKind::InvalidLeadingZero), ""));
        assert_eq!(scan("00"), (Err(LexErrorKind::InvalidLeadingZero), ""));
        assert_eq!(scan("0123abc "), (Err(legacy), " "));
    }

    #[test]
    fn test_other_prefixes_are_unsupported() {
        assert_eq!(
            scan("0b1010"),
            (Err(LexErrorKind::UnsupportedNumericForm(NumericForm::Binary)), "")
        );
        assert_eq!(
            scan("0O17 "),
            (Err(LexErrorKind::UnsupportedNumericForm(NumericForm::OctalPrefix)), " ")
        );
    }

    #[test]
    fn test_suffix_is_consumed_with_the_number() {
        assert_eq!(scan("123abc"), (Err(LexErrorKind::InvalidNumericSuffix), ""));
        assert_eq!(scan("0abc+1"), (Err(LexErrorKind::InvalidNumericSuffix), "+1"));
        assert_eq!(scan("7_"), (Err(LexErrorKind::InvalidNumericSuffix), ""));
    }

    #[test]
    fn test_canonical_float() {
        assert_eq!(canonical_float(0.0), "0.0");
        assert_eq!(canonical_float(100.0), "100.0");
        assert_eq!(canonical_float(0.1), "0.1");
        assert_eq!(canonical_float(1e21), "1000000000000000000000.0");
    }
}
