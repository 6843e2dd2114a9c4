//! Operators and delimiters
//!
//! Matching is maximal munch over one table ordered by descending lexeme
//! length: the first entry the input starts with is the longest possible
//! match.

use crate::cursor::Cursor;
use crate::token::{Delimiter, Operator, Specific, Token, TokenKind};

const PUNCTUATION: &[(&str, Specific)] = &[
    // 3 characters
    ("<<=", Specific::Operator(Operator::ShlEq)),
    (">>=", Specific::Operator(Operator::ShrEq)),
    ("&^=", Specific::Operator(Operator::AmpersandCaretEq)),
    ("...", Specific::Delimiter(Delimiter::Ellipsis)),
    // 2 characters
    ("+=", Specific::Operator(Operator::PlusEq)),
    ("-=", Specific::Operator(Operator::MinusEq)),
    ("*=", Specific::Operator(Operator::StarEq)),
    ("/=", Specific::Operator(Operator::SlashEq)),
    ("%=", Specific::Operator(Operator::PercentEq)),
    ("&=", Specific::Operator(Operator::AmpersandEq)),
    ("|=", Specific::Operator(Operator::PipeEq)),
    ("^=", Specific::Operator(Operator::CaretEq)),
    ("<<", Specific::Operator(Operator::Shl)),
    (">>", Specific::Operator(Operator::Shr)),
    ("&^", Specific::Operator(Operator::AmpersandCaret)),
    ("&&", Specific::Operator(Operator::AndAnd)),
    ("||", Specific::Operator(Operator::OrOr)),
    ("<-", Specific::Operator(Operator::Arrow)),
    ("++", Specific::Operator(Operator::PlusPlus)),
    ("--", Specific::Operator(Operator::MinusMinus)),
    ("==", Specific::Operator(Operator::EqEq)),
    ("!=", Specific::Operator(Operator::Ne)),
    ("<=", Specific::Operator(Operator::Le)),
    (">=", Specific::Operator(Operator::Ge)),
    (":=", Specific::Operator(Operator::ColonEq)),
    // 1 character
    ("+", Specific::Operator(Operator::Plus)),
    ("-", Specific::Operator(Operator::Minus)),
    ("*", Specific::Operator(Operator::Star)),
    ("/", Specific::Operator(Operator::Slash)),
    ("%", Specific::Operator(Operator::Percent)),
    ("&", Specific::Operator(Operator::Ampersand)),
    ("|", Specific::Operator(Operator::Pipe)),
    ("^", Specific::Operator(Operator::Caret)),
    ("<", Specific::Operator(Operator::Lt)),
    (">", Specific::Operator(Operator::Gt)),
    ("=", Specific::Operator(Operator::Eq)),
    ("!", Specific::Operator(Operator::Not)),
    ("(", Specific::Delimiter(Delimiter::LParen)),
    (")", Specific::Delimiter(Delimiter::RParen)),
    ("{", Specific::Delimiter(Delimiter::LBrace)),
    ("}", Specific::Delimiter(Delimiter::RBrace)),
    ("[", Specific::Delimiter(Delimiter::LBracket)),
    ("]", Specific::Delimiter(Delimiter::RBracket)),
    (",", Specific::Delimiter(Delimiter::Comma)),
    (";", Specific::Delimiter(Delimiter::Semicolon)),
    (".", Specific::Delimiter(Delimiter::Dot)),
    (":", Specific::Delimiter(Delimiter::Colon)),
];

/// Matches the longest operator or delimiter at the cursor. Returns `None`
/// without consuming anything if no entry matches.
pub(crate) fn scan_punctuation(cursor: &mut Cursor<'_>) -> Option<Token> {
    let &(text, specific) = PUNCTUATION
        .iter()
        .find(|(text, _)| cursor.starts_with(text))?;

    let start = cursor.position();
    cursor.advance_by(text.len());

    let kind = match specific {
        Specific::Delimiter(_) => TokenKind::Delimiter,
        _ => TokenKind::Operator,
    };
    Some(Token::new(kind, text, specific, cursor.span_from(start)))
}
