//! Identifiers, reserved words and builtin type names

use crate::classify::is_ident_continue;
use crate::cursor::Cursor;
use crate::token::{BuiltinType, Keyword, Specific, Token, TokenKind};

/// Scans a maximal identifier-shaped run; this never fails
pub(crate) fn scan_identifier(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.position();
    cursor.eat_while(is_ident_continue);

    let word = cursor.slice_from(start);
    let (kind, specific) = classify_word(word);
    Token::new(kind, word, specific, cursor.span_from(start))
}

/// Looks a word up in the reserved-word table, then the builtin types
pub(crate) fn classify_word(word: &str) -> (TokenKind, Specific) {
    if let Some(keyword) = Keyword::from_ident(word) {
        (TokenKind::Reserved, Specific::Keyword(keyword))
    } else if let Some(ty) = BuiltinType::from_ident(word) {
        (TokenKind::Type, Specific::Builtin(ty))
    } else {
        (TokenKind::Identifier, Specific::None)
    }
}
