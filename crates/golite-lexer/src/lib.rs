//! golite-lexer - Lexer/Tokenizer for the golite language
//!
//! This crate converts golite source code into a sequence of tokens.
//!
//! # Features
//!
//! - Go-style reserved words, builtin types and Unicode identifiers
//! - Decimal and hexadecimal integers, `digits.digits` floats
//! - Interpreted strings with `\n \t \\ \" \'`, `\uXXXX`, `\UXXXXXXXX` and
//!   `\ooo` escapes; raw backtick strings; character literals
//! - Longest-match operators and delimiters
//! - Error recovery: one error per malformed lexeme, lexing continues
//!
//! # Example
//!
//! ```rust
//! use golite_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("var x = 42 // answer", 0);
//! let kinds: Vec<TokenKind> = lexer.tokenize().iter().map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Reserved,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Integer,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! assert!(lexer.diagnostics().is_empty());
//! ```

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod escape;
mod ident;
mod literal;
mod number;
mod punct;

pub use error::{LexError, LexErrorKind, NumericForm};
pub use lexer::{tokenize, Lexer};
pub use token::{BuiltinType, Delimiter, Keyword, Operator, Specific, Token, TokenKind};
