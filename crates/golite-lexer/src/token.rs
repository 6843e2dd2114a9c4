//! Tokens for the golite language
//!
//! A token is a category (`TokenKind`), the decoded text of the lexeme, and
//! a finer-grained `Specific` tag so the parser can match on an exact
//! operator, keyword or builtin type without comparing strings.

use golite_error::span::{Span, Spanned};
use std::fmt;

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// Input exhausted; returned again on every later call
    EndOfInput,
    Integer,
    Float,
    /// Interpreted (`"..."`) or raw (`` `...` ``) string
    String,
    Char,
    Operator,
    Delimiter,
    /// Reserved word (`var`, `func`, ...)
    Reserved,
    /// Builtin type name (`int`, `string`, ...)
    Type,
    Identifier,
    /// Zero value; never produced by a successful scan
    #[default]
    None,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Reserved => "reserved word",
            TokenKind::Type => "type",
            TokenKind::Identifier => "identifier",
            TokenKind::None => "none",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Do,
    Else,
    False,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    True,
    Type,
    Var,
    Rune,
}

impl Keyword {
    pub const ALL: [Keyword; 28] = [
        Keyword::Break,
        Keyword::Case,
        Keyword::Chan,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Default,
        Keyword::Defer,
        Keyword::Do,
        Keyword::Else,
        Keyword::False,
        Keyword::For,
        Keyword::Func,
        Keyword::Go,
        Keyword::Goto,
        Keyword::If,
        Keyword::Import,
        Keyword::Interface,
        Keyword::Map,
        Keyword::Package,
        Keyword::Range,
        Keyword::Return,
        Keyword::Select,
        Keyword::Struct,
        Keyword::Switch,
        Keyword::True,
        Keyword::Type,
        Keyword::Var,
        Keyword::Rune,
    ];

    /// Converts an identifier-shaped word to a keyword, if it is one
    pub fn from_ident(s: &str) -> Option<Keyword> {
        match s {
            "break" => Some(Keyword::Break),
            "case" => Some(Keyword::Case),
            "chan" => Some(Keyword::Chan),
            "const" => Some(Keyword::Const),
            "continue" => Some(Keyword::Continue),
            "default" => Some(Keyword::Default),
            "defer" => Some(Keyword::Defer),
            "do" => Some(Keyword::Do),
            "else" => Some(Keyword::Else),
            "false" => Some(Keyword::False),
            "for" => Some(Keyword::For),
            "func" => Some(Keyword::Func),
            "go" => Some(Keyword::Go),
            "goto" => Some(Keyword::Goto),
            "if" => Some(Keyword::If),
            "import" => Some(Keyword::Import),
            "interface" => Some(Keyword::Interface),
            "map" => Some(Keyword::Map),
            "package" => Some(Keyword::Package),
            "range" => Some(Keyword::Range),
            "return" => Some(Keyword::Return),
            "select" => Some(Keyword::Select),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            "true" => Some(Keyword::True),
            "type" => Some(Keyword::Type),
            "var" => Some(Keyword::Var),
            "rune" => Some(Keyword::Rune),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Chan => "chan",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Defer => "defer",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Func => "func",
            Keyword::Go => "go",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::Interface => "interface",
            Keyword::Map => "map",
            Keyword::Package => "package",
            Keyword::Range => "range",
            Keyword::Return => "return",
            Keyword::Select => "select",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::True => "true",
            Keyword::Type => "type",
            Keyword::Var => "var",
            Keyword::Rune => "rune",
        }
    }
}

/// Builtin type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Bool,
    Int,
    Float,
    String,
    Byte,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 5] = [
        BuiltinType::Bool,
        BuiltinType::Int,
        BuiltinType::Float,
        BuiltinType::String,
        BuiltinType::Byte,
    ];

    pub fn from_ident(s: &str) -> Option<BuiltinType> {
        match s {
            "bool" => Some(BuiltinType::Bool),
            "int" => Some(BuiltinType::Int),
            "float" => Some(BuiltinType::Float),
            "string" => Some(BuiltinType::String),
            "byte" => Some(BuiltinType::Byte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinType::Bool => "bool",
            BuiltinType::Int => "int",
            BuiltinType::Float => "float",
            BuiltinType::String => "string",
            BuiltinType::Byte => "byte",
        }
    }
}

/// Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // =========================================
    // Arithmetic and bitwise
    // =========================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^` (bit clear)
    AmpersandCaret,

    // =========================================
    // Assignment
    // =========================================
    /// `=`
    Eq,
    /// `:=`
    ColonEq,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `&=`
    AmpersandEq,
    /// `|=`
    PipeEq,
    /// `^=`
    CaretEq,
    /// `<<=`
    ShlEq,
    /// `>>=`
    ShrEq,
    /// `&^=`
    AmpersandCaretEq,

    // =========================================
    // Comparison and logic
    // =========================================
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Not,

    // =========================================
    // Other
    // =========================================
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `<-` (channel send/receive)
    Arrow,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Ampersand => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::AmpersandCaret => "&^",
            Operator::Eq => "=",
            Operator::ColonEq => ":=",
            Operator::PlusEq => "+=",
            Operator::MinusEq => "-=",
            Operator::StarEq => "*=",
            Operator::SlashEq => "/=",
            Operator::PercentEq => "%=",
            Operator::AmpersandEq => "&=",
            Operator::PipeEq => "|=",
            Operator::CaretEq => "^=",
            Operator::ShlEq => "<<=",
            Operator::ShrEq => ">>=",
            Operator::AmpersandCaretEq => "&^=",
            Operator::EqEq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Not => "!",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::Arrow => "<-",
        }
    }

    /// Returns true for `=`, `:=` and the compound assignments
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::ColonEq
                | Operator::PlusEq
                | Operator::MinusEq
                | Operator::StarEq
                | Operator::SlashEq
                | Operator::PercentEq
                | Operator::AmpersandEq
                | Operator::PipeEq
                | Operator::CaretEq
                | Operator::ShlEq
                | Operator::ShrEq
                | Operator::AmpersandCaretEq
        )
    }
}

/// Delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `...`
    Ellipsis,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
            Delimiter::LBrace => "{",
            Delimiter::RBrace => "}",
            Delimiter::LBracket => "[",
            Delimiter::RBracket => "]",
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Dot => ".",
            Delimiter::Colon => ":",
            Delimiter::Ellipsis => "...",
        }
    }
}

/// Finer-grained classification refining a `TokenKind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Specific {
    #[default]
    None,
    /// Decimal integer literal
    Decimal,
    /// `0x`/`0X` integer literal
    Hex,
    /// Double-quoted string with escapes decoded
    Interpreted,
    /// Backtick string, taken verbatim
    Raw,
    Operator(Operator),
    Delimiter(Delimiter),
    Keyword(Keyword),
    Builtin(BuiltinType),
}

impl Specific {
    /// Source spelling for fixed lexemes (operators, delimiters, words)
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Specific::Operator(op) => Some(op.as_str()),
            Specific::Delimiter(delim) => Some(delim.as_str()),
            Specific::Keyword(kw) => Some(kw.as_str()),
            Specific::Builtin(ty) => Some(ty.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Specific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specific::None => write!(f, "-"),
            Specific::Decimal => write!(f, "decimal"),
            Specific::Hex => write!(f, "hex"),
            Specific::Interpreted => write!(f, "interpreted"),
            Specific::Raw => write!(f, "raw"),
            Specific::Operator(op) => write!(f, "operator `{}`", op.as_str()),
            Specific::Delimiter(delim) => write!(f, "delimiter `{}`", delim.as_str()),
            Specific::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            Specific::Builtin(ty) => write!(f, "type `{}`", ty.as_str()),
        }
    }
}

/// A token with its decoded value and location in the source code
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded text: escapes resolved for strings and chars, canonical
    /// rendering for floats, original spelling for everything else
    pub value: String,
    pub specific: Specific,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, specific: Specific, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            specific,
            span,
        }
    }

    pub fn end_of_input(span: Span) -> Self {
        Self::new(TokenKind::EndOfInput, "", Specific::None, span)
    }

    /// Checks if it is the end of input
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.specific == Specific::Keyword(keyword)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.specific == Specific::Operator(op)
    }

    pub fn is_delimiter(&self, delim: Delimiter) -> bool {
        self.specific == Specific::Delimiter(delim)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.value, self.span.start.line, self.span.start.column
        )
    }
}
