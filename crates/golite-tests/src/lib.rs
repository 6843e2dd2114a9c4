//! Integration tests for the golite lexer
//!
//! This crate drives the lexer end to end over whole programs and checks
//! the token stream and the errors it reports, the same way a parser would
//! consume them.

use golite_error::{Diagnostics, SourceFile};
use golite_lexer::{LexError, LexErrorKind, Lexer, Token, TokenKind};

/// Everything the lexer produced for one source text
#[derive(Debug)]
pub struct LexRun {
    /// Tokens in source order, end of input excluded
    pub tokens: Vec<Token>,
    /// Errors in source order
    pub errors: Vec<LexError>,
}

impl LexRun {
    pub fn kinds_and_values(&self) -> Vec<(TokenKind, String)> {
        self.tokens
            .iter()
            .map(|t| (t.kind, t.value.clone()))
            .collect()
    }

    pub fn error_kinds(&self) -> Vec<LexErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}

/// Lexes source code until end of input, keeping going after errors
pub fn lex_all(source: &str) -> LexRun {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in Lexer::new(source, 0) {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    LexRun { tokens, errors }
}

/// Renders every lexical error of a source file as plain text
pub fn render_errors(name: &str, source: &str) -> String {
    let (_, diagnostics): (_, Diagnostics) = golite_lexer::tokenize(source, 0);
    diagnostics.render(&SourceFile::new(name, source))
}

/// Asserts that source code lexes without errors
pub fn assert_lexes(source: &str) -> LexRun {
    let run = lex_all(source);
    if !run.errors.is_empty() {
        panic!(
            "Expected source to lex cleanly, but got errors:\n{:?}",
            run.errors
        );
    }
    run
}

/// Asserts that lexing source code reports at least one error
pub fn assert_lex_fails(source: &str) -> LexRun {
    let run = lex_all(source);
    if run.errors.is_empty() {
        panic!(
            "Expected source to fail lexing, but it produced only tokens:\n{:?}",
            run.tokens
        );
    }
    run
}

#[cfg(test)]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

#[cfg(test)]
mod program_tests {
    use super::*;
    use golite_lexer::{Delimiter, Keyword};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_program() {
        init_tracing();
        let run = assert_lexes("");
        assert!(run.tokens.is_empty());
    }

    #[test]
    fn test_hello_world() {
        init_tracing();
        let run = assert_lexes(
            r#"
package main

import (
	"fmt"
)

func main() {
	var a int = 1
	fmt.Println("Hello, World!")
}
"#,
        );

        assert_eq!(run.tokens.len(), 23);
        assert!(run.tokens[0].is_keyword(Keyword::Package));
        assert!(run.tokens[3].is_delimiter(Delimiter::LParen));
        assert_eq!(run.tokens[4].value, "fmt");
        assert_eq!(
            run.kinds_and_values()[10..16].to_vec(),
            vec![
                tok(TokenKind::Delimiter, "{"),
                tok(TokenKind::Reserved, "var"),
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Type, "int"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Integer, "1"),
            ]
        );
        assert_eq!(run.tokens[20].value, "Hello, World!");
        assert_eq!(run.tokens[20].span.start.line, 10);
    }

    #[test]
    fn test_comments_mixed_with_code() {
        init_tracing();
        let run = assert_lexes(
            r#"// 单行注释
/* 多行注释 */
/* 多行注释中包含单行注释
// 这是单行注释
*/

var x = 42 // 变量声明后的注释
// 单行注释中包含代码片段
// var a = 10

/* 多行注释中包含代码片段
func test() {
    var b = 20
}
*/

// 注释中包含特殊字符
// !@#$%^&*()_+-={}[]|:;"'<>,.?/ \n \t \\

// 注释与代码混合
var e = 50 /* 这是一个注释 */ + 10"#,
        );

        assert_eq!(
            run.kinds_and_values(),
            vec![
                tok(TokenKind::Reserved, "var"),
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Integer, "42"),
                tok(TokenKind::Reserved, "var"),
                tok(TokenKind::Identifier, "e"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Integer, "50"),
                tok(TokenKind::Operator, "+"),
                tok(TokenKind::Integer, "10"),
            ]
        );
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literals() {
        init_tracing();
        let run = assert_lexes(
            r#"
// 整数
0
-1
2147483647
-2147483648
0x1A2B3C4D
0X1a2b3c4d

// 浮点数
0.0
-0.1
3.141592653589793
00.0

// 字符串
""
"Hello, 世界!"
"Escape: \\n \\t \\\""

// 字符
'a'
'\n'
'\''
'中'
"#,
        );

        assert_eq!(
            run.kinds_and_values(),
            vec![
                tok(TokenKind::Integer, "0"),
                tok(TokenKind::Operator, "-"),
                tok(TokenKind::Integer, "1"),
                tok(TokenKind::Integer, "2147483647"),
                tok(TokenKind::Operator, "-"),
                tok(TokenKind::Integer, "2147483648"),
                tok(TokenKind::Integer, "0x1A2B3C4D"),
                tok(TokenKind::Integer, "0X1a2b3c4d"),
                tok(TokenKind::Float, "0.0"),
                tok(TokenKind::Operator, "-"),
                tok(TokenKind::Float, "0.1"),
                tok(TokenKind::Float, "3.141592653589793"),
                tok(TokenKind::Float, "0.0"),
                tok(TokenKind::String, ""),
                tok(TokenKind::String, "Hello, 世界!"),
                tok(TokenKind::String, r#"Escape: \n \t \""#),
                tok(TokenKind::Char, "a"),
                tok(TokenKind::Char, "\n"),
                tok(TokenKind::Char, "'"),
                tok(TokenKind::Char, "中"),
            ]
        );
    }

    #[test]
    fn test_operators() {
        let run = assert_lexes("/ % = == != < <= > >= && || ++ -- ! & | ^ << >>");
        let expected = [
            "/", "%", "=", "==", "!=", "<", "<=", ">", ">=", "&&", "||", "++", "--", "!", "&",
            "|", "^", "<<", ">>",
        ];

        assert_eq!(
            run.kinds_and_values(),
            expected
                .iter()
                .map(|op| tok(TokenKind::Operator, op))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_delimiters() {
        let run = assert_lexes("( ) { } [ ] , ; . :");
        let expected = ["(", ")", "{", "}", "[", "]", ",", ";", ".", ":"];

        assert_eq!(
            run.kinds_and_values(),
            expected
                .iter()
                .map(|d| tok(TokenKind::Delimiter, d))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reserved_words() {
        let source = "break case chan const continue default defer do else
false for func go goto if import
interface map package range return select
struct switch true type var rune";
        let run = assert_lexes(source);

        assert_eq!(run.tokens.len(), 28);
        for (token, word) in run.tokens.iter().zip(source.split_whitespace()) {
            assert_eq!(token.kind, TokenKind::Reserved, "{word}");
            assert_eq!(token.value, word);
        }
    }

    #[test]
    fn test_identifiers() {
        let source = "// 合法标识符
a
A
abc
ABC
a1
A1
_abc
_123
变量名
变量123
π";
        let run = assert_lexes(source);
        let expected = [
            "a", "A", "abc", "ABC", "a1", "A1", "_abc", "_123", "变量名", "变量123", "π",
        ];

        assert_eq!(
            run.kinds_and_values(),
            expected
                .iter()
                .map(|name| tok(TokenKind::Identifier, name))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_builtin_types() {
        let run = assert_lexes(
            "//布尔类型\nbool\n//有符号整数\nint\nfloat //浮点数类型\nstring\nbyte",
        );

        assert_eq!(
            run.kinds_and_values(),
            vec![
                tok(TokenKind::Type, "bool"),
                tok(TokenKind::Type, "int"),
                tok(TokenKind::Type, "float"),
                tok(TokenKind::Type, "string"),
                tok(TokenKind::Type, "byte"),
            ]
        );
    }

    #[test]
    fn test_longest_operator_wins() {
        let run = assert_lexes("// 操作符混合时，应当匹配最长的操作符\n<=> >=< !=> >-< === ====\n");
        let expected = [
            "<=", ">", ">=", "<", "!=", ">", ">", "-", "<", "==", "=", "==", "==",
        ];

        assert_eq!(
            run.kinds_and_values(),
            expected
                .iter()
                .map(|op| tok(TokenKind::Operator, op))
                .collect::<Vec<_>>()
        );
    }
}
