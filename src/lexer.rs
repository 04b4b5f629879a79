//! Base SQL lexer.
//!
//! Splits source text into coarse tokens the way a generic SQL highlighter
//! would: it knows ANSI keywords and type names, literals, comments and
//! operators, but nothing Oracle specific. Every byte of the source ends up in
//! exactly one token; unknown characters become one-character `Error` tokens.

use compact_str::CompactString;
use memchr::memchr;

use crate::token::{Pos, Token, TokenType};

/// Result of a single lex step: the category and how many bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexResult {
    pub token_type: TokenType,
    pub match_len: usize,
}

impl LexResult {
    fn new(token_type: TokenType, match_len: usize) -> Self {
        Self {
            token_type,
            match_len,
        }
    }
}

/// Lazy token stream over a source string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: Pos,
}

/// Tokenize `source` lazily.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer { source, pos: 0 }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let remaining = &self.source[self.pos..];
        let result = lex_one(remaining)?;
        let token = Token::new(result.token_type, &remaining[..result.match_len], self.pos);
        self.pos += result.match_len;
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex the token at the start of `remaining`. `None` at end of input.
///
/// `match_len` is always > 0 and always lands on a char boundary.
pub fn lex_one(remaining: &str) -> Option<LexResult> {
    let bytes = remaining.as_bytes();
    let b0 = *bytes.first()?;
    let b1 = bytes.get(1).copied();

    let result = match b0 {
        b if b.is_ascii_whitespace() => {
            LexResult::new(TokenType::Whitespace, scan_whitespace(bytes))
        }

        b'-' if b1 == Some(b'-') => LexResult::new(TokenType::Comment, scan_line_comment(bytes)),
        b'/' if b1 == Some(b'*') => LexResult::new(TokenType::Comment, scan_block_comment(bytes)),

        b'\'' => LexResult::new(TokenType::String, scan_string(bytes)),
        b'"' => LexResult::new(TokenType::QuotedName, scan_quoted_name(bytes)),

        // q'[...]', n'...', nq'{...}'
        b'q' | b'Q' if b1 == Some(b'\'') => {
            LexResult::new(TokenType::String, 1 + scan_q_string(&bytes[1..]))
        }
        b'n' | b'N' if b1 == Some(b'\'') => {
            LexResult::new(TokenType::String, 1 + scan_string(&bytes[1..]))
        }
        b'n' | b'N' if matches!(b1, Some(b'q' | b'Q')) && bytes.get(2) == Some(&b'\'') => {
            LexResult::new(TokenType::String, 2 + scan_q_string(&bytes[2..]))
        }

        b'0'..=b'9' => LexResult::new(TokenType::Number, scan_number(bytes)),
        b'.' if b1.is_some_and(|b| b.is_ascii_digit()) => {
            LexResult::new(TokenType::Number, scan_number(bytes))
        }

        b if is_word_start(b) => lex_word(remaining),

        // bind variable
        b':' if b1.is_some_and(is_word_start) => {
            LexResult::new(TokenType::Name, 1 + scan_word(&bytes[1..]))
        }

        _ => {
            let comp = scan_compound_operator(bytes);
            if comp > 0 {
                LexResult::new(TokenType::Operator, comp)
            } else if matches!(b0, b'.' | b',' | b';' | b'(' | b')' | b'[' | b']') {
                LexResult::new(TokenType::Punctuation, 1)
            } else if is_operator_char(b0) {
                LexResult::new(TokenType::Operator, 1)
            } else {
                let len = remaining.chars().next().map_or(1, char::len_utf8);
                LexResult::new(TokenType::Error, len)
            }
        }
    };

    Some(result)
}

fn lex_word(remaining: &str) -> LexResult {
    let word_len = scan_word(remaining.as_bytes());
    let lower: CompactString = remaining[..word_len]
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let token_type = if is_sql_keyword(&lower) {
        TokenType::Keyword
    } else if is_sql_type(&lower) {
        TokenType::Builtin
    } else {
        TokenType::Name
    };
    LexResult::new(token_type, word_len)
}

#[inline]
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_operator_char(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'=' | b'<' | b'>' | b'%' | b'@' | b'|' | b'!' | b'~'
            | b'^' | b'&' | b':'
    )
}

/// Returns the byte length of leading ASCII whitespace (newlines included).
#[inline]
fn scan_whitespace(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len())
}

/// Scan an identifier: alphanumerics, `_`, `$`, `#`, and any non-ASCII byte.
/// Returns byte length of the identifier.
#[inline]
fn scan_word(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'#' || b >= 0x80 {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// Scan a number: integer part, optional fraction, optional exponent, and the
/// `f`/`d` binary float suffixes. A `..` range operator ends the number.
fn scan_number(bytes: &[u8]) -> usize {
    let len = bytes.len();
    let mut i = 0;

    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }

    if i < len && bytes[i] == b'.' && bytes.get(i + 1) != Some(&b'.') {
        i += 1;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < len && bytes[j].is_ascii_digit() {
            i = j;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    if i < len
        && matches!(bytes[i], b'f' | b'F' | b'd' | b'D')
        && (i + 1 >= len || !bytes[i + 1].is_ascii_alphanumeric())
    {
        i += 1;
    }

    i
}

/// Scan a single-quoted string where `''` is an escaped quote.
/// Returns the byte length including delimiters; unterminated runs to the end.
fn scan_string(bytes: &[u8]) -> usize {
    let mut i = 1;
    while let Some(offset) = memchr(b'\'', &bytes[i..]) {
        let pos = i + offset;
        if bytes.get(pos + 1) == Some(&b'\'') {
            i = pos + 2;
            continue;
        }
        return pos + 1;
    }
    bytes.len()
}

/// Scan an alternative-quoted string body starting at the `'` of `q'[...]'`.
/// Bracket delimiters close with their partner, anything else with itself.
fn scan_q_string(bytes: &[u8]) -> usize {
    let Some(&open) = bytes.get(1) else {
        return bytes.len();
    };
    if open >= 0x80 || open.is_ascii_whitespace() {
        return scan_string(bytes);
    }
    let close = match open {
        b'[' => b']',
        b'{' => b'}',
        b'(' => b')',
        b'<' => b'>',
        other => other,
    };
    let mut i = 2;
    while let Some(offset) = memchr(close, &bytes[i..]) {
        let pos = i + offset;
        if bytes.get(pos + 1) == Some(&b'\'') {
            return pos + 2;
        }
        i = pos + 1;
    }
    bytes.len()
}

/// Scan a double-quoted identifier. Returns byte length including delimiters.
fn scan_quoted_name(bytes: &[u8]) -> usize {
    match memchr(b'"', &bytes[1..]) {
        Some(offset) => offset + 2,
        None => bytes.len(),
    }
}

/// Scan a line comment (`--`). Returns byte length, not including the newline.
fn scan_line_comment(bytes: &[u8]) -> usize {
    memchr(b'\n', bytes).unwrap_or(bytes.len())
}

/// Scan a block comment. `bytes` starts at `/*`. Returns byte length including delimiters.
fn scan_block_comment(bytes: &[u8]) -> usize {
    let mut i = 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Two-character operators. Returns 0 when none matches.
fn scan_compound_operator(bytes: &[u8]) -> usize {
    match bytes {
        [b':', b'=', ..]
        | [b'=', b'>', ..]
        | [b'|', b'|', ..]
        | [b'<', b'>', ..]
        | [b'!', b'=', ..]
        | [b'^', b'=', ..]
        | [b'~', b'=', ..]
        | [b'>', b'=', ..]
        | [b'<', b'=', ..]
        | [b'*', b'*', ..]
        | [b'.', b'.', ..]
        | [b'<', b'<', ..]
        | [b'>', b'>', ..] => 2,
        _ => 0,
    }
}

/// Generic SQL keywords (lowercase). Anything Oracle specific is left to the
/// refiner's tables.
fn is_sql_keyword(kw: &str) -> bool {
    matches!(
        kw,
        "select"
            | "from"
            | "where"
            | "insert"
            | "update"
            | "delete"
            | "merge"
            | "into"
            | "values"
            | "set"
            | "create"
            | "alter"
            | "drop"
            | "table"
            | "view"
            | "index"
            | "and"
            | "or"
            | "not"
            | "null"
            | "is"
            | "in"
            | "like"
            | "between"
            | "exists"
            | "as"
            | "on"
            | "join"
            | "left"
            | "right"
            | "inner"
            | "outer"
            | "full"
            | "cross"
            | "natural"
            | "using"
            | "union"
            | "intersect"
            | "except"
            | "all"
            | "any"
            | "some"
            | "distinct"
            | "group"
            | "by"
            | "order"
            | "having"
            | "asc"
            | "desc"
            | "case"
            | "when"
            | "then"
            | "else"
            | "end"
            | "begin"
            | "declare"
            | "if"
            | "loop"
            | "while"
            | "for"
            | "return"
            | "returns"
            | "function"
            | "procedure"
            | "trigger"
            | "commit"
            | "rollback"
            | "savepoint"
            | "grant"
            | "revoke"
            | "with"
            | "to"
            | "default"
            | "primary"
            | "foreign"
            | "key"
            | "references"
            | "constraint"
            | "check"
            | "unique"
            | "true"
            | "false"
    )
}

/// Generic SQL type names (lowercase).
fn is_sql_type(kw: &str) -> bool {
    matches!(
        kw,
        "char"
            | "character"
            | "varchar"
            | "nchar"
            | "integer"
            | "int"
            | "smallint"
            | "bigint"
            | "decimal"
            | "numeric"
            | "float"
            | "real"
            | "double"
            | "precision"
            | "date"
            | "time"
            | "timestamp"
            | "interval"
            | "boolean"
            | "blob"
            | "clob"
    )
}
