//! Token category to terminal style mapping, and the two output renderers.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::token::{Token, TokenType};

/// Terminal style for a token category. Plain identifiers, punctuation and
/// trivia other than comments get the default (empty) spec.
pub fn color_spec(token_type: TokenType) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match token_type {
        TokenType::KeywordControl | TokenType::Keyword => {
            spec.set_fg(Some(Color::Magenta)).set_bold(true);
        }
        TokenType::KeywordDeclaration => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        }
        TokenType::KeywordConstant => {
            spec.set_fg(Some(Color::Red));
        }
        TokenType::KeywordType => {
            spec.set_fg(Some(Color::Yellow));
        }
        TokenType::Builtin => {
            spec.set_fg(Some(Color::Cyan));
        }
        TokenType::Namespace => {
            spec.set_fg(Some(Color::Green)).set_bold(true);
        }
        TokenType::NamespacedCall => {
            spec.set_fg(Some(Color::Green)).set_underline(true);
        }
        TokenType::SystemObject => {
            spec.set_fg(Some(Color::Cyan)).set_italic(true);
        }
        TokenType::String => {
            spec.set_fg(Some(Color::Green));
        }
        TokenType::Number => {
            spec.set_fg(Some(Color::Rgb(209, 154, 102)));
        }
        TokenType::Comment => {
            spec.set_fg(Some(Color::Black)).set_intense(true);
        }
        TokenType::Error => {
            spec.set_fg(Some(Color::Red)).set_underline(true);
        }
        TokenType::Whitespace
        | TokenType::Text
        | TokenType::Name
        | TokenType::QuotedName
        | TokenType::Punctuation
        | TokenType::Operator => {}
    }
    spec
}

/// Write every token's text with its color. The text written is exactly the
/// concatenation of the token texts.
pub fn write_highlighted<I, W>(tokens: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = Token>,
    W: WriteColor + ?Sized,
{
    for token in tokens {
        let spec = color_spec(token.token_type);
        if spec.is_none() {
            out.write_all(token.text.as_bytes())?;
        } else {
            out.set_color(&spec)?;
            out.write_all(token.text.as_bytes())?;
            out.reset()?;
        }
    }
    Ok(())
}

/// Write one line per token: `offset<TAB>category<TAB>"text"`.
pub fn write_token_dump<I, W>(tokens: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = Token>,
    W: Write + ?Sized,
{
    for token in tokens {
        writeln!(out, "{}\t{}\t{:?}", token.spos, token.token_type, token.text.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn sample() -> Vec<Token> {
        vec![
            Token::new(TokenType::KeywordDeclaration, "BEGIN", 0),
            Token::new(TokenType::Whitespace, " ", 5),
            Token::new(TokenType::NamespacedCall, "dbms_output.put_line", 6),
            Token::new(TokenType::Punctuation, ";", 26),
        ]
    }

    #[test]
    fn test_plain_categories_have_no_style() {
        assert!(color_spec(TokenType::Name).is_none());
        assert!(color_spec(TokenType::Whitespace).is_none());
        assert!(!color_spec(TokenType::Namespace).is_none());
        assert!(!color_spec(TokenType::KeywordType).is_none());
    }

    #[test]
    fn test_refined_categories_are_distinct() {
        let specs = [
            color_spec(TokenType::KeywordControl),
            color_spec(TokenType::KeywordDeclaration),
            color_spec(TokenType::KeywordConstant),
            color_spec(TokenType::KeywordType),
            color_spec(TokenType::Builtin),
            color_spec(TokenType::Namespace),
            color_spec(TokenType::NamespacedCall),
            color_spec(TokenType::SystemObject),
        ];
        for (i, a) in specs.iter().enumerate() {
            for b in &specs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_write_highlighted_without_color_is_source() {
        let mut buf = Buffer::no_color();
        write_highlighted(sample(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "BEGIN dbms_output.put_line;"
        );
    }

    #[test]
    fn test_write_highlighted_with_color_emits_escapes() {
        let mut buf = Buffer::ansi();
        write_highlighted(sample(), &mut buf).unwrap();
        let out = String::from_utf8(buf.into_inner()).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("dbms_output.put_line"));
    }

    #[test]
    fn test_write_token_dump() {
        let mut out = Vec::new();
        write_token_dump(sample(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "0\tKeyword.Declaration\t\"BEGIN\"");
        assert_eq!(lines[2], "6\tName.Function\t\"dbms_output.put_line\"");
    }
}
