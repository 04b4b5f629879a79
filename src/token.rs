use std::fmt;

use compact_str::CompactString;

/// Position in source string (byte offset).
pub type Pos = usize;

/// Every token category the crate knows about.
///
/// The first group is what the base lexer produces (coarse categories). The
/// second group only ever comes out of the [`Refiner`](crate::refiner::Refiner).
/// `Builtin` is shared: the lexer uses it for generic SQL type names and the
/// refiner for Oracle builtin functions and pseudo-columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Whitespace,
    Text,
    Comment,
    Keyword,
    Name,
    QuotedName,
    Builtin,
    Punctuation,
    Operator,
    Number,
    String,
    Error,

    KeywordControl,
    KeywordDeclaration,
    KeywordConstant,
    KeywordType,
    /// Name starting with a system package prefix (`DBMS_OUTPUT`).
    Namespace,
    /// Name starting with a data dictionary prefix (`V$SESSION`, `DBA_USERS`).
    SystemObject,
    /// A merged `PACKAGE.MEMBER` chain (`DBMS_OUTPUT.PUT_LINE`).
    NamespacedCall,
}

impl TokenType {
    /// Tokens that carry no syntax of their own.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Text | Self::Comment)
    }

    /// Tokens the refiner is allowed to reclassify.
    pub fn is_name_like(self) -> bool {
        matches!(self, Self::Name | Self::Builtin | Self::Keyword)
    }

    /// Categories only produced by the refiner.
    pub fn is_refined(self) -> bool {
        matches!(
            self,
            Self::KeywordControl
                | Self::KeywordDeclaration
                | Self::KeywordConstant
                | Self::KeywordType
                | Self::Namespace
                | Self::SystemObject
                | Self::NamespacedCall
        )
    }

    /// Dotted name in the style of highlighter token hierarchies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whitespace => "Text.Whitespace",
            Self::Text => "Text",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
            Self::Name => "Name",
            Self::QuotedName => "Name.Quoted",
            Self::Builtin => "Name.Builtin",
            Self::Punctuation => "Punctuation",
            Self::Operator => "Operator",
            Self::Number => "Literal.Number",
            Self::String => "Literal.String",
            Self::Error => "Error",
            Self::KeywordControl => "Keyword.Control",
            Self::KeywordDeclaration => "Keyword.Declaration",
            Self::KeywordConstant => "Keyword.Constant",
            Self::KeywordType => "Keyword.Type",
            Self::Namespace => "Name.Namespace",
            Self::SystemObject => "Name.SystemObject",
            Self::NamespacedCall => "Name.Function",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable token: category, literal text, start offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub text: CompactString,
    pub spos: Pos,
}

impl Token {
    pub fn new(token_type: TokenType, text: &str, spos: Pos) -> Self {
        Self {
            token_type,
            text: CompactString::from(text),
            spos,
        }
    }

    /// End offset (exclusive).
    pub fn epos(&self) -> Pos {
        self.spos + self.text.len()
    }

    /// Same text and position under a different category.
    pub fn retagged(self, token_type: TokenType) -> Self {
        Self { token_type, ..self }
    }

    pub fn is_dot(&self) -> bool {
        self.token_type == TokenType::Punctuation && self.text == "."
    }
}
