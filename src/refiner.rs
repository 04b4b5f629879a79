//! Token refinement pass.
//!
//! Takes the coarse token stream of a generic SQL lexer and re-tags names
//! against the Oracle [`Tables`]. The only positional pattern recognized is a
//! system package chain, `DBMS_OUTPUT.PUT_LINE`, which is merged into a single
//! [`TokenType::NamespacedCall`] token. Trivia between the parts of a chain is
//! folded into the merged text.
//!
//! An incomplete chain is never lost: the package name is emitted on its own
//! as [`TokenType::Namespace`] followed by whatever was buffered after it.

use std::collections::VecDeque;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::tables::{uppercase, Tables};
use crate::token::{Token, TokenType};

/// Progress through a `PACKAGE.MEMBER` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainState {
    #[default]
    None,
    SawPackageName,
    ExpectMember,
}

/// Tokens held back while a chain is open: the package name, trivia, the dot.
type ChainBuffer = SmallVec<[Token; 4]>;

/// Refine a coarse token stream lazily.
pub fn refine<I>(tokens: I, tables: &Tables) -> Refiner<'_, I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Refiner::new(tokens.into_iter(), tables)
}

/// Pull-based re-tagger. Owns its chain state, so one `Refiner` per document.
pub struct Refiner<'t, I> {
    tokens: I,
    tables: &'t Tables,
    state: ChainState,
    buffer: ChainBuffer,
    ready: VecDeque<Token>,
    exhausted: bool,
}

impl<'t, I> Refiner<'t, I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(tokens: I, tables: &'t Tables) -> Self {
        Self {
            tokens,
            tables,
            state: ChainState::None,
            buffer: ChainBuffer::new(),
            ready: VecDeque::new(),
            exhausted: false,
        }
    }

    pub fn state(&self) -> ChainState {
        self.state
    }

    fn step(&mut self, token: Token) {
        let token_type = token.token_type;
        match token_type {
            TokenType::Whitespace | TokenType::Text | TokenType::Comment => {
                if self.state == ChainState::None {
                    self.ready.push_back(token);
                } else {
                    self.buffer.push(token);
                }
            }
            TokenType::Name | TokenType::Builtin | TokenType::Keyword => self.step_name(token),
            TokenType::Punctuation if token.is_dot() => self.step_dot(token),
            TokenType::Punctuation
            | TokenType::QuotedName
            | TokenType::Operator
            | TokenType::Number
            | TokenType::String
            | TokenType::Error
            | TokenType::KeywordControl
            | TokenType::KeywordDeclaration
            | TokenType::KeywordConstant
            | TokenType::KeywordType
            | TokenType::Namespace
            | TokenType::SystemObject
            | TokenType::NamespacedCall => {
                self.flush();
                self.ready.push_back(token);
            }
        }
    }

    fn step_name(&mut self, token: Token) {
        match self.state {
            ChainState::ExpectMember => {
                self.complete_chain(token);
                return;
            }
            ChainState::SawPackageName => self.flush(),
            ChainState::None => {}
        }

        let upper = uppercase(&token.text);
        match self.tables.classify_upper(&upper) {
            Some(TokenType::Namespace) => {
                self.buffer.push(token.retagged(TokenType::Namespace));
                self.state = ChainState::SawPackageName;
            }
            Some(token_type) => self.ready.push_back(token.retagged(token_type)),
            None => self.ready.push_back(token),
        }
    }

    fn step_dot(&mut self, token: Token) {
        if self.state == ChainState::SawPackageName {
            self.buffer.push(token);
            self.state = ChainState::ExpectMember;
        } else {
            self.flush();
            self.ready.push_back(token);
        }
    }

    /// Merge the buffered `PACKAGE .` prefix with its member.
    fn complete_chain(&mut self, member: Token) {
        let spos = self.buffer.first().map_or(member.spos, |t| t.spos);
        let mut text = CompactString::default();
        for part in self.buffer.drain(..) {
            text.push_str(&part.text);
        }
        text.push_str(&member.text);
        tracing::trace!(spos, text = %text, "merged package chain");
        self.ready.push_back(Token {
            token_type: TokenType::NamespacedCall,
            text,
            spos,
        });
        self.state = ChainState::None;
    }

    /// Release buffered tokens one by one. The package name keeps its
    /// `Namespace` tag; everything else goes out as it came in.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            tracing::trace!(
                buffered = self.buffer.len(),
                state = ?self.state,
                "package chain broken"
            );
            self.ready.extend(self.buffer.drain(..));
        }
        self.state = ChainState::None;
    }
}

impl<I> Iterator for Refiner<'_, I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            if self.exhausted {
                return None;
            }
            match self.tokens.next() {
                Some(token) => self.step(token),
                None => {
                    self.exhausted = true;
                    self.flush();
                }
            }
        }
    }
}

impl<I> std::iter::FusedIterator for Refiner<'_, I> where I: Iterator<Item = Token> {}
