use std::collections::HashSet;
use std::sync::LazyLock;

use compact_str::CompactString;
use phf::Set;

use crate::keywords;
use crate::mode::TableConfig;
use crate::token::TokenType;

static DEFAULT_TABLES: LazyLock<Tables> = LazyLock::new(Tables::new);

/// The built-in tables, constructed on first use and shared process-wide.
pub fn default_tables() -> &'static Tables {
    &DEFAULT_TABLES
}

/// One word list: the static defaults plus extra words from configuration.
#[derive(Debug)]
struct WordTable {
    token_type: TokenType,
    words: &'static Set<&'static str>,
    extra: HashSet<CompactString>,
}

impl WordTable {
    fn new(token_type: TokenType, words: &'static Set<&'static str>) -> Self {
        Self {
            token_type,
            words,
            extra: HashSet::new(),
        }
    }

    fn contains(&self, upper: &str) -> bool {
        self.words.contains(upper) || self.extra.contains(upper)
    }
}

/// Classification and prefix tables.
///
/// Read-only once built. Lookups are case-insensitive; the word tables are
/// consulted in a fixed priority order (type, builtin, control, declaration,
/// constant), after the package and system-object prefix checks.
#[derive(Debug)]
pub struct Tables {
    package_prefixes: Vec<CompactString>,
    object_prefixes: Vec<CompactString>,
    words: [WordTable; 5],
}

impl Tables {
    pub fn new() -> Self {
        Self {
            package_prefixes: keywords::PACKAGE_PREFIXES
                .iter()
                .map(|p| CompactString::from(*p))
                .collect(),
            object_prefixes: keywords::OBJECT_PREFIXES
                .iter()
                .map(|p| CompactString::from(*p))
                .collect(),
            words: [
                WordTable::new(TokenType::KeywordType, &keywords::TYPE),
                WordTable::new(TokenType::Builtin, &keywords::BUILTIN),
                WordTable::new(TokenType::KeywordControl, &keywords::CONTROL),
                WordTable::new(TokenType::KeywordDeclaration, &keywords::DECLARATION),
                WordTable::new(TokenType::KeywordConstant, &keywords::CONSTANT),
            ],
        }
    }

    /// Default tables extended with the entries of `config`.
    /// Extra entries are added, never replace the defaults.
    pub fn with_config(config: &TableConfig) -> Self {
        let mut tables = Self::new();
        tables.extend_prefixes(&config.package_prefixes, PrefixKind::Package);
        tables.extend_prefixes(&config.object_prefixes, PrefixKind::Object);
        for (token_type, extra) in [
            (TokenType::KeywordType, &config.types),
            (TokenType::Builtin, &config.builtin),
            (TokenType::KeywordControl, &config.control),
            (TokenType::KeywordDeclaration, &config.declaration),
            (TokenType::KeywordConstant, &config.constant),
        ] {
            if let Some(table) = tables.words.iter_mut().find(|t| t.token_type == token_type) {
                table.extra.extend(extra.iter().map(|w| uppercase(w)));
            }
        }
        tracing::debug!(
            package_prefixes = tables.package_prefixes.len(),
            object_prefixes = tables.object_prefixes.len(),
            extra_words = tables.words.iter().map(|t| t.extra.len()).sum::<usize>(),
            "built classification tables"
        );
        tables
    }

    fn extend_prefixes(&mut self, extra: &[String], kind: PrefixKind) {
        let target = match kind {
            PrefixKind::Package => &mut self.package_prefixes,
            PrefixKind::Object => &mut self.object_prefixes,
        };
        for prefix in extra {
            let prefix = uppercase(prefix);
            if !prefix.is_empty() && !target.contains(&prefix) {
                target.push(prefix);
            }
        }
    }

    /// Whether the (already uppercased) word begins with a system package prefix.
    pub fn is_package_name(&self, upper: &str) -> bool {
        self.package_prefixes.iter().any(|p| upper.starts_with(p.as_str()))
    }

    /// Whether the (already uppercased) word begins with a system object prefix.
    pub fn is_system_object(&self, upper: &str) -> bool {
        self.object_prefixes.iter().any(|p| upper.starts_with(p.as_str()))
    }

    /// Word table lookup only, in priority order. Expects uppercase input.
    pub fn lookup(&self, upper: &str) -> Option<TokenType> {
        self.words
            .iter()
            .find(|t| t.contains(upper))
            .map(|t| t.token_type)
    }

    /// Fine category for a single word, or `None` for a plain identifier.
    /// Prefix checks win over the word tables.
    pub fn classify(&self, word: &str) -> Option<TokenType> {
        self.classify_upper(&uppercase(word))
    }

    pub(crate) fn classify_upper(&self, upper: &str) -> Option<TokenType> {
        if self.is_package_name(upper) {
            Some(TokenType::Namespace)
        } else if self.is_system_object(upper) {
            Some(TokenType::SystemObject)
        } else {
            self.lookup(upper)
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum PrefixKind {
    Package,
    Object,
}

/// ASCII uppercase without a heap allocation for short words.
pub(crate) fn uppercase(word: &str) -> CompactString {
    word.chars().map(|c| c.to_ascii_uppercase()).collect()
}
