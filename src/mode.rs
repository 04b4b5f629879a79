use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::OracleSqlError;
use crate::tables::Tables;

/// How highlighted output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Source text with terminal colors.
    #[default]
    Terminal,
    /// One line per token: offset, category, text.
    Tokens,
}

impl FromStr for OutputFormat {
    type Err = OracleSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "tokens" => Ok(Self::Tokens),
            _ => Err(OracleSqlError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Tokens => f.write_str("tokens"),
        }
    }
}

/// Extra entries for the classification and prefix tables.
/// Added to the built-in lists, never replacing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub control: Vec<String>,
    pub declaration: Vec<String>,
    pub constant: Vec<String>,
    pub types: Vec<String>,
    pub builtin: Vec<String>,
    pub package_prefixes: Vec<String>,
    pub object_prefixes: Vec<String>,
}

impl TableConfig {
    pub fn is_empty(&self) -> bool {
        self.control.is_empty()
            && self.declaration.is_empty()
            && self.constant.is_empty()
            && self.types.is_empty()
            && self.builtin.is_empty()
            && self.package_prefixes.is_empty()
            && self.object_prefixes.is_empty()
    }
}

/// Mode holds all runtime configuration for oraclesql.
#[derive(Debug, Clone, Deserialize)]
pub struct Mode {
    #[serde(default)]
    pub format: OutputFormat,

    /// Glob patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub no_color: bool,

    #[serde(default)]
    pub force_color: bool,

    /// Number of threads for parallel processing (0 = all cores).
    #[serde(default)]
    pub threads: usize,

    #[serde(default)]
    pub single_process: bool,

    #[serde(default)]
    pub tables: TableConfig,
}

impl Mode {
    /// Build the classification tables for this run.
    pub fn build_tables(&self) -> Tables {
        Tables::with_config(&self.tables)
    }

    /// Whether color output is enabled.
    pub fn color(&self) -> bool {
        if self.force_color {
            return true;
        }
        if self.no_color {
            return false;
        }
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        true
    }

    /// PL/SQL and SQL file extensions to process.
    pub fn sql_extensions(&self) -> &[&str] {
        &[
            "sql", "pls", "plsql", "pks", "pkb", "pck", "fnc", "prc", "trg", "vw", "ddl",
        ]
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            exclude: Vec::new(),
            verbose: false,
            quiet: false,
            no_color: false,
            force_color: false,
            threads: 0,
            single_process: false,
            tables: TableConfig::default(),
        }
    }
}
