use thiserror::Error;

/// User-facing errors. Refinement itself never fails; these come from
/// configuration and file handling around it.
#[derive(Error, Debug)]
pub enum OracleSqlError {
    #[error("oraclesql config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OracleSqlError>;
