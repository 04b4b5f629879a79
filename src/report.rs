use std::path::PathBuf;

/// Status of highlighting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// File was read and rendered.
    Highlighted,
    /// An error occurred while processing the file.
    Error,
}

/// Result of highlighting a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Number of refined tokens emitted.
    pub tokens: usize,
    pub error: Option<String>,
}

impl FileResult {
    pub fn highlighted(path: PathBuf, tokens: usize) -> Self {
        Self {
            path,
            status: FileStatus::Highlighted,
            tokens,
            error: None,
        }
    }

    pub fn error(path: PathBuf, error: String) -> Self {
        Self {
            path,
            status: FileStatus::Error,
            tokens: 0,
            error: Some(error),
        }
    }
}

/// Aggregated report of a run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn highlighted(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == FileStatus::Highlighted)
            .count()
    }

    pub fn errors(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == FileStatus::Error)
            .count()
    }

    pub fn tokens(&self) -> usize {
        self.results.iter().map(|r| r.tokens).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} file(s) highlighted", self.highlighted())];
        if self.errors() > 0 {
            parts.push(format!("{} error(s)", self.errors()));
        }
        parts.join(", ")
    }

    /// Print error details.
    pub fn print_errors(&self) {
        for result in &self.results {
            if let Some(ref error) = result.error {
                eprintln!("error: {}: {}", result.path.display(), error);
            }
        }
    }
}
