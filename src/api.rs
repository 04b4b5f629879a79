use std::collections::HashSet;
use std::path::{Path, PathBuf};

use termcolor::{Buffer, WriteColor};

use crate::error::OracleSqlError;
use crate::lexer::{lex, Lexer};
use crate::mode::{Mode, OutputFormat};
use crate::refiner::{refine, Refiner};
use crate::report::{FileResult, Report};
use crate::style;
use crate::tables::Tables;

/// Lex and refine a source string lazily.
/// This is the core API function.
pub fn highlight<'a>(source: &'a str, tables: &'a Tables) -> Refiner<'a, Lexer<'a>> {
    refine(lex(source), tables)
}

/// Render a source string in the mode's output format.
pub fn render_string<W>(
    source: &str,
    mode: &Mode,
    tables: &Tables,
    out: &mut W,
) -> Result<usize, OracleSqlError>
where
    W: WriteColor + ?Sized,
{
    let mut count = 0;
    let tokens = highlight(source, tables).inspect(|_| count += 1);
    match mode.format {
        OutputFormat::Terminal => style::write_highlighted(tokens, out)?,
        OutputFormat::Tokens => style::write_token_dump(tokens, out)?,
    }
    Ok(count)
}

/// Highlight a collection of files, writing each rendering to `out` in
/// sorted path order.
pub fn run<W>(files: &[PathBuf], mode: &Mode, tables: &Tables, out: &mut W) -> Report
where
    W: WriteColor + ?Sized,
{
    let matching_paths = get_matching_paths(files, mode);
    let with_header = matching_paths.len() > 1;
    let mut report = Report::new();

    let rendered: Vec<(FileResult, Option<Buffer>)> =
        if mode.single_process || matching_paths.len() <= 1 {
            matching_paths
                .iter()
                .map(|path| render_file(path, mode, tables, out.supports_color()))
                .collect()
        } else {
            use rayon::prelude::*;

            let num_threads = if mode.threads > 0 {
                mode.threads
            } else {
                0 // rayon default: all available cores
            };

            match rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
            {
                Ok(pool) => {
                    let color = out.supports_color();
                    pool.install(|| {
                        matching_paths
                            .par_iter()
                            .map(|path| render_file(path, mode, tables, color))
                            .collect()
                    })
                }
                Err(e) => {
                    tracing::warn!("falling back to a single thread: {}", e);
                    matching_paths
                        .iter()
                        .map(|path| render_file(path, mode, tables, out.supports_color()))
                        .collect()
                }
            }
        };

    for path in files.iter().filter(|p| !p.exists()) {
        report.add(FileResult::error(
            path.clone(),
            "No such file or directory".to_string(),
        ));
    }

    for (mut result, buffer) in rendered {
        if let Some(buffer) = buffer {
            if let Err(e) = write_rendered(&result.path, &buffer, with_header, out) {
                result = FileResult::error(result.path, format!("Write error: {}", e));
            }
        }
        report.add(result);
    }

    report
}

/// Render a single file into an in-memory buffer.
fn render_file(path: &Path, mode: &Mode, tables: &Tables, color: bool) -> (FileResult, Option<Buffer>) {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return (
                FileResult::error(path.to_path_buf(), format!("Read error: {}", e)),
                None,
            );
        }
    };

    let mut buffer = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };

    match render_string(&source, mode, tables, &mut buffer) {
        Ok(tokens) => {
            tracing::debug!(path = %path.display(), tokens, "highlighted");
            (FileResult::highlighted(path.to_path_buf(), tokens), Some(buffer))
        }
        Err(e) => (FileResult::error(path.to_path_buf(), e.to_string()), None),
    }
}

fn write_rendered<W>(path: &Path, buffer: &Buffer, with_header: bool, out: &mut W) -> std::io::Result<()>
where
    W: WriteColor + ?Sized,
{
    if with_header {
        writeln!(out, "==> {} <==", path.display())?;
    }
    out.write_all(buffer.as_slice())?;
    out.flush()
}

/// Get all SQL file paths that match the given inputs.
pub fn get_matching_paths(paths: &[PathBuf], mode: &Mode) -> Vec<PathBuf> {
    let extensions = mode.sql_extensions();
    let mut result = HashSet::new();

    for path in paths {
        if path.is_file() {
            result.insert(path.clone());
        } else if path.is_dir() {
            collect_sql_files(path, extensions, &mode.exclude, &mut result);
        }
    }

    let mut sorted: Vec<PathBuf> = result.into_iter().collect();
    sorted.sort();
    sorted
}

/// Check if a file has a SQL extension.
fn is_sql_file(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Recursively collect SQL files from a directory.
fn collect_sql_files(
    dir: &Path,
    extensions: &[&str],
    exclude: &[String],
    result: &mut HashSet<PathBuf>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "cannot read directory: {}", e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Skip hidden directories and excluded patterns
        if name.starts_with('.') {
            continue;
        }
        if exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&name))
                .unwrap_or(false)
        }) {
            continue;
        }

        if path.is_dir() {
            collect_sql_files(&path, extensions, exclude, result);
        } else if is_sql_file(&path, extensions) {
            result.insert(path);
        }
    }
}
