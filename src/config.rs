use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{OracleSqlError, Result};
use crate::mode::{Mode, TableConfig};

pub const CONFIG_FILE_NAME: &str = "oraclesql.toml";

/// Load oraclesql configuration.
///
/// An explicit `config_path` must exist. Otherwise the parent directories of
/// the given files are searched for `oraclesql.toml`, then the user config
/// directory (`<config_dir>/oraclesql/oraclesql.toml`). No file means defaults.
pub fn load_config(files: &[PathBuf], config_path: Option<&Path>) -> Result<Mode> {
    let mut mode = Mode::default();

    let config_file = match config_path {
        Some(path) => {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                return Err(OracleSqlError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }
        None => find_config_file(files).or_else(user_config_file),
    };

    if let Some(path) = config_file {
        tracing::debug!(path = %path.display(), "loading config");
        let raw = load_config_from_path(&path)?;
        apply_config(&mut mode, &raw)?;
    }

    Ok(mode)
}

/// Search for an oraclesql.toml in the common parent directories of the given files.
fn find_config_file(files: &[PathBuf]) -> Option<PathBuf> {
    get_common_parents(files)
        .into_iter()
        .map(|parent| parent.join(CONFIG_FILE_NAME))
        .find(|config| config.is_file())
}

fn user_config_file() -> Option<PathBuf> {
    let config = dirs::config_dir()?.join("oraclesql").join(CONFIG_FILE_NAME);
    config.is_file().then_some(config)
}

/// Get the common parent directories of the given file paths, ordered
/// from most specific to least specific.
fn get_common_parents(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut parents = Vec::new();

    for file in files {
        let parent = if file.is_dir() {
            file.clone()
        } else {
            file.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        };

        // Walk up to root
        let mut current = Some(parent.as_path());
        while let Some(dir) = current {
            let dir_buf = dir.to_path_buf();
            if !parents.contains(&dir_buf) {
                parents.push(dir_buf);
            }
            current = dir.parent();
        }
    }

    parents
}

/// Load and parse a TOML config file into lowercased top-level keys.
fn load_config_from_path(path: &Path) -> Result<HashMap<String, toml::Value>> {
    let content = std::fs::read_to_string(path)?;
    let parsed: toml::Table = content
        .parse()
        .map_err(|e| OracleSqlError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(parsed
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect())
}

/// Apply configuration values to a Mode.
fn apply_config(mode: &mut Mode, config: &HashMap<String, toml::Value>) -> Result<()> {
    // Validate no unknown keys
    let known_keys = ["exclude", "format", "tables"];
    for key in config.keys() {
        if !known_keys.contains(&key.as_str()) {
            return Err(OracleSqlError::Config(format!(
                "Unknown config option: {}",
                key
            )));
        }
    }

    if let Some(value) = config.get("exclude") {
        mode.exclude = string_array("exclude", value)?;
    }

    if let Some(value) = config.get("format") {
        let format = value
            .as_str()
            .ok_or_else(|| OracleSqlError::Config("format must be a string".to_string()))?;
        mode.format = format.parse()?;
    }

    if let Some(value) = config.get("tables") {
        let table = value
            .as_table()
            .ok_or_else(|| OracleSqlError::Config("tables must be a table".to_string()))?;
        mode.tables = table_config(table)?;
    }

    Ok(())
}

fn table_config(table: &toml::Table) -> Result<TableConfig> {
    let mut config = TableConfig::default();
    for (key, value) in table {
        let target = match key.to_lowercase().as_str() {
            "control" => &mut config.control,
            "declaration" => &mut config.declaration,
            "constant" => &mut config.constant,
            "types" => &mut config.types,
            "builtin" => &mut config.builtin,
            "package_prefixes" => &mut config.package_prefixes,
            "object_prefixes" => &mut config.object_prefixes,
            _ => {
                return Err(OracleSqlError::Config(format!(
                    "Unknown tables option: {}",
                    key
                )))
            }
        };
        *target = string_array(key, value)?;
    }
    Ok(config)
}

fn string_array(key: &str, value: &toml::Value) -> Result<Vec<String>> {
    let invalid = || OracleSqlError::Config(format!("{} must be an array of strings", key));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(String::from).ok_or_else(invalid))
        .collect()
}
