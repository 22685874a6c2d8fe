//! Configuration discovery and loading

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::ServerSet;
use crate::error::{CosmoError, CosmoResult};

use super::types::CosmoConfig;

pub const CONFIG_FILE_NAME: &str = "cosmo.toml";
pub const CONFIG_ENV_VAR: &str = "COSMO_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A validated server set together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub servers: ServerSet,
    pub warnings: Vec<ConfigWarning>,
}

/// Find the configuration file to use.
///
/// An explicit path (flag or `COSMO_CONFIG`) must exist; it never falls back
/// to the implicit locations.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> CosmoResult<PathBuf> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    discover_from(explicit, env_path.as_deref(), cwd, dirs_config_dir().as_deref())
}

pub(crate) fn discover_from(
    explicit: Option<&Path>,
    env_path: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> CosmoResult<PathBuf> {
    if let Some(path) = explicit.or(env_path) {
        let path = cwd.join(path);
        if path.is_file() {
            return Ok(path);
        }
        return Err(CosmoError::ConfigNotFound {
            searched: vec![path],
        });
    }

    let mut searched = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(dir) = user_config_dir {
        searched.push(dir.join("cosmo").join(CONFIG_FILE_NAME));
    }

    match searched.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(CosmoError::ConfigNotFound { searched }),
    }
}

/// Discover, read, parse and validate the configuration.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> CosmoResult<LoadedConfig> {
    let path = discover(explicit, cwd)?;
    tracing::debug!(path = %path.display(), "loading configuration");

    let content = fs::read_to_string(&path)?;
    let loaded = load_str(&content, &path)?;

    tracing::info!(
        path = %loaded.path.display(),
        servers = loaded.servers.len(),
        warnings = loaded.warnings.len(),
        "configuration loaded"
    );
    Ok(loaded)
}

/// Parse and validate configuration text. `path` is used for messages only.
pub fn load_str(content: &str, path: &Path) -> CosmoResult<LoadedConfig> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: CosmoConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CosmoError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let servers = config
        .into_server_set()
        .map_err(|source| CosmoError::Validation {
            file: path.to_path_buf(),
            source,
        })?;

    // Repeated unknown keys point at successive occurrences.
    let mut last_line: HashMap<String, usize> = HashMap::new();
    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            let after = last_line.get(&key).copied().unwrap_or(0);
            let line = find_line_number(content, &key, after);
            if let Some(line) = line {
                last_line.insert(key.clone(), line);
            }
            ConfigWarning {
                line,
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        servers,
        warnings,
    })
}

/// XDG config directory, falling back to the platform default.
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-indexed line of the first `key = ..` assignment after line `after`.
/// Bare, basic-quoted and literal-quoted keys all match.
fn find_line_number(content: &str, key: &str, after: usize) -> Option<usize> {
    let quoted = [format!("\"{}\"", key), format!("'{}'", key)];
    let assigns = |line: &str| {
        let line = line.trim_start();
        std::iter::once(key)
            .chain(quoted.iter().map(String::as_str))
            .filter_map(|form| line.strip_prefix(form))
            .any(|rest| rest.trim_start().starts_with('='))
    };

    content
        .lines()
        .enumerate()
        .skip(after)
        .find(|(_, line)| assigns(line))
        .map(|(i, _)| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["servers", "name", "host", "tasks", "local", "remote"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance counted in chars, using a single rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
