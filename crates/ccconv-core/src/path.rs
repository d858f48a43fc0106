use crate::{Config, Error, Result};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "CCCONV_PATH";
pub const LOG_ROOT_ENV: &str = "CCCONV_LOG_ROOT";

/// Resolve the directory holding `config.toml`, in priority order:
/// 1. Explicit path (with tilde expansion)
/// 2. CCCONV_PATH environment variable (with tilde expansion)
/// 3. System config directory
/// 4. ~/.ccconv
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("ccconv"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".ccconv"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system config directory found"
            .to_string(),
    ))
}

/// Resolve the Claude projects directory, in priority order:
/// 1. Explicit path (`--log-root`)
/// 2. CCCONV_LOG_ROOT environment variable
/// 3. `log_root` from the config file
/// 4. ~/.claude/projects
pub fn resolve_log_root(explicit_path: Option<&str>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(LOG_ROOT_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(path) = config.log_root.as_deref() {
        return Ok(expand_tilde(path));
    }

    dirs::home_dir()
        .map(|home| home.join(".claude").join("projects"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }

    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
