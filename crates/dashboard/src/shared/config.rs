use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// Directory with `<entity>.json` fixture files. Empty means built-in data.
    #[serde(default)]
    pub fixtures_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    /// Reject unknown sort keys / categories instead of degrading silently
    #[serde(default)]
    pub strict_queries: bool,
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            strict_queries: false,
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
fixtures_dir = ""

[list]
strict_queries = false
search_debounce_ms = 300
"#;

/// Environment variable with an explicit config path
pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Path from `DASHBOARD_CONFIG`
/// 2. Next to the executable
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV, path);
        return load_config_from(Path::new(&path));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the fixtures directory, if configured
/// Resolves relative paths relative to the executable directory
pub fn get_fixtures_dir(config: &Config) -> Option<PathBuf> {
    let dir_str = config.data.fixtures_dir.trim();
    if dir_str.is_empty() {
        return None;
    }

    let dir = Path::new(dir_str);
    if dir.is_absolute() {
        return Some(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(dir));
        }
    }

    // Fallback: use relative to current directory
    Some(PathBuf::from(dir_str))
}
