//! learnledger configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured ledger path.
pub const LEDGER_ENV: &str = "LEARNLEDGER_LEDGER";

/// Top-level learnledger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Ledger CSV file.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
    /// Where `export` writes reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("user_progress.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./learnledger-reports")
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `learnledger.toml` in the current directory
/// 2. `~/.config/learnledger/config.toml`
///
/// `LEARNLEDGER_LEDGER` overrides `ledger_path` from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<LedgerConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("learnledger.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => LedgerConfig::default(),
    };

    if let Ok(ledger) = std::env::var(LEDGER_ENV) {
        if !ledger.is_empty() {
            config.ledger_path = PathBuf::from(ledger);
        }
    }

    Ok(config)
}

/// Parse a TOML config string and expand `${VAR}` references in paths.
pub fn parse_config(content: &str) -> Result<LedgerConfig> {
    let mut config: LedgerConfig = toml::from_str(content)?;
    config.ledger_path = resolve_path(&config.ledger_path);
    config.output_dir = resolve_path(&config.output_dir);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("learnledger"))
}

/// Starter config written by `learnledger init`.
pub const SAMPLE_CONFIG: &str = r#"# learnledger configuration

# CSV ledger holding one row per scored week
ledger_path = "user_progress.csv"

# Where `learnledger export` writes reports
output_dir = "./learnledger-reports"
"#;
