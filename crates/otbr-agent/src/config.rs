//! Agent configuration – reads `/etc/otbr/agent.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use otbr_types::{CoprocessorKind, LogLevel};

/// Agent configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Mesh network interface name.
    #[serde(default = "default_interface_name")]
    pub interface_name: String,

    /// Infrastructure interface the border router bridges to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backbone_interface: Option<String>,

    /// Radio URLs in priority order.
    #[serde(default)]
    pub radio_urls: Vec<String>,

    /// Host logging severity; the stack's level is derived from it.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default = "default_auto_attach")]
    pub auto_attach: bool,

    /// Kind of co-processor wired to the radio URLs.
    #[serde(default = "default_coprocessor")]
    pub coprocessor: CoprocessorKind,
}

fn default_interface_name() -> String {
    "wpan0".to_string()
}
fn default_log_level() -> LogLevel {
    LogLevel::Info
}
fn default_auto_attach() -> bool {
    true
}
fn default_coprocessor() -> CoprocessorKind {
    CoprocessorKind::Rcp
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface_name: default_interface_name(),
            backbone_interface: None,
            radio_urls: Vec::new(),
            log_level: default_log_level(),
            dry_run: false,
            auto_attach: default_auto_attach(),
            coprocessor: default_coprocessor(),
        }
    }
}

/// Default location of the agent config file.
pub fn config_path() -> PathBuf {
    PathBuf::from("/etc/otbr/agent.toml")
}

/// Load the config from `path`, falling back to defaults when the file does
/// not exist, then apply `OTBR_*` environment overrides.
pub fn load(path: &Path) -> Result<Config, String> {
    let mut cfg = load_file(path)?.unwrap_or_default();
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Parse the config file at `path`.  Returns `None` if it does not exist.
pub(crate) fn load_file(path: &Path) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let cfg: Config = toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    Ok(Some(cfg))
}

/// Apply `OTBR_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `OTBR_INTERFACE` | `interface_name` |
/// | `OTBR_BACKBONE_INTERFACE` | `backbone_interface` |
/// | `OTBR_RADIO_URLS` | `radio_urls` (comma separated) |
/// | `OTBR_LOG_LEVEL` | `log_level` (name or 0-7) |
/// | `OTBR_COPROCESSOR` | `coprocessor` |
///
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("OTBR_INTERFACE") {
        cfg.interface_name = v;
    }
    if let Ok(v) = std::env::var("OTBR_BACKBONE_INTERFACE") {
        cfg.backbone_interface = Some(v).filter(|s| !s.is_empty());
    }
    if let Ok(v) = std::env::var("OTBR_RADIO_URLS") {
        cfg.radio_urls = split_urls(&v);
    }
    if let Ok(v) = std::env::var("OTBR_LOG_LEVEL")
        && let Ok(level) = v.parse::<LogLevel>() {
            cfg.log_level = level;
        }
    if let Ok(v) = std::env::var("OTBR_COPROCESSOR")
        && let Ok(kind) = v.parse::<CoprocessorKind>() {
            cfg.coprocessor = kind;
        }
}

fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
