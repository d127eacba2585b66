use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::JsonFileHistory;

/// Global configuration loaded from `~/.config/utm/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtmConfig {
    /// History file; defaults to `~/.local/share/utm/history.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,
    /// Directory for CSV exports; defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Color link previews in terminal output.
    pub color: bool,
}

impl Default for UtmConfig {
    fn default() -> Self {
        Self {
            history_path: None,
            export_dir: None,
            color: true,
        }
    }
}

impl UtmConfig {
    /// History file from config, or the XDG default.
    pub fn resolved_history_path(&self) -> Result<PathBuf> {
        match &self.history_path {
            Some(p) => Ok(p.clone()),
            None => JsonFileHistory::default_path(),
        }
    }

    /// Export directory from config, or the current directory.
    pub fn resolved_export_dir(&self) -> Result<PathBuf> {
        match &self.export_dir {
            Some(p) => Ok(p.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("utm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UtmConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UtmConfig> {
    if !path.exists() {
        let default_cfg = UtmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UtmConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UtmConfig::default();
        assert!(cfg.history_path.is_none());
        assert!(cfg.export_dir.is_none());
        assert!(cfg.color);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UtmConfig {
            history_path: Some(PathBuf::from("/tmp/h.json")),
            export_dir: Some(PathBuf::from("/tmp/out")),
            color: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UtmConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: UtmConfig = toml::from_str("color = false").unwrap();
        assert!(!cfg.color);
        assert!(cfg.history_path.is_none());

        let cfg: UtmConfig = toml::from_str(r#"export_dir = "/srv/exports""#).unwrap();
        assert!(cfg.color);
        assert_eq!(cfg.export_dir.as_deref(), Some(Path::new("/srv/exports")));
    }

    #[test]
    fn history_path_override_wins() {
        let cfg = UtmConfig {
            history_path: Some(PathBuf::from("/data/links.json")),
            ..UtmConfig::default()
        };
        assert_eq!(
            cfg.resolved_history_path().unwrap(),
            PathBuf::from("/data/links.json")
        );
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utm").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, UtmConfig::default());
        assert!(path.exists());

        fs::write(&path, "color = false\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(!loaded.color);
    }

    #[test]
    fn invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = \"yes\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
