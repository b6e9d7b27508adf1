use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::AmbientContext;

/// How a decomposed URL is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `field: value` line per component.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Global configuration loaded from `~/.config/urlinfo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlinfoConfig {
    /// Default output format for `urlinfo parse`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Fallback request context when no URL is given; environment variables
    /// and command-line flags override it.
    #[serde(default)]
    pub context: Option<AmbientContext>,
}

impl UrlinfoConfig {
    /// Context from the config file, or an empty one.
    pub fn base_context(&self) -> AmbientContext {
        self.context.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlinfo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlinfoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlinfoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlinfoConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlinfoConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = UrlinfoConfig::default();
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.context.is_none());
        assert_eq!(cfg.base_context(), AmbientContext::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlinfoConfig {
            format: OutputFormat::Json,
            context: Some(AmbientContext::new("/", "8080", "localhost", true)),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlinfoConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.format, cfg.format);
        assert_eq!(parsed.context, cfg.context);
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: UrlinfoConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.context.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            format = "json"

            [context]
            server_name = "intranet.local"
            server_port = "8443"
            https = true
        "#;
        let cfg: UrlinfoConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        let ctx = cfg.base_context();
        assert_eq!(ctx.server_name, "intranet.local");
        assert_eq!(ctx.server_port, "8443");
        assert_eq!(ctx.request_path, "");
        assert!(ctx.https);
    }

    #[test]
    fn config_toml_unknown_format_rejected() {
        assert!(toml::from_str::<UrlinfoConfig>("format = \"yaml\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "format = \"json\"").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }
}
