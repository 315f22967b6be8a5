//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PROJO_DEFAULTS__AUTHOR`, `PROJO_OUTPUT__NO_COLOR`, ...
//! 3. Config file (`--config`, `PROJO_CONFIG`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use projo_core::domain::{Archetype, DEFAULT_TOOLCHAIN_VERSION};

/// Every key accepted by `projo config get|set`.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.archetype",
    "defaults.author",
    "defaults.toolchain_version",
    "defaults.output_dir",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolchain_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            archetype: Some(Archetype::default().as_str().into()),
            author: None,
            toolchain_version: Some(DEFAULT_TOOLCHAIN_VERSION.into()),
            output_dir: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use [`Self::config_path`]). With `require_explicit`, an explicit
    /// path must exist; the default location is always optional.
    pub fn load(config_file: Option<&Path>, require_explicit: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), require_explicit),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Some(Environment::with_prefix("PROJO")))
    }

    /// Defaults overlaid with `path` only, ignoring the environment.
    ///
    /// Used by `projo config set` so environment overrides are never
    /// persisted into the file.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        Self::load_from(path, false, None)
    }

    /// The file `projo init` and `projo config set` write to.
    pub fn target_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    fn load_from(
        path: &Path,
        required: bool,
        environment: Option<Environment>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required));

        if let Some(env) = environment {
            builder = builder.add_source(env.prefix_separator("_").separator("__"));
        }

        let loaded: Self = builder
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")?;

        loaded.validate()?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.projo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "projo", "projo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".projo.toml"))
    }

    /// Serialize to the on-disk TOML form.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Look up a dotted key. `None` for unset optional values.
    pub fn get_value(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = match key {
            "defaults.archetype" => self.defaults.archetype.clone(),
            "defaults.author" => self.defaults.author.clone(),
            "defaults.toolchain_version" => self.defaults.toolchain_version.clone(),
            "defaults.output_dir" => self
                .defaults
                .output_dir
                .as_ref()
                .map(|p| p.display().to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            other => bail!(
                "Unknown configuration key '{other}' (known keys: {})",
                KNOWN_KEYS.join(", ")
            ),
        };
        Ok(value)
    }

    /// Set a dotted key, validating the value.
    pub fn set_value(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "defaults.archetype" => {
                let archetype: Archetype = value.parse()?;
                self.defaults.archetype = Some(archetype.as_str().into());
            }
            "defaults.author" => self.defaults.author = Some(value.into()),
            "defaults.toolchain_version" => {
                self.defaults.toolchain_version = Some(value.into());
            }
            "defaults.output_dir" => self.defaults.output_dir = Some(PathBuf::from(value)),
            "output.no_color" => {
                self.output.no_color = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a boolean (true/false)"))?;
            }
            "output.format" => {
                check_format(value)?;
                self.output.format = value.into();
            }
            other => bail!(
                "Unknown configuration key '{other}' (known keys: {})",
                KNOWN_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(tag) = &self.defaults.archetype {
            tag.parse::<Archetype>()
                .context("Invalid defaults.archetype")?;
        }
        check_format(&self.output.format)
    }
}

fn check_format(value: &str) -> anyhow::Result<()> {
    match value {
        "auto" | "human" | "plain" | "json" => Ok(()),
        other => bail!("Invalid output.format '{other}' (expected auto, human, plain or json)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_archetype_is_api() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.archetype.as_deref(), Some("api"));
        assert_eq!(cfg.defaults.toolchain_version.as_deref(), Some("1.24"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false, None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true, None).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\narchetype = \"cli\"\nauthor = \"Ada\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, None).unwrap();
        assert_eq!(cfg.defaults.archetype.as_deref(), Some("cli"));
        assert_eq!(cfg.defaults.author.as_deref(), Some("Ada"));
        assert_eq!(cfg.defaults.toolchain_version.as_deref(), Some("1.24"));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn unknown_archetype_in_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\narchetype = \"desktop\"\n").unwrap();
        assert!(AppConfig::load_from(&path, true, None).is_err());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");

        let mut cfg = AppConfig::default();
        cfg.set_value("defaults.author", "Grace").unwrap();
        cfg.set_value("defaults.archetype", "lib").unwrap();
        cfg.save(&path).unwrap();

        let loaded = AppConfig::load_from(&path, true, None).unwrap();
        assert_eq!(loaded.defaults.author.as_deref(), Some("Grace"));
        assert_eq!(loaded.defaults.archetype.as_deref(), Some("library"));
    }

    #[test]
    fn get_value_reports_unset_keys_as_none() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get_value("defaults.author").unwrap(), None);
        assert_eq!(
            cfg.get_value("output.no_color").unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.get_value("defaults.language").is_err());
        assert!(cfg.set_value("templates.path", "x").is_err());
    }

    #[test]
    fn set_value_validates_input() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set_value("defaults.archetype", "desktop").is_err());
        assert!(cfg.set_value("output.no_color", "maybe").is_err());
        assert!(cfg.set_value("output.format", "xml").is_err());
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
