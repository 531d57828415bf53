//! Tool configuration.
//!
//! [`ToolConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables, `CHAINFORGE_<KEY>` (nested keys use `__`,
//!    e.g. `CHAINFORGE_OUTPUT__NO_COLOR`)
//! 2. Config file: `--config FILE` (must exist) or the platform config
//!    directory's `config.toml` (optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use chainforge_core::domain::WalletCredentials;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "CHAINFORGE";

/// Persisted tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Anonymous installation id.
    pub client_id: String,
    /// Wallet used for Kotlin projects unless another is chosen interactively.
    pub default_wallet_path: PathBuf,
    pub default_wallet_password: String,
    pub latest_version: String,
    pub update_prompt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_token: Option<String>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl ToolConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is used if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(config_file, None)
    }

    /// [`Self::load`] with an explicit environment instead of the process one.
    fn load_from(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };
        debug!(file = ?config_file, "Loading configuration");

        let settings = Config::builder()
            .set_default("client_id", uuid::Uuid::new_v4().to_string())?
            .set_default(
                "default_wallet_path",
                Self::default_wallet_location().to_string_lossy().into_owned(),
            )?
            .set_default("default_wallet_password", "")?
            .set_default("latest_version", env!("CARGO_PKG_VERSION"))?
            .set_default("update_prompt", false)?
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.chainforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "chainforge", "chainforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".chainforge.toml"))
    }

    fn default_wallet_location() -> PathBuf {
        directories::ProjectDirs::from("io", "chainforge", "chainforge")
            .map(|d| d.data_dir().join("keystore"))
            .unwrap_or_else(|| PathBuf::from(".chainforge").join("keystore"))
    }

    pub fn default_wallet(&self) -> WalletCredentials {
        WalletCredentials::new(&self.default_wallet_path, &self.default_wallet_password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn explicit_file_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("absent.toml");
        assert!(ToolConfig::load_from(Some(&missing), no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "config.toml",
            r#"
client_id = "abc"
default_wallet_path = "/keys/w.json"
default_wallet_password = "pw"
latest_version = "9.9.9"
update_prompt = true
login_token = "token"

[output]
no_color = true
"#,
        );

        let cfg = ToolConfig::load_from(Some(&path), no_env()).unwrap();
        assert_eq!(cfg.client_id, "abc");
        assert_eq!(cfg.default_wallet_path, PathBuf::from("/keys/w.json"));
        assert_eq!(cfg.login_token.as_deref(), Some("token"));
        assert!(cfg.update_prompt);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.default_wallet(), WalletCredentials::new("/keys/w.json", "pw"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "config.toml", "default_wallet_password = \"x\"\n");

        let cfg = ToolConfig::load_from(Some(&path), no_env()).unwrap();
        assert_eq!(cfg.default_wallet_password, "x");
        assert!(uuid::Uuid::parse_str(&cfg.client_id).is_ok());
        assert_eq!(cfg.latest_version, env!("CARGO_PKG_VERSION"));
        assert!(cfg.login_token.is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "config.toml", "default_wallet_password = \"file\"\n");

        let mut env = config::Map::new();
        env.insert("CHAINFORGE_DEFAULT_WALLET_PASSWORD".into(), "env".into());
        env.insert("CHAINFORGE_OUTPUT__NO_COLOR".into(), "true".into());

        let cfg = ToolConfig::load_from(Some(&path), Some(env)).unwrap();
        assert_eq!(cfg.default_wallet_password, "env");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "config.toml", "update_prompt = \"sometimes\"\n");
        assert!(ToolConfig::load_from(Some(&path), no_env()).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!ToolConfig::config_path().as_os_str().is_empty());
    }
}
