use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub attack: AttackConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AttackConfig {
    /// Ceiling for brute-force candidate length; the search space grows as
    /// 62^n, so requests above this are clamped rather than honored
    pub max_brute_length: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
    pub progress_enabled: bool,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self { max_brute_length: 8 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
            progress_enabled: true,
        }
    }
}

/// Configuration manager handling XDG-compliant paths and layered loading
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    #[allow(dead_code)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("passattack/config.toml");
        }

        #[cfg(target_os = "windows")]
        {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("passattack\\config.toml")
        }

        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config/passattack/config.toml")
        }
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        figment = figment.merge(Env::prefixed("PASSATTACK_").split("__"));

        figment.extract().context("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_file_exists() {
        let manager = ConfigManager::with_path(PathBuf::from("/no/such/config.toml"));
        let config = manager.load().unwrap();

        assert_eq!(config.attack.max_brute_length, 8);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.color_enabled);
        assert!(config.output.progress_enabled);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        use std::io::Write;
        writeln!(file, "[attack]\nmax_brute_length = 5").unwrap();
        file.flush().unwrap();

        let manager = ConfigManager::with_path(file.path().to_path_buf());
        let config = manager.load().unwrap();

        assert_eq!(config.attack.max_brute_length, 5);
        // untouched sections keep defaults
        assert_eq!(config.output.default_format, "text");
    }
}
