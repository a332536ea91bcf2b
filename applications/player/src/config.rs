/// Player configuration
use crate::error::{PlayerAppError, Result};
use mood_core::Catalog;
use mood_detect::DetectorConfig;
use mood_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "moodtune.toml";

/// Prefix for environment overrides, e.g. `MOODTUNE_PLAYER__INITIAL_VOLUME`
pub const ENV_PREFIX: &str = "MOODTUNE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub detector: DetectorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON catalog to load instead of the bundled one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `moodtune.toml` in the
    /// working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// [`AppConfig::load`] with the environment replaced by `env`
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        // Override with environment variables (prefixed with MOODTUNE_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| PlayerAppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| PlayerAppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.player.validate()?;

        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                return Err(PlayerAppError::Config(format!(
                    "Catalog not found at {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Catalog named by the config, or the bundled one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = AppConfig::load_with_env(Some(&missing), no_env());
        assert!(matches!(result, Err(PlayerAppError::Config(_))));
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.player.initial_volume, 0.8);
        assert!(!config.player.start_muted);
        assert_eq!(config.detector.latency_ms, 2000);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[player]\ninitial_volume = 0.5\nstart_muted = true\n\n[detector]\nlatency_ms = 10"
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.player.initial_volume, 0.5);
        assert!(config.player.start_muted);
        assert_eq!(config.detector.latency_ms, 10);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[player]\ninitial_volume = 0.5").unwrap();

        let mut env = config::Map::new();
        env.insert(
            "MOODTUNE_PLAYER__INITIAL_VOLUME".to_string(),
            "0.25".to_string(),
        );
        env.insert("MOODTUNE_DETECTOR__LATENCY_MS".to_string(), "0".to_string());

        let config = AppConfig::load_with_env(Some(file.path()), Some(env)).unwrap();
        assert_eq!(config.player.initial_volume, 0.25);
        assert_eq!(config.detector.latency_ms, 0);
    }

    #[test]
    fn validate_rejects_out_of_range_volume() {
        let mut config = AppConfig::default();
        config.player.initial_volume = 1.5;
        assert!(matches!(config.validate(), Err(PlayerAppError::Config(_))));

        config.player.initial_volume = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_catalog() {
        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("/nonexistent/catalog.json"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn bundled_catalog_when_no_path() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }
}
