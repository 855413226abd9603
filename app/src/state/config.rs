//! Configuration loading and persistence.
//!
//! Handles the TOML config file (~/.config/ballflight/config.toml) with
//! `[webserver]`, `[shot]` and `[model]` sections.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::Context;
use ballflight::FlightModel;

pub use ballflight::BallflightConfig;

// ---------------------------------------------------------------------------
// Persistence I/O
// ---------------------------------------------------------------------------

/// Returns `~/.config/ballflight/config.toml`.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ballflight");
    dir.join("config.toml")
}

/// Load persisted config from disk. If the file does not exist, creates it
/// with all-defaults and returns that. A file that fails to parse is left
/// untouched and defaults are used for this run.
pub fn load(path: &Path) -> BallflightConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<BallflightConfig>(&contents) {
            Ok(mut config) => {
                tracing::info!("loaded config from {}", path.display());
                if let Err(e) = config.model.validate() {
                    tracing::warn!(
                        "ignoring [model] in {}: {e}; using built-in flight model",
                        path.display()
                    );
                    config.model = FlightModel::default();
                }
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                BallflightConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let defaults = BallflightConfig::default();
            tracing::info!("no config file found, creating {}", path.display());
            save_to(path, &defaults);
            defaults
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            BallflightConfig::default()
        }
    }
}

/// Persist `config` as pretty TOML, creating the config directory on first
/// run. A failed write is logged and the in-memory config stays in use.
pub fn save_to(path: &Path, config: &BallflightConfig) {
    if let Err(e) = write_toml(path, config) {
        tracing::warn!("config not saved: {e:#}");
    }
}

fn write_toml(path: &Path, config: &BallflightConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("encoding config as TOML")?;
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Cached config
// ---------------------------------------------------------------------------

/// Cached configuration backed by a TOML file.
///
/// Reads are cheap (RwLock read guard + clone). `reload` re-reads the file
/// so a running server picks up edits to `[model]` and `[shot]`.
pub struct SystemConfig {
    path: PathBuf,
    inner: RwLock<BallflightConfig>,
}

impl SystemConfig {
    /// Load config from disk (or create defaults) and cache it.
    pub fn new(path: PathBuf) -> Self {
        let config = load(&path);
        Self {
            path,
            inner: RwLock::new(config),
        }
    }

    /// Clone the current cached config.
    pub fn snapshot(&self) -> BallflightConfig {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file, replacing the cached copy.
    pub fn reload(&self) {
        let config = load(&self.path);
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballflight::UnitSystem;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load(&path);
        assert_eq!(config, BallflightConfig::default());
        assert!(path.exists());
        assert_eq!(load(&path), config);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_units = \"metric\"\n\n[shot]\nswing_speed_mph = 95.0\n\n[model]\nmagnus_coefficient = 0.0005\n",
        )
        .unwrap();
        let config = load(&path);
        assert_eq!(config.default_units, UnitSystem::Metric);
        assert_eq!(config.shot.swing_speed_mph, 95.0);
        assert_eq!(config.shot.launch_deg, 19.0);
        assert_eq!(config.model.magnus_coefficient, 0.0005);
        assert_eq!(config.model.time_step, 0.002);
        assert_eq!(config.webserver.bind, "127.0.0.1:3030");
    }

    #[test]
    fn unparsable_file_falls_back_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_units = [").unwrap();
        assert_eq!(load(&path), BallflightConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "default_units = [");
    }

    #[test]
    fn unrunnable_model_override_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        for body in [
            "[model]\ntime_step = 1e-12\n",
            "[model]\ntime_step = nan\n",
            "[model]\ngravity = inf\n",
            "[model]\ntime_step = 0.0\n",
        ] {
            let path = dir.path().join("config.toml");
            std::fs::write(&path, format!("default_units = \"metric\"\n\n{body}")).unwrap();
            let config = load(&path);
            assert_eq!(config.model, FlightModel::default(), "{body}");
            // the rest of the file still applies
            assert_eq!(config.default_units, UnitSystem::Metric);
        }
    }

    #[test]
    fn reload_picks_up_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let system = SystemConfig::new(path.clone());
        assert_eq!(system.snapshot().webserver.bind, "127.0.0.1:3030");

        let mut edited = system.snapshot();
        edited.webserver.bind = "0.0.0.0:4040".into();
        save_to(&path, &edited);
        system.reload();
        assert_eq!(system.snapshot().webserver.bind, "0.0.0.0:4040");
    }
}
