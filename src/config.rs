use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::tui::ThemeVariant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Durations of the simulated processing, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Whole loading screen sequence, split evenly across its messages
    pub loading_total_ms: u64,
    /// Pause between the last loading message and completion
    pub loading_done_delay_ms: u64,
    /// Per-message interval of the offer screen's own loading sequence
    pub offer_step_ms: u64,
    pub spinner_frame_ms: u64,
    pub transition_frame_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_total_ms: 15_000,
            loading_done_delay_ms: 600,
            offer_step_ms: 1_200,
            spinner_frame_ms: 80,
            transition_frame_ms: 40,
        }
    }
}

impl Timings {
    /// Divide every duration by `divisor` (demo mode)
    pub fn scaled_down(&self, divisor: u64) -> Self {
        let divisor = divisor.max(1);
        Self {
            loading_total_ms: self.loading_total_ms / divisor,
            loading_done_delay_ms: self.loading_done_delay_ms / divisor,
            offer_step_ms: self.offer_step_ms / divisor,
            spinner_frame_ms: self.spinner_frame_ms,
            transition_frame_ms: self.transition_frame_ms,
        }
    }

    /// Time each loading message stays on screen
    pub fn loading_step(&self, message_count: usize) -> Duration {
        Duration::from_millis(self.loading_total_ms / message_count.max(1) as u64)
    }

    pub fn loading_done_delay(&self) -> Duration {
        Duration::from_millis(self.loading_done_delay_ms)
    }

    pub fn offer_step(&self) -> Duration {
        Duration::from_millis(self.offer_step_ms)
    }

    pub fn spinner_frame(&self) -> Duration {
        Duration::from_millis(self.spinner_frame_ms)
    }

    pub fn transition_frame(&self) -> Duration {
        Duration::from_millis(self.transition_frame_ms)
    }

    /// Number of animation frames covering `total_ms`
    pub fn transition_frames(&self, total_ms: u64) -> u16 {
        if self.transition_frame_ms == 0 {
            return 0;
        }
        total_ms.div_ceil(self.transition_frame_ms).min(u16::MAX as u64) as u16
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemeVariant,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("loan-wizard")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".loan-wizard")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timings.loading_total_ms, 15_000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timings]\noffer_step_ms = 500\n\n[ui]\ntheme = \"latte\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.timings.offer_step_ms, 500);
        assert_eq!(config.timings.loading_done_delay_ms, 600);
        assert_eq!(config.ui.theme, ThemeVariant::Latte);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timings\nloading_total_ms = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_timing_helpers() {
        let timings = Timings::default();
        assert_eq!(timings.loading_step(3), Duration::from_secs(5));
        assert_eq!(timings.transition_frames(300), 8);
        assert_eq!(timings.transition_frames(400), 10);

        let fast = timings.scaled_down(10);
        assert_eq!(fast.loading_total_ms, 1_500);
        assert_eq!(fast.offer_step_ms, 120);
        assert_eq!(fast.spinner_frame_ms, 80);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default();
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
