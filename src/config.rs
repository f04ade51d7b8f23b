//! User configuration — carousel options and persistence.
//!
//! Options are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/carousel-tui/config` (default
//! `~/.config/carousel-tui/config`).  Loading never fails: malformed
//! lines and unknown keys are skipped, missing files yield defaults.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Autoplay advance interval in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Smooth-scroll damping per frame, clamped to 0.05–0.95.
    pub scroll_speed: f64,
    /// Show the per-slide dot indicators.
    pub show_dots: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
            scroll_speed: 0.35,
            show_dots: true,
        }
    }
}

impl AppConfig {
    /// Load from the config file, falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::default();
        let Some(path) = Self::config_path() else {
            return config;
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return config;
        };
        for line in contents.lines() {
            config.apply_line(line);
        }
        config
    }

    /// Best-effort save; failures are logged, never fatal.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_file_string())
    }

    fn config_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("carousel-tui").join("config"))
    }

    /// Apply one `key = value` line.  Comments and unparseable lines
    /// are ignored so old or hand-edited files keep working.
    fn apply_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        let (key, value) = (key.trim(), value.trim());
        match key {
            "autoplay_interval_ms" => {
                if let Ok(ms) = value.parse::<u64>() {
                    if ms > 0 {
                        self.autoplay_interval_ms = ms;
                    }
                }
            }
            "scroll_speed" => {
                if let Ok(speed) = value.parse::<f64>() {
                    self.scroll_speed = speed.clamp(0.05, 0.95);
                }
            }
            "show_dots" => {
                if let Ok(flag) = value.parse::<bool>() {
                    self.show_dots = flag;
                }
            }
            _ => {
                tracing::debug!("ignoring unknown config key {key:?}");
            }
        }
    }

    fn to_file_string(&self) -> String {
        format!(
            "# carousel-tui configuration\n\
             autoplay_interval_ms = {}\n\
             scroll_speed = {}\n\
             show_dots = {}\n",
            self.autoplay_interval_ms, self.scroll_speed, self.show_dots
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_format_round_trips() {
        let config = AppConfig {
            autoplay_interval_ms: 1500,
            scroll_speed: 0.5,
            show_dots: false,
        };
        let mut parsed = AppConfig::default();
        for line in config.to_file_string().lines() {
            parsed.apply_line(line);
        }
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_lines_are_ignored() {
        let mut config = AppConfig::default();
        for line in [
            "# a comment",
            "",
            "no equals sign here",
            "autoplay_interval_ms = not-a-number",
            "autoplay_interval_ms = 0",
            "unknown_key = 7",
        ] {
            config.apply_line(line);
        }
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn scroll_speed_is_clamped() {
        let mut config = AppConfig::default();
        config.apply_line("scroll_speed = 3.0");
        assert_eq!(config.scroll_speed, 0.95);
        config.apply_line("scroll_speed = 0.0");
        assert_eq!(config.scroll_speed, 0.05);
    }
}
