// crates/engine_core/src/config.rs
//! Turns caller-supplied `GameOptions` into the settings subsystems consume.
//! Validation and clamping policy lives here, not in the options record.

use std::fs;
use std::path::{Path, PathBuf};

use engine_shared::GameOptions;
use glam::Vec4;
use tracing::warn;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "game.toml";

/// Largest window edge we accept, in logical pixels.
pub const MAX_WINDOW_DIMENSION: u32 = 16_384;

/// Frame caps above this are clamped.
pub const MAX_FRAME_RATE: u32 = 1_000;

/// Validated snapshot of `GameOptions`, taken once at the start of `run()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub target_frame_rate: Option<u32>,
    pub vsync: bool,
    pub clear_color: Vec4,
    pub asset_root: PathBuf,
    pub exit_on_escape: bool,
}

pub fn validate(options: &GameOptions) -> Result<EngineSettings, ConfigError> {
    if options.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }

    let size_ok = |v: u32| (1..=MAX_WINDOW_DIMENSION).contains(&v);
    if !size_ok(options.width) || !size_ok(options.height) {
        return Err(ConfigError::InvalidWindowSize {
            width: options.width,
            height: options.height,
            max: MAX_WINDOW_DIMENSION,
        });
    }

    // Files spell "uncapped" as 0 and arrive here as `None`; an explicit
    // `Some(0)` can only come from code.
    let target_frame_rate = match options.target_frame_rate {
        Some(0) => return Err(ConfigError::ZeroFrameRate),
        Some(rate) if rate > MAX_FRAME_RATE => {
            warn!(rate, max = MAX_FRAME_RATE, "Clamping target frame rate");
            Some(MAX_FRAME_RATE)
        }
        other => other,
    };

    let clear_color = if options.clear_color.is_finite() {
        options.clear_color.clamp(Vec4::ZERO, Vec4::ONE)
    } else {
        warn!("Clear color is not finite, falling back to black");
        Vec4::new(0.0, 0.0, 0.0, 1.0)
    };

    Ok(EngineSettings {
        title: options.title.clone(),
        width: options.width,
        height: options.height,
        fullscreen: options.fullscreen,
        target_frame_rate,
        vsync: options.vsync,
        clear_color,
        asset_root: options.asset_root.clone(),
        exit_on_escape: options.exit_on_escape,
    })
}

/// Reads a TOML options file. Missing keys keep their defaults.
pub fn load_options(path: impl AsRef<Path>) -> Result<GameOptions, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_caller_values() {
        let options = GameOptions {
            title: "Asteroids".into(),
            width: 800,
            height: 600,
            fullscreen: true,
            target_frame_rate: Some(144),
            vsync: false,
            ..Default::default()
        };

        let settings = validate(&options).unwrap();
        assert_eq!(settings.title, "Asteroids");
        assert_eq!((settings.width, settings.height), (800, 600));
        assert!(settings.fullscreen);
        assert!(!settings.vsync);
        assert_eq!(settings.target_frame_rate, Some(144));
        assert_eq!(settings.clear_color, options.clear_color);
    }

    #[test]
    fn rejects_blank_title() {
        for title in ["", "   "] {
            let err = validate(&GameOptions::titled(title)).unwrap_err();
            assert!(matches!(err, ConfigError::EmptyTitle));
        }
    }

    #[test]
    fn rejects_bad_window_size_and_zero_rate() {
        let mut options = GameOptions::titled("Pong");
        options.width = 0;
        assert!(matches!(
            validate(&options),
            Err(ConfigError::InvalidWindowSize { width: 0, .. })
        ));

        options.width = 640;
        options.height = MAX_WINDOW_DIMENSION + 1;
        assert!(validate(&options).is_err());

        options.height = 480;
        options.target_frame_rate = Some(0);
        assert!(matches!(validate(&options), Err(ConfigError::ZeroFrameRate)));
    }

    #[test]
    fn clamps_rate_and_color() {
        let options = GameOptions {
            target_frame_rate: Some(5_000),
            clear_color: Vec4::new(2.0, -1.0, 0.5, 1.0),
            ..GameOptions::titled("Pong")
        };

        let settings = validate(&options).unwrap();
        assert_eq!(settings.target_frame_rate, Some(MAX_FRAME_RATE));
        assert_eq!(settings.clear_color, Vec4::new(1.0, 0.0, 0.5, 1.0));

        let uncapped = GameOptions {
            target_frame_rate: None,
            ..GameOptions::titled("Pong")
        };
        assert_eq!(validate(&uncapped).unwrap().target_frame_rate, None);
    }

    #[test]
    fn uncapped_file_reaches_settings_uncapped() {
        let dir = std::env::temp_dir().join(format!("engine_core_uncapped_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("game.toml");
        fs::write(&path, "title = \"Uncapped\"\ntarget_frame_rate = 0\n").unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.target_frame_rate, None);
        assert_eq!(validate(&options).unwrap().target_frame_rate, None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_options_reports_path() {
        let dir = std::env::temp_dir().join(format!("engine_core_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("game.toml");
        fs::write(&good, "title = \"Asteroids\"\nfullscreen = true\n").unwrap();
        let options = load_options(&good).unwrap();
        assert_eq!(options.title, "Asteroids");
        assert!(options.fullscreen);
        assert_eq!(options.width, 1280);

        let bad = dir.join("broken.toml");
        fs::write(&bad, "title = ").unwrap();
        assert!(matches!(load_options(&bad), Err(ConfigError::Parse { .. })));

        let missing = dir.join("missing.toml");
        assert!(matches!(load_options(&missing), Err(ConfigError::Read { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }
}
