// crates/engine_shared/src/options.rs
//! Startup configuration handed to the engine before initialization.

use std::path::PathBuf;

use glam::Vec4;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Configuration record read by the engine once, while subsystems are created.
///
/// The record does not validate itself. Range checks and clamping are engine
/// policy and happen when `Game::run` turns these options into settings.
/// Every field has a default so a partial `game.toml` overlays cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Window / display caption. Must not be blank.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
    /// Frame cap. `None` runs uncapped (vsync permitting); written as `0` in files.
    #[serde(with = "frame_cap")]
    pub target_frame_rate: Option<u32>,
    pub vsync: bool,
    /// RGBA in linear [0, 1].
    pub clear_color: Vec4,
    /// Root of the `fonts/`, `scenes/` and `sprites/` folders.
    pub asset_root: PathBuf,
    /// Treat the Escape key as a quit request.
    pub exit_on_escape: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 1280,
            height: 720,
            fullscreen: false,
            target_frame_rate: Some(60),
            vsync: true,
            clear_color: Vec4::new(0.1, 0.1, 0.12, 1.0),
            asset_root: PathBuf::from("assets"),
            exit_on_escape: false,
        }
    }
}

impl GameOptions {
    /// Default options with only the caption set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// `target_frame_rate` on disk: `0` stands for uncapped, since TOML has no null.
mod frame_cap {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(value.unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        let rate = u32::deserialize(deserializer)?;
        Ok((rate != 0).then_some(rate))
    }
}
