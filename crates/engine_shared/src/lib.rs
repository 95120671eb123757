// crates/engine_shared/src/lib.rs
//! Types shared between the engine and the games it drives.

pub mod assets;
pub mod game_api;
pub mod options;

pub use assets::{AssetEntry, AssetError, AssetHandle, AssetKind, AssetManifest};
pub use game_api::{FrameContext, GameError, GameLogic, LoadContext, LoopControl};
pub use options::GameOptions;
