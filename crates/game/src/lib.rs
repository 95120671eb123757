// crates/game/src/lib.rs

use engine_shared::{GameError, GameLogic, LoadContext};

/// The game this project builds. Register sprites, fonts and scenes in
/// `load_data`; per-frame logic goes in `update` / `fixed_update`.
#[derive(Default)]
pub struct StarterGame;

impl StarterGame {
    pub const TITLE: &'static str = "Starter Game";
}

impl GameLogic for StarterGame {
    fn load_data(&mut self, _ctx: &mut LoadContext<'_>) -> Result<(), GameError> {
        // Load data here, e.g.
        // ctx.assets.register(AssetKind::Sprite, "player", "player.png")?;
        Ok(())
    }
}
