// crates/engine_core/src/game.rs

use engine_shared::{AssetManifest, GameLogic, GameOptions, LoadContext, LoopControl};
use tracing::{debug, error, info};

use crate::config::{self, EngineSettings};
use crate::engine_loop::{EngineLoop, SIM_DT};
use crate::error::{exit_code, EngineError, RuntimeFailure};
use crate::lifecycle::LifecycleState;
use crate::platform::{Platform, WinitPlatform};

/// A game instance: its options, its logic, and one pass through the
/// `Created -> Initializing -> Running -> ShuttingDown -> Terminated` lifecycle.
pub struct Game {
    options: GameOptions,
    logic: Box<dyn GameLogic>,
    state: LifecycleState,
}

impl Game {
    /// In-memory construction only; no window, GPU or file access happens here.
    pub fn new(logic: impl GameLogic + 'static) -> Self {
        Self::with_options(logic, GameOptions::default())
    }

    pub fn with_options(logic: impl GameLogic + 'static, options: GameOptions) -> Self {
        Self {
            options,
            logic: Box::new(logic),
            state: LifecycleState::Created,
        }
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Mutable options, available only before `run()` starts.
    pub fn options_mut(&mut self) -> Result<&mut GameOptions, EngineError> {
        match self.state {
            LifecycleState::Created => Ok(&mut self.options),
            state => Err(EngineError::OptionsLocked(state)),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Runs on a real window until quit and returns the process exit status.
    ///
    /// Builds a fresh `WinitPlatform`, and winit allows one event loop per
    /// process, so call this at most once per process. To run several games
    /// in sequence, keep one `WinitPlatform` and pass it to `run_on`.
    pub fn run(&mut self) -> i32 {
        let mut platform = WinitPlatform::new();
        self.run_on(&mut platform)
    }

    /// Same as `run`, on a caller-supplied platform.
    pub fn run_on(&mut self, platform: &mut dyn Platform) -> i32 {
        match self.try_run_on(platform) {
            Ok(()) => {
                info!("Clean shutdown");
                exit_code::SUCCESS
            }
            Err(err) => {
                error!(%err, "Game terminated with an error");
                err.exit_code()
            }
        }
    }

    pub fn try_run_on(&mut self, platform: &mut dyn Platform) -> Result<(), EngineError> {
        if self.state != LifecycleState::Created {
            return Err(EngineError::AlreadyRun(self.state));
        }
        self.transition(LifecycleState::Initializing);

        // 1) Options -> subsystems
        let settings = match config::validate(&self.options) {
            Ok(settings) => settings,
            Err(err) => return self.abort(err.into()),
        };
        if let Err(err) = platform.init(&settings) {
            platform.shutdown();
            return self.abort(EngineError::Initialization(err));
        }

        // 2) Game data
        let mut assets = AssetManifest::new(settings.asset_root.clone());
        let loaded = {
            let mut ctx = LoadContext::new(&self.options, platform.surface_size(), &mut assets);
            self.logic.load_data(&mut ctx)
        };
        if let Err(err) = loaded {
            platform.shutdown();
            return self.abort(EngineError::DataLoad(err));
        }
        info!(assets = assets.len(), "Game data loaded");

        // 3) Main loop
        self.transition(LifecycleState::Running);
        let outcome = self.main_loop(&settings, platform);

        // 4) Teardown, on success and failure alike
        self.transition(LifecycleState::ShuttingDown);
        self.logic.on_unload();
        platform.shutdown();
        self.transition(LifecycleState::Terminated);

        outcome.map_err(EngineError::from)
    }

    fn main_loop(
        &mut self,
        settings: &EngineSettings,
        platform: &mut dyn Platform,
    ) -> Result<(), RuntimeFailure> {
        let mut engine_loop = EngineLoop::new(SIM_DT, settings.target_frame_rate);

        loop {
            let events = platform.pump_events()?;
            if events.quit_requested {
                info!(frames = engine_loop.frames_started(), "Quit requested");
                return Ok(());
            }

            let frame = engine_loop.begin_frame();
            engine_loop.update_simulation(frame.dt, self.logic.as_mut())?;
            if self.logic.update(&frame)? == LoopControl::Exit {
                info!(frame = frame.frame, "Game requested exit");
                return Ok(());
            }

            platform.render()?;
            engine_loop.pace_frame();
        }
    }

    fn transition(&mut self, next: LifecycleState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal lifecycle edge {:?} -> {:?}",
            self.state,
            next
        );
        debug!(from = ?self.state, to = ?next, "Lifecycle transition");
        self.state = next;
    }

    fn abort(&mut self, err: EngineError) -> Result<(), EngineError> {
        self.transition(LifecycleState::Terminated);
        Err(err)
    }
}
