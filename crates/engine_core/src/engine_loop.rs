// crates/engine_core/src/engine_loop.rs

use std::thread;
use std::time::{Duration, Instant};

use engine_shared::{FrameContext, GameError, GameLogic};

/// Fixed simulation step handed to `GameLogic::fixed_update`.
pub const SIM_DT: f32 = 1.0 / 60.0;

/// Encapsulates frame timing: clamped frame delta, fixed-timestep accumulator
/// with a step cap and backlog drop, and optional frame-rate pacing.
pub struct EngineLoop {
    started: Instant,
    last_frame_time: Instant,
    frame_index: u64,
    sim_accumulator: f32,
    sim_dt: f32,
    max_steps_per_frame: u32,
    frame_budget: Option<Duration>,
}

impl EngineLoop {
    pub fn new(sim_dt: f32, target_frame_rate: Option<u32>) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame_time: now,
            frame_index: 0,
            sim_accumulator: 0.0,
            sim_dt,
            max_steps_per_frame: 5,
            frame_budget: target_frame_rate
                .filter(|&rate| rate > 0)
                .map(|rate| Duration::from_secs_f64(1.0 / rate as f64)),
        }
    }

    /// Update the frame timer and return the clamped frame delta.
    /// Clamps to 0.25s to avoid giant spikes when dragging the window,
    /// hitting breakpoints, etc.
    pub fn tick_timer(&mut self) -> f32 {
        let now = Instant::now();
        let frame_dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        frame_dt.min(0.25)
    }

    /// Starts a frame: ticks the timer and returns the context for `update`.
    pub fn begin_frame(&mut self) -> FrameContext {
        let dt = self.tick_timer();
        let frame = FrameContext {
            frame: self.frame_index,
            dt,
            elapsed: self.last_frame_time.duration_since(self.started),
        };
        self.frame_index += 1;
        frame
    }

    pub fn frames_started(&self) -> u64 {
        self.frame_index
    }

    /// Runs fixed-timestep simulation steps until the accumulator is caught up
    /// or we hit max_steps_per_frame. If the backlog still remains at the cap,
    /// we drop it, to avoid "chasing" an infinite backlog under heavy load.
    /// Returns the number of steps taken.
    pub fn update_simulation(
        &mut self,
        frame_dt: f32,
        game: &mut dyn GameLogic,
    ) -> Result<u32, GameError> {
        self.sim_accumulator += frame_dt;

        let mut steps = 0;
        while self.sim_accumulator >= self.sim_dt && steps < self.max_steps_per_frame {
            game.fixed_update(self.sim_dt)?;
            self.sim_accumulator -= self.sim_dt;
            steps += 1;
        }

        // Prevent unbounded backlog if we're constantly saturated.
        if steps == self.max_steps_per_frame && self.sim_accumulator >= self.sim_dt {
            self.sim_accumulator = 0.0;
        }

        Ok(steps)
    }

    /// Time left in this frame's budget, if a frame cap is set.
    pub fn remaining_budget(&self) -> Option<Duration> {
        let budget = self.frame_budget?;
        budget.checked_sub(self.last_frame_time.elapsed())
    }

    /// Sleeps out the rest of the frame budget. No-op when uncapped.
    pub fn pace_frame(&self) {
        if let Some(remaining) = self.remaining_budget() {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StepCounter {
        steps: u32,
    }

    impl GameLogic for StepCounter {
        fn fixed_update(&mut self, dt: f32) -> Result<(), GameError> {
            assert_eq!(dt, SIM_DT);
            self.steps += 1;
            Ok(())
        }
    }

    struct FailingStep;

    impl GameLogic for FailingStep {
        fn fixed_update(&mut self, _dt: f32) -> Result<(), GameError> {
            Err(GameError::msg("physics exploded"))
        }
    }

    #[test]
    fn accumulates_partial_steps() {
        let mut engine_loop = EngineLoop::new(SIM_DT, None);
        let mut game = StepCounter::default();

        assert_eq!(engine_loop.update_simulation(SIM_DT * 0.5, &mut game).unwrap(), 0);
        assert_eq!(engine_loop.update_simulation(SIM_DT * 0.6, &mut game).unwrap(), 1);
        assert_eq!(game.steps, 1);
    }

    #[test]
    fn caps_steps_and_drops_backlog() {
        let mut engine_loop = EngineLoop::new(SIM_DT, None);
        let mut game = StepCounter::default();

        assert_eq!(engine_loop.update_simulation(SIM_DT * 20.0, &mut game).unwrap(), 5);
        // Backlog was dropped, so a tiny frame does not trigger catch-up.
        assert_eq!(engine_loop.update_simulation(SIM_DT * 0.1, &mut game).unwrap(), 0);
        assert_eq!(game.steps, 5);
    }

    #[test]
    fn step_errors_propagate() {
        let mut engine_loop = EngineLoop::new(SIM_DT, None);
        assert!(engine_loop.update_simulation(SIM_DT, &mut FailingStep).is_err());
    }

    #[test]
    fn frames_are_numbered_and_clamped() {
        let mut engine_loop = EngineLoop::new(SIM_DT, Some(60));
        let first = engine_loop.begin_frame();
        let second = engine_loop.begin_frame();

        assert_eq!(first.frame, 0);
        assert_eq!(second.frame, 1);
        assert!(second.dt <= 0.25);
        assert!(second.elapsed >= first.elapsed);
        assert_eq!(engine_loop.frames_started(), 2);
    }

    #[test]
    fn uncapped_loop_has_no_budget() {
        let engine_loop = EngineLoop::new(SIM_DT, None);
        assert_eq!(engine_loop.remaining_budget(), None);
        engine_loop.pace_frame();
    }
}
