// crates/engine_core/src/lifecycle.rs

/// Where a `Game` is in its single pass through `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Initializing,
    Running,
    ShuttingDown,
    Terminated,
}

impl LifecycleState {
    /// Legal edges of the lifecycle. `Initializing -> Terminated` is the
    /// abort path for configuration, subsystem and data-load failures.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Created, Initializing)
                | (Initializing, Running)
                | (Initializing, Terminated)
                | (Running, ShuttingDown)
                | (ShuttingDown, Terminated)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == LifecycleState::Terminated
    }
}

#[cfg(test)]
mod tests {
    use super::LifecycleState::*;

    #[test]
    fn happy_path_edges() {
        assert!(Created.can_transition_to(Initializing));
        assert!(Initializing.can_transition_to(Running));
        assert!(Running.can_transition_to(ShuttingDown));
        assert!(ShuttingDown.can_transition_to(Terminated));
    }

    #[test]
    fn abort_skips_running_but_nothing_leaves_terminated() {
        assert!(Initializing.can_transition_to(Terminated));
        assert!(!Running.can_transition_to(Terminated));
        assert!(!Created.can_transition_to(Running));

        for next in [Created, Initializing, Running, ShuttingDown, Terminated] {
            assert!(!Terminated.can_transition_to(next));
        }
        assert!(Terminated.is_terminal());
    }
}
