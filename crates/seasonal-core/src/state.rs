//! Animator state machine.

/// Lifecycle state of a particle animator.
///
/// The machine has exactly two states. Starting while running passes
/// through `Stopped` momentarily so the previous run is fully torn down
/// before the next one begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// No spawn schedule armed, no particles in flight.
    #[default]
    Stopped,
    /// Spawn schedule armed; particles spawn and fall on each tick.
    Running,
}

impl AnimatorState {
    /// Whether the animator is currently running.
    pub fn is_running(self) -> bool {
        self == AnimatorState::Running
    }
}
