use bevy::prelude::*;

/// Lifecycle of one skill tree session.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for the tree definition to be available.
    #[default]
    Loading,
    Running,
    /// Every skill is unlocked.
    Completed,
}

/// Which mini-game currently owns the player's input.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MiniGameState {
    #[default]
    Closed,
    MemoryMatch,
    Quiz,
}
