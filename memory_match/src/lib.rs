mod board;
mod systems;


pub use board::*;
pub use systems::*;

use {
    bevy::prelude::*,
    states::MiniGameState,
};

/// Matching pairs mini-game. Clearing the board grants random locked skills.
pub struct MemoryMatchPlugin;

impl Plugin for MemoryMatchPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MiniGameState>()
            .add_observer(start_memory_match)
            .add_observer(flip_card)
            .add_observer(grant_match_reward)
            .add_observer(exit_memory_match)
            .add_systems(Update, tick_pending_resolutions)
            .add_systems(OnExit(MiniGameState::MemoryMatch), teardown_memory_match);
    }
}
