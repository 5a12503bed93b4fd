mod session;
mod systems;


pub use session::*;
pub use systems::*;

use {bevy::prelude::*, states::MiniGameState};

/// One question per locked skill; a correct answer unlocks it.
pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MiniGameState>()
            .add_observer(start_quiz)
            .add_observer(submit_quiz_answer)
            .add_observer(exit_quiz)
            .add_systems(OnExit(MiniGameState::Quiz), teardown_quiz);
    }
}
