use {
    bevy::prelude::*,
    skill_events::{ExitMiniGame, SkillTreeCompleted},
    states::SessionState,
};

/// Ends the session once the whole tree is unlocked, closing any open mini-game.
pub fn finish_session(
    trigger: On<SkillTreeCompleted>,
    mut next_state: ResMut<NextState<SessionState>>,
    mut commands: Commands,
) {
    info!(total = %trigger.event().total, "skill tree session completed");
    commands.trigger(ExitMiniGame);
    next_state.set(SessionState::Completed);
}
