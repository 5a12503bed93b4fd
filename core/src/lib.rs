use {
    bevy::prelude::*,
    loading::LoadingManagerPlugin,
    memory_match::MemoryMatchPlugin,
    notification_ui::NotificationUiPlugin,
    quiz::QuizPlugin,
    skill_components::SkillComponentsPlugin,
    skill_events::SkillEventsPlugin,
    skill_resources::SkillResourcesPlugin,
    skills_assets::SkillsAssetsPlugin,
    states::{MiniGameState, SessionState},
    unlocks::UnlocksPlugin,
};

mod systems;

#[cfg(test)]
mod tests;

pub use systems::finish_session;

/// Everything a skill tree session needs. Expects `StatesPlugin` and, for RON definitions, `AssetPlugin`.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SessionState>()
            .init_state::<MiniGameState>()
            .add_plugins((SkillComponentsPlugin, SkillEventsPlugin, SkillResourcesPlugin));

        if app.is_plugin_added::<AssetPlugin>() {
            app.add_plugins(SkillsAssetsPlugin);
        }

        app.add_plugins((
            LoadingManagerPlugin,
            UnlocksPlugin,
            MemoryMatchPlugin,
            QuizPlugin,
            NotificationUiPlugin,
        ))
        .add_observer(finish_session);
    }
}
