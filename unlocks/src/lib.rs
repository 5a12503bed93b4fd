mod evaluator;
mod systems;


pub use evaluator::*;
pub use systems::{apply_skill_grant, on_unlock_request};

use {bevy::prelude::*, skill_resources::SkillResourcesPlugin};

/// Owns the catalog: adjacency unlocks, grant bookkeeping and the completion signal.
pub struct UnlocksPlugin;

impl Plugin for UnlocksPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SkillResourcesPlugin>() {
            app.add_plugins(SkillResourcesPlugin);
        }

        app.add_observer(on_unlock_request)
            .add_observer(apply_skill_grant);
    }
}
