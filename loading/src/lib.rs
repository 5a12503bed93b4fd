mod resources;

#[cfg(test)]
mod tests;

pub use resources::{PendingDefinition, SkillTreeSource};

use {
    bevy::{asset::LoadState, prelude::*},
    skills_assets::SkillTreeDefinition,
    states::SessionState,
};

/// Picks the definition source, validates it and seeds the catalog, quiz bank and settings.
///
/// Asset sources need `AssetPlugin` and `SkillsAssetsPlugin`; the builtin source needs neither.
pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkillTreeSource>()
            .init_state::<SessionState>()
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                check_definition_loaded
                    .run_if(in_state(SessionState::Loading).and(resource_exists::<PendingDefinition>)),
            );
    }
}

fn start_loading(
    source: Res<SkillTreeSource>,
    asset_server: Option<Res<AssetServer>>,
    mut next_state: ResMut<NextState<SessionState>>,
    mut commands: Commands,
) {
    let path = match &*source {
        SkillTreeSource::Builtin => {
            info!("using the builtin skill tree");
            install_definition(SkillTreeDefinition::builtin(), &mut commands, &mut next_state);
            return;
        }
        SkillTreeSource::Asset(path) => path,
    };

    let Some(asset_server) = asset_server else {
        error!(%path, "no asset server to load the skill tree with, using the builtin one");
        install_definition(SkillTreeDefinition::builtin(), &mut commands, &mut next_state);
        return;
    };

    info!(%path, "started loading skill tree");
    commands.insert_resource(PendingDefinition(asset_server.load(path.clone())));
}

fn check_definition_loaded(
    pending: Res<PendingDefinition>,
    asset_server: Res<AssetServer>,
    definitions: Res<Assets<SkillTreeDefinition>>,
    mut next_state: ResMut<NextState<SessionState>>,
    mut commands: Commands,
) {
    let definition = if let Some(definition) = definitions.get(&pending.0) {
        info!("skill tree loaded");
        definition.clone()
    } else if let LoadState::Failed(error) = asset_server.load_state(pending.0.id()) {
        error!(%error, "failed to load the skill tree, using the builtin one");
        SkillTreeDefinition::builtin()
    } else {
        return;
    };

    commands.remove_resource::<PendingDefinition>();
    install_definition(definition, &mut commands, &mut next_state);
}

/// Inserts the session resources built from `definition`, or from the builtin tree if it is invalid.
fn install_definition(
    definition: SkillTreeDefinition,
    commands: &mut Commands,
    next_state: &mut NextState<SessionState>,
) {
    let definition = match definition.validate() {
        Ok(()) => definition,
        Err(error) => {
            error!(%error, "invalid skill tree definition, using the builtin one");
            SkillTreeDefinition::builtin()
        }
    };

    let (catalog, bank) = match (definition.build_catalog(), definition.build_quiz_bank()) {
        (Ok(catalog), Ok(bank)) => (catalog, bank),
        (Err(error), _) | (_, Err(error)) => {
            error!(%error, "builtin skill tree is invalid");
            return;
        }
    };

    info!(
        skills = %catalog.len(),
        questions = %bank.len(),
        seed = %definition.seed,
        "skill tree ready"
    );
    commands.insert_resource(catalog);
    commands.insert_resource(bank);
    if let Some(settings) = definition.settings {
        debug!(?settings, "skill tree overrides settings");
        commands.insert_resource(settings);
    }

    next_state.set(SessionState::Running);
}
