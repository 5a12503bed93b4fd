use {
    crate::*,
    bevy::{prelude::*, state::app::StatesPlugin},
    skill_components::{SkillCategory, SkillPosition},
    skill_resources::{DeckShuffle, QuizBank, SkillCatalog, SkillResourcesPlugin, SkillTreeSettings, WrongAnswer},
    skills_assets::{SkillDefinition, SkillTreeDefinition, SkillsAssetsPlugin},
    states::SessionState,
};

const SHIPPED_TREE: &str = include_str!("../../assets/skill_tree.skilltree.ron");

fn loading_app(source: SkillTreeSource) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(SkillResourcesPlugin)
        .insert_resource(source)
        .add_plugins(LoadingManagerPlugin);
    app
}

fn asset_app() -> App {
    let mut app = loading_app(SkillTreeSource::Builtin);
    app.add_plugins((AssetPlugin::default(), SkillsAssetsPlugin));
    app
}

fn session_state(app: &App) -> SessionState {
    app.world().resource::<State<SessionState>>().get().clone()
}

fn two_skill_tree() -> SkillTreeDefinition {
    let skill = |id: &str, x| SkillDefinition {
        id: id.to_string(),
        name: id.to_uppercase(),
        category: SkillCategory::Backend,
        level: 60,
        position: SkillPosition::new(x, 50.0),
    };
    SkillTreeDefinition {
        seed: "rust".into(),
        skills: vec![skill("rust", 10.0), skill("bevy", 20.0)],
        quiz: Vec::new(),
        settings: None,
    }
}

/// Hands `definition` to the loader as if the asset server had just finished it.
fn load_definition(app: &mut App, definition: SkillTreeDefinition) {
    let handle = app
        .world_mut()
        .resource_mut::<Assets<SkillTreeDefinition>>()
        .add(definition);
    app.insert_resource(PendingDefinition(handle));
    app.update();
    app.update();
}

#[test]
fn test_shipped_tree_parses_and_validates() {
    let definition: SkillTreeDefinition = ron::from_str(SHIPPED_TREE).unwrap();

    assert_eq!(definition.validate(), Ok(()));
    assert_eq!(definition.seed, "react");
    assert_eq!(definition.skills.len(), 13);
    assert_eq!(definition.quiz.len(), 8);

    let settings = definition.settings.unwrap();
    assert_eq!(settings.memory_match.shuffle, DeckShuffle::Clustered { window: 3 });
    assert_eq!(settings.memory_match.reward_count, 2);
    // fields left out of the file keep their defaults
    assert_eq!(settings.memory_match.match_delay_ms, 500);
    assert_eq!(settings.quiz.on_wrong_answer, WrongAnswer::Reroll);
}

#[test]
fn test_shipped_tree_matches_builtin_layout() {
    let shipped: SkillTreeDefinition = ron::from_str(SHIPPED_TREE).unwrap();
    let builtin = SkillTreeDefinition::builtin();

    for (shipped, builtin) in shipped.skills.iter().zip(&builtin.skills) {
        assert_eq!(shipped.id, builtin.id);
        assert_eq!(shipped.category, builtin.category);
        assert_eq!(shipped.position, builtin.position);
    }
}

#[test]
fn test_builtin_source_starts_running_without_assets() {
    let mut app = loading_app(SkillTreeSource::Builtin);

    app.update();
    app.update();

    assert_eq!(session_state(&app), SessionState::Running);
    let catalog = app.world().resource::<SkillCatalog>();
    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.unlocked_count(), 1);
    assert!(catalog.is_unlocked("react"));
    assert_eq!(app.world().resource::<QuizBank>().len(), 13);
}

#[test]
fn test_asset_source_without_asset_server_falls_back() {
    let mut app = loading_app(SkillTreeSource::Asset("custom.skilltree.ron".into()));

    app.update();
    app.update();

    assert_eq!(session_state(&app), SessionState::Running);
    assert_eq!(app.world().resource::<SkillCatalog>().len(), 13);
}

#[test]
fn test_loaded_definition_replaces_the_catalog() {
    let mut app = asset_app();
    app.update();

    let mut definition = two_skill_tree();
    let mut settings = SkillTreeSettings::default();
    settings.memory_match.pairs = 2;
    definition.settings = Some(settings.clone());

    // back to loading, as a fresh session would be
    app.world_mut()
        .resource_mut::<NextState<SessionState>>()
        .set(SessionState::Loading);
    app.update();
    load_definition(&mut app, definition);

    let catalog = app.world().resource::<SkillCatalog>();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.is_unlocked("rust"));
    assert!(app.world().resource::<QuizBank>().is_empty());
    assert_eq!(*app.world().resource::<SkillTreeSettings>(), settings);
    assert!(!app.world().contains_resource::<PendingDefinition>());
    assert_eq!(session_state(&app), SessionState::Running);
}

#[test]
fn test_invalid_definition_falls_back_to_builtin() {
    let mut app = asset_app();
    app.update();
    app.world_mut()
        .resource_mut::<NextState<SessionState>>()
        .set(SessionState::Loading);
    app.update();

    let mut definition = two_skill_tree();
    definition.seed = "haskell".into();
    load_definition(&mut app, definition);

    let catalog = app.world().resource::<SkillCatalog>();
    assert_eq!(catalog.len(), 13);
    assert!(catalog.is_unlocked("react"));
    assert_eq!(session_state(&app), SessionState::Running);
}
