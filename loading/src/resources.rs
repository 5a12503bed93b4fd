//! Resources describing where the skill tree comes from

use {bevy::prelude::*, skills_assets::SkillTreeDefinition};

/// Where the session's skill tree definition is read from.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub enum SkillTreeSource {
    /// The thirteen skill portfolio tree compiled into the binary.
    #[default]
    Builtin,
    /// Asset path of a `.skilltree.ron` file.
    Asset(String),
}

/// Handle of a definition that is still loading.
#[derive(Debug, Resource)]
pub struct PendingDefinition(pub Handle<SkillTreeDefinition>);
