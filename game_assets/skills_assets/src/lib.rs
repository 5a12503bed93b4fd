mod builtin;

#[cfg(test)]
mod tests;

use {
    bevy::{platform::collections::HashSet, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
    skill_components::{QuizQuestion, SkillCategory, SkillPosition, SkillRecord},
    skill_resources::{QuizBank, SkillCatalog, SkillTreeSettings},
    thiserror::Error,
};

pub struct SkillsAssetsPlugin;

impl Plugin for SkillsAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<SkillTreeDefinition>::new(&["skilltree.ron"]));
    }
}

/// A complete skill tree loaded from `.skilltree.ron`.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SkillTreeDefinition {
    /// The one skill that starts unlocked.
    pub seed: String,
    pub skills: Vec<SkillDefinition>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    /// Overrides the running `SkillTreeSettings` when present.
    #[serde(default)]
    pub settings: Option<SkillTreeSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Unique identifier (e.g., "react", "mongo")
    pub id: String,
    /// Display name shown on the node
    pub name: String,
    pub category: SkillCategory,
    /// Proficiency percentage, 0-100
    pub level: u8,
    pub position: SkillPosition,
}

impl SkillDefinition {
    pub fn to_record(&self) -> SkillRecord {
        SkillRecord::new(
            self.id.clone(),
            self.name.clone(),
            self.category,
            self.level,
            self.position,
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("skill tree defines no skills")]
    Empty,
    #[error("skill id `{0}` is defined more than once")]
    DuplicateSkill(String),
    #[error("seed skill `{0}` is not part of the tree")]
    UnknownSeed(String),
    #[error("skill `{id}` has level {level}, expected 0-100")]
    LevelOutOfRange { id: String, level: u8 },
    #[error("skill `{id}` is positioned outside the 0-100 plane")]
    PositionOutOfRange { id: String },
    #[error("quiz question targets unknown skill `{0}`")]
    UnknownQuizTarget(String),
    #[error("skill `{0}` has more than one quiz question")]
    DuplicateQuizTarget(String),
    #[error("quiz question for `{0}` does not list its answer among the options")]
    AnswerNotInOptions(String),
    #[error("memory match must deal at least one pair")]
    NoMemoryPairs,
    #[error("memory match must reward at least one skill")]
    NoMemoryReward,
}

impl SkillTreeDefinition {
    /// The portfolio's own tree: thirteen skills rooted at React.
    pub fn builtin() -> Self {
        builtin::definition()
    }

    /// Checks the invariants the catalog relies on. Returns the first violation.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.skills.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut ids = HashSet::new();
        for skill in &self.skills {
            if !ids.insert(skill.id.as_str()) {
                return Err(DefinitionError::DuplicateSkill(skill.id.clone()));
            }
            if skill.level > 100 {
                return Err(DefinitionError::LevelOutOfRange {
                    id: skill.id.clone(),
                    level: skill.level,
                });
            }
            if !skill.position.is_in_plane() {
                return Err(DefinitionError::PositionOutOfRange {
                    id: skill.id.clone(),
                });
            }
        }

        if !ids.contains(self.seed.as_str()) {
            return Err(DefinitionError::UnknownSeed(self.seed.clone()));
        }

        let mut quiz_targets = HashSet::new();
        for question in &self.quiz {
            if !ids.contains(question.skill_id.as_str()) {
                return Err(DefinitionError::UnknownQuizTarget(question.skill_id.clone()));
            }
            if !quiz_targets.insert(question.skill_id.as_str()) {
                return Err(DefinitionError::DuplicateQuizTarget(
                    question.skill_id.clone(),
                ));
            }
            if !question.options.contains(&question.answer) {
                return Err(DefinitionError::AnswerNotInOptions(
                    question.skill_id.clone(),
                ));
            }
        }

        if let Some(settings) = &self.settings {
            if settings.memory_match.pairs == 0 {
                return Err(DefinitionError::NoMemoryPairs);
            }
            if settings.memory_match.reward_count == 0 {
                return Err(DefinitionError::NoMemoryReward);
            }
        }

        Ok(())
    }

    /// Fresh catalog with only the seed unlocked.
    pub fn build_catalog(&self) -> Result<SkillCatalog, DefinitionError> {
        self.validate()?;
        Ok(SkillCatalog::from_records(
            self.skills.iter().map(SkillDefinition::to_record),
            &self.seed,
        ))
    }

    pub fn build_quiz_bank(&self) -> Result<QuizBank, DefinitionError> {
        self.validate()?;
        Ok(QuizBank::new(self.quiz.clone()))
    }
}
