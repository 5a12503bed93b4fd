mod rng;
mod settings;


pub use rng::SkillRng;
pub use settings::*;

use {bevy::prelude::*, skill_components::{QuizQuestion, SkillRecord}};

pub struct SkillResourcesPlugin;

impl Plugin for SkillResourcesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkillCatalog>()
            .init_resource::<QuizBank>()
            .init_resource::<SkillTreeSettings>()
            .init_resource::<SkillRng>()
            .register_type::<SkillCatalog>()
            .register_type::<QuizBank>()
            .register_type::<SkillTreeSettings>();
    }
}

/// The session's skill catalog and its unlock state.
///
/// Records keep their definition order, which is also the render order.
/// Unlocks are monotonic for the lifetime of the resource.
#[derive(Resource, Reflect, Default, Debug, Clone)]
#[reflect(Resource)]
pub struct SkillCatalog {
    skills: Vec<SkillRecord>,
    /// Set once completion has been reported.
    completion_signaled: bool,
}

impl SkillCatalog {
    /// Builds a catalog with only `seed` unlocked.
    pub fn from_records(records: impl IntoIterator<Item = SkillRecord>, seed: &str) -> Self {
        let skills = records
            .into_iter()
            .map(|mut record| {
                if record.id == seed {
                    record.mark_unlocked();
                }
                record
            })
            .collect();

        Self {
            skills,
            completion_signaled: false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&SkillRecord> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.skills.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|skill| skill.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.get(id).is_some_and(SkillRecord::is_unlocked)
    }

    /// True only for skills that exist and are still locked.
    pub fn is_locked(&self, id: &str) -> bool {
        self.get(id).is_some_and(|skill| !skill.is_unlocked())
    }

    pub fn locked_ids(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .filter(|skill| !skill.is_unlocked())
            .map(|skill| skill.id.as_str())
    }

    pub fn unlocked_count(&self) -> usize {
        self.skills.iter().filter(|skill| skill.is_unlocked()).count()
    }

    pub fn all_unlocked(&self) -> bool {
        self.skills.iter().all(SkillRecord::is_unlocked)
    }

    /// Unlocked share of the catalog in percent.
    pub fn progress(&self) -> f32 {
        if self.skills.is_empty() {
            return 0.0;
        }
        self.unlocked_count() as f32 / self.skills.len() as f32 * 100.0
    }

    /// Unlocks `id`. Returns `false` for unknown or already unlocked skills.
    pub fn unlock(&mut self, id: &str) -> bool {
        self.skills
            .iter_mut()
            .find(|skill| skill.id == id)
            .is_some_and(SkillRecord::mark_unlocked)
    }

    /// Returns `true` the first time it is called with every skill unlocked, `false` afterwards.
    pub fn take_completion(&mut self) -> bool {
        if self.completion_signaled || self.skills.is_empty() || !self.all_unlocked() {
            return false;
        }
        self.completion_signaled = true;
        true
    }
}

/// Quiz questions, one per skill, in definition order.
#[derive(Resource, Reflect, Default, Debug, Clone)]
#[reflect(Resource)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
