use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    skill_components::AdjacencyRule,
};

/// Tunables for the whole skill tree. Missing fields fall back to their defaults.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct SkillTreeSettings {
    pub adjacency: AdjacencyRule,
    pub memory_match: MemoryMatchSettings,
    pub quiz: QuizSettings,
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryMatchSettings {
    /// Pairs dealt per game, capped by the catalog size.
    pub pairs: usize,
    /// How long a matching pair stays revealed before it locks in.
    pub match_delay_ms: u64,
    /// How long a mismatched pair stays revealed before turning back.
    pub mismatch_delay_ms: u64,
    pub shuffle: DeckShuffle,
    /// Locked skills granted when the board is cleared.
    pub reward_count: usize,
}

impl Default for MemoryMatchSettings {
    fn default() -> Self {
        Self {
            pairs: 6,
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
            shuffle: DeckShuffle::default(),
            reward_count: 1,
        }
    }
}

/// Deck layout strategy.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckShuffle {
    /// Every card anywhere.
    #[default]
    Uniform,
    /// Pairs are dealt in groups of `window` pairs, each group shuffled on its own,
    /// so partners never sit more than `2 * window - 1` cards apart.
    Clustered { window: usize },
}

#[derive(Reflect, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub on_wrong_answer: WrongAnswer,
}

/// What the quiz does after a wrong answer.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrongAnswer {
    /// Keep asking the same question.
    #[default]
    Repeat,
    /// Draw another eligible question, possibly the same one.
    Reroll,
}
