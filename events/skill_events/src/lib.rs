use bevy::prelude::*;

pub struct SkillEventsPlugin;

impl Plugin for SkillEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<UnlockSource>()
            .register_type::<UnlockSkillRequest>()
            .register_type::<GrantSkillUnlock>()
            .register_type::<SkillUnlocked>()
            .register_type::<SkillTreeCompleted>()
            .register_type::<StartMemoryMatch>()
            .register_type::<MemoryMatchStarted>()
            .register_type::<FlipCard>()
            .register_type::<CardPairResolved>()
            .register_type::<MemoryMatchCompleted>()
            .register_type::<MemoryMatchRewarded>()
            .register_type::<StartQuiz>()
            .register_type::<QuizQuestionPresented>()
            .register_type::<SubmitQuizAnswer>()
            .register_type::<QuizAnswerRejected>()
            .register_type::<QuizCompleted>()
            .register_type::<ExitMiniGame>();
    }
}

/// Which mechanism granted an unlock.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnlockSource {
    /// Player clicked a node next to an unlocked one.
    Adjacency,
    MemoryMatch,
    Quiz,
}

// ============================================================================
// Skill catalog
// ============================================================================

/// Player clicked a locked node.
///
/// # Observers
/// - `unlocks::on_unlock_request`: runs the adjacency check and, when it passes,
///   triggers [`GrantSkillUnlock`]. Ineligible clicks are dropped.
#[derive(Event, Reflect, Debug, Clone)]
pub struct UnlockSkillRequest {
    pub skill_id: String,
}

/// Request to flip a skill to unlocked, emitted by the adjacency check and both mini-games.
///
/// `unlocks::apply_skill_grant` is the only observer allowed to mutate the catalog.
#[derive(Event, Reflect, Debug, Clone)]
pub struct GrantSkillUnlock {
    pub skill_id: String,
    pub source: UnlockSource,
}

/// A skill went from locked to unlocked.
#[derive(Event, Reflect, Debug, Clone)]
pub struct SkillUnlocked {
    pub skill_id: String,
    pub name: String,
    pub source: UnlockSource,
    /// Unlocked skills after this one flipped.
    pub unlocked: usize,
    pub total: usize,
}

/// Every skill in the catalog is unlocked. Fired once per session.
#[derive(Event, Reflect, Debug, Clone)]
pub struct SkillTreeCompleted {
    pub total: usize,
}

// ============================================================================
// Memory match
// ============================================================================

#[derive(Event, Reflect, Debug, Clone, Default)]
pub struct StartMemoryMatch;

#[derive(Event, Reflect, Debug, Clone)]
pub struct MemoryMatchStarted {
    /// Number of face-down cards dealt.
    pub cards: usize,
}

/// Player picked a card on the active board.
#[derive(Event, Reflect, Debug, Clone)]
pub struct FlipCard {
    pub index: usize,
}

/// A revealed pair was locked in or turned back after its delay.
#[derive(Event, Reflect, Debug, Clone)]
pub struct CardPairResolved {
    pub first: usize,
    pub second: usize,
    pub matched: bool,
}

/// All pairs on the board are matched.
#[derive(Event, Reflect, Debug, Clone)]
pub struct MemoryMatchCompleted {
    pub pairs: usize,
    /// Pair attempts it took, matched or not.
    pub moves: u32,
}

/// Skills granted for finishing a memory match. Empty if nothing was left to unlock.
#[derive(Event, Reflect, Debug, Clone)]
pub struct MemoryMatchRewarded {
    pub skill_ids: Vec<String>,
}

// ============================================================================
// Quiz
// ============================================================================

#[derive(Event, Reflect, Debug, Clone, Default)]
pub struct StartQuiz;

/// A new question became the active one.
#[derive(Event, Reflect, Debug, Clone)]
pub struct QuizQuestionPresented {
    pub skill_id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Event, Reflect, Debug, Clone)]
pub struct SubmitQuizAnswer {
    pub option: String,
}

/// Wrong answer. Nothing was unlocked.
#[derive(Event, Reflect, Debug, Clone)]
pub struct QuizAnswerRejected {
    pub skill_id: String,
    pub submitted: String,
}

/// No question is left whose skill is still locked.
#[derive(Event, Reflect, Debug, Clone)]
pub struct QuizCompleted {
    pub score: u32,
}

/// Closes whichever mini-game is open, cancelling anything it still has scheduled.
#[derive(Event, Reflect, Debug, Clone, Default)]
pub struct ExitMiniGame;
