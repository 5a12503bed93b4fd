//! Headless player: one memory match, a few quiz answers, then clicks until the tree is complete.

use {
    bevy::prelude::*,
    memory_match::{CardFace, MemoryBoard},
    quiz::QuizSession,
    skill_events::{
        ExitMiniGame, FlipCard, MemoryMatchRewarded, StartMemoryMatch, StartQuiz, SubmitQuizAnswer,
        UnlockSkillRequest,
    },
    skill_resources::{QuizBank, SkillCatalog, SkillTreeSettings},
    states::{MiniGameState, SessionState},
    unlocks::eligible_skills,
};

/// Correct quiz answers given before switching to clicks.
const QUIZ_ANSWERS: u32 = 3;

pub struct AutoplayPlugin;

impl Plugin for AutoplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Autoplay>()
            .add_observer(on_match_rewarded)
            .add_systems(
                Update,
                (play_memory_match, play_quiz, click_nodes)
                    .run_if(in_state(SessionState::Running)),
            )
            .add_systems(OnEnter(SessionState::Completed), exit_when_complete);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Step {
    #[default]
    MemoryMatch,
    Quiz,
    Clicks,
}

#[derive(Resource, Debug, Default)]
struct Autoplay {
    step: Step,
    /// Set while waiting for the mini-game state to catch up with a start or exit.
    waiting: bool,
}

fn on_match_rewarded(trigger: On<MemoryMatchRewarded>, mut autoplay: ResMut<Autoplay>) {
    info!(rewards = ?trigger.event().skill_ids, "autoplay cleared the memory match");
    autoplay.step = Step::Quiz;
    autoplay.waiting = false;
}

fn play_memory_match(
    mut autoplay: ResMut<Autoplay>,
    state: Res<State<MiniGameState>>,
    boards: Query<&MemoryBoard>,
    mut commands: Commands,
) {
    if autoplay.step != Step::MemoryMatch {
        return;
    }

    let Ok(board) = boards.single() else {
        if !autoplay.waiting && *state.get() == MiniGameState::Closed {
            commands.trigger(StartMemoryMatch);
            autoplay.waiting = true;
        }
        return;
    };
    if !board.accepts_flips() {
        return;
    }

    // perfect memory: always reveal both halves of the first unmatched pair
    let cards = board.cards();
    let Some(first) = cards.iter().position(|card| card.face != CardFace::Matched) else {
        return;
    };
    let Some(second) = cards
        .iter()
        .enumerate()
        .skip(first + 1)
        .find(|(_, card)| card.skill_id == cards[first].skill_id)
        .map(|(index, _)| index)
    else {
        return;
    };

    for index in [first, second] {
        if cards[index].face == CardFace::Down {
            commands.trigger(FlipCard { index });
        }
    }
}

fn play_quiz(
    mut autoplay: ResMut<Autoplay>,
    state: Res<State<MiniGameState>>,
    sessions: Query<&QuizSession>,
    bank: Res<QuizBank>,
    mut commands: Commands,
) {
    if autoplay.step != Step::Quiz {
        return;
    }

    let Ok(session) = sessions.single() else {
        if autoplay.waiting {
            // the quiz closed on its own or was exited
            if *state.get() == MiniGameState::Closed {
                autoplay.step = Step::Clicks;
            }
        } else if *state.get() == MiniGameState::Closed {
            commands.trigger(StartQuiz);
            autoplay.waiting = true;
        }
        return;
    };

    if session.score() >= QUIZ_ANSWERS {
        info!(score = %session.score(), "autoplay leaves the quiz");
        commands.trigger(ExitMiniGame);
        return;
    }

    let Some(question) = session.current_question(&bank) else {
        return;
    };
    debug!(skill_id = %question.skill_id, answer = %question.answer, "autoplay answers");
    commands.trigger(SubmitQuizAnswer {
        option: question.answer.clone(),
    });
}

fn click_nodes(
    mut autoplay: ResMut<Autoplay>,
    catalog: Res<SkillCatalog>,
    settings: Res<SkillTreeSettings>,
    mut commands: Commands,
) {
    if autoplay.step != Step::Clicks {
        return;
    }

    match eligible_skills(&catalog, &settings.adjacency).first() {
        Some(skill_id) => {
            commands.trigger(UnlockSkillRequest {
                skill_id: skill_id.to_string(),
            });
        }
        None if !catalog.all_unlocked() => {
            info!(
                unlocked = %catalog.unlocked_count(),
                total = %catalog.len(),
                "no node is clickable, playing another memory match"
            );
            autoplay.step = Step::MemoryMatch;
            autoplay.waiting = false;
        }
        None => {}
    }
}

fn exit_when_complete(catalog: Res<SkillCatalog>, mut exit: MessageWriter<AppExit>) {
    info!(progress = %catalog.progress(), "autoplay finished the skill tree");
    exit.write(AppExit::Success);
}
