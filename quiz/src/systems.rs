use {
    crate::{AnswerOutcome, QuizSession},
    bevy::prelude::*,
    skill_events::{
        ExitMiniGame, GrantSkillUnlock, QuizAnswerRejected, QuizCompleted, QuizQuestionPresented, StartQuiz,
        SubmitQuizAnswer, UnlockSource,
    },
    skill_resources::{QuizBank, SkillCatalog, SkillRng, SkillTreeSettings, WrongAnswer},
    states::MiniGameState,
};

fn present(bank: &QuizBank, index: usize, commands: &mut Commands) {
    let Some(question) = bank.get(index) else {
        return;
    };

    trace!(skill_id = %question.skill_id, "question presented");
    commands.trigger(QuizQuestionPresented {
        skill_id: question.skill_id.clone(),
        prompt: question.prompt.clone(),
        options: question.options.clone(),
    });
}

pub fn start_quiz(
    _trigger: On<StartQuiz>,
    state: Res<State<MiniGameState>>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    bank: Res<QuizBank>,
    catalog: Res<SkillCatalog>,
    mut rng: ResMut<SkillRng>,
    stale: Query<Entity, With<QuizSession>>,
    mut commands: Commands,
) {
    if *state.get() == MiniGameState::Quiz {
        warn!("quiz already running, ignoring start");
        return;
    }

    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    let mut session = QuizSession::default();
    let Some(index) = session.advance(&bank, &catalog, &mut rng) else {
        info!("no quiz question left for a locked skill");
        commands.trigger(QuizCompleted { score: 0 });
        return;
    };

    present(&bank, index, &mut commands);
    commands.spawn((Name::new("Quiz"), session));
    next_state.set(MiniGameState::Quiz);
}

pub fn submit_quiz_answer(
    trigger: On<SubmitQuizAnswer>,
    mut sessions: Query<(Entity, &mut QuizSession)>,
    bank: Res<QuizBank>,
    catalog: Res<SkillCatalog>,
    settings: Res<SkillTreeSettings>,
    mut rng: ResMut<SkillRng>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    mut commands: Commands,
) {
    let option = &trigger.event().option;

    let Ok((entity, mut session)) = sessions.single_mut() else {
        debug!(%option, "answer submitted without an open quiz");
        return;
    };

    let draw_next = match session.submit(&bank, option) {
        AnswerOutcome::NoActiveQuestion => {
            debug!(%option, "answer submitted without an active question");
            return;
        }
        AnswerOutcome::Correct { skill_id } => {
            debug!(%skill_id, score = %session.score(), "correct answer");
            commands.trigger(GrantSkillUnlock {
                skill_id,
                source: UnlockSource::Quiz,
            });
            true
        }
        AnswerOutcome::Incorrect { skill_id } => {
            debug!(%skill_id, %option, "wrong answer");
            commands.trigger(QuizAnswerRejected {
                skill_id,
                submitted: option.clone(),
            });
            settings.quiz.on_wrong_answer == WrongAnswer::Reroll
        }
    };

    if !draw_next {
        return;
    }

    match session.advance(&bank, &catalog, &mut rng) {
        Some(index) => present(&bank, index, &mut commands),
        None => {
            info!(score = %session.score(), "quiz finished");
            commands.trigger(QuizCompleted {
                score: session.score(),
            });
            commands.entity(entity).despawn();
            next_state.set(MiniGameState::Closed);
        }
    }
}

pub fn exit_quiz(
    _trigger: On<ExitMiniGame>,
    sessions: Query<Entity, With<QuizSession>>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    mut commands: Commands,
) {
    if sessions.is_empty() {
        return;
    }

    for entity in sessions.iter() {
        commands.entity(entity).despawn();
    }
    debug!("quiz closed");
    next_state.set(MiniGameState::Closed);
}

pub fn teardown_quiz(sessions: Query<Entity, With<QuizSession>>, mut commands: Commands) {
    for entity in sessions.iter() {
        commands.entity(entity).despawn();
    }
}
