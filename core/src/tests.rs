use {
    crate::*,
    bevy::{prelude::*, state::app::StatesPlugin},
    notification_ui::NotificationQueue,
    quiz::QuizSession,
    skill_events::{GrantSkillUnlock, StartMemoryMatch, StartQuiz, SubmitQuizAnswer, UnlockSource},
    skill_resources::{QuizBank, SkillCatalog, SkillRng},
    states::{MiniGameState, SessionState},
};

fn session_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(CorePlugin)
        .insert_resource(SkillRng::seeded(42));
    app.update();
    app.update();
    app
}

fn session_state(app: &App) -> SessionState {
    app.world().resource::<State<SessionState>>().get().clone()
}

fn mini_game(app: &App) -> MiniGameState {
    app.world().resource::<State<MiniGameState>>().get().clone()
}

#[test]
fn test_session_starts_with_the_builtin_tree() {
    let app = session_app();

    assert_eq!(session_state(&app), SessionState::Running);
    assert_eq!(mini_game(&app), MiniGameState::Closed);
    assert_eq!(app.world().resource::<SkillCatalog>().len(), 13);
}

#[test]
fn test_granting_everything_completes_the_session() {
    let mut app = session_app();

    let ids: Vec<String> = app.world().resource::<SkillCatalog>().ids().map(String::from).collect();
    for skill_id in ids {
        app.world_mut().trigger(GrantSkillUnlock {
            skill_id,
            source: UnlockSource::MemoryMatch,
        });
    }
    app.update();
    app.update();

    assert_eq!(session_state(&app), SessionState::Completed);
    assert_eq!(app.world().resource::<NotificationQueue>().active().len(), 5);
}

#[test]
fn test_completion_closes_an_open_mini_game() {
    let mut app = session_app();
    app.world_mut().trigger(StartMemoryMatch);
    app.update();
    assert_eq!(mini_game(&app), MiniGameState::MemoryMatch);

    let ids: Vec<String> = app.world().resource::<SkillCatalog>().locked_ids().map(String::from).collect();
    for skill_id in ids {
        app.world_mut().trigger(GrantSkillUnlock {
            skill_id,
            source: UnlockSource::Quiz,
        });
    }
    app.update();
    app.update();

    assert_eq!(session_state(&app), SessionState::Completed);
    assert_eq!(mini_game(&app), MiniGameState::Closed);
}

#[test]
fn test_quiz_alone_can_finish_the_builtin_tree() {
    let mut app = session_app();
    app.world_mut().trigger(StartQuiz);
    app.update();

    for _ in 0..12 {
        let answer = {
            let mut sessions = app.world_mut().query::<&QuizSession>();
            let session = sessions.iter(app.world()).next().unwrap();
            let bank = app.world().resource::<QuizBank>();
            session.current_question(bank).unwrap().answer.clone()
        };
        app.world_mut().trigger(SubmitQuizAnswer { option: answer });
        app.update();
    }
    app.update();

    assert!(app.world().resource::<SkillCatalog>().all_unlocked());
    assert_eq!(session_state(&app), SessionState::Completed);
    assert_eq!(mini_game(&app), MiniGameState::Closed);
}
