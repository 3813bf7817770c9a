#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;
use stellar_academy::AcademyApp;
use stellar_academy::api::{AuthApi, CheckUserResponse, CreateUserRequest, CreateUserResponse};
use stellar_academy::error::LoginError;
use stellar_academy::games::ActiveGame;
use stellar_academy::model::AppState;
use stellar_academy::session::Session;

struct OfflineApi;

impl AuthApi for OfflineApi {
    fn check_user(&self, _wallet_code: &str) -> Result<CheckUserResponse, LoginError> {
        Err(LoginError::Transport("offline".into()))
    }

    fn create_user(&self, _request: &CreateUserRequest) -> Result<CreateUserResponse, LoginError> {
        Err(LoginError::Transport("offline".into()))
    }
}

fn signed_in() -> AcademyApp {
    let mut app = AcademyApp::with_api(Arc::new(OfflineApi));
    app.begin_session(Session::new("ABCDEFGHIJKL", "tok", "Ayşe", "Yılmaz"));
    app
}

/// Walks the whole course; lessons are continued and each game reports the
/// next score from `scores`.
fn play_course(app: &mut AcademyApp, scores: &[u8]) {
    let mut scores = scores.iter();
    while app.completion.is_none() {
        match app.game {
            Some(_) => app.finish_game(*scores.next().expect("one score per game")),
            None => app.complete_lesson(),
        }
    }
    assert!(scores.next().is_none(), "every score was used");
}

#[test]
fn passing_course_is_recorded() {
    let mut app = signed_in();
    app.open_course("stellar-basics");
    assert_eq!(app.state, AppState::Course);

    play_course(&mut app, &[100, 80, 60, 80]);
    let outcome = app.completion.expect("completion modal");
    assert_eq!(outcome.success_rate, 80);
    assert!(outcome.passed);

    app.close_completion();
    assert_eq!(app.state, AppState::Dashboard);
    let dashboard = app.dashboard.as_ref().unwrap();
    assert_eq!(dashboard.completed_count(), 1);
    assert_eq!(dashboard.earned_count(), 2);
}

#[test]
fn failing_course_is_not_recorded() {
    let mut app = signed_in();
    app.open_course("stellar-basics");
    play_course(&mut app, &[100, 50, 50, 50]);

    let outcome = app.completion.unwrap();
    assert_eq!(outcome.success_rate, 63);
    assert!(!outcome.passed);

    app.close_completion();
    assert_eq!(app.dashboard.as_ref().unwrap().completed_count(), 0);
}

#[test]
fn coming_soon_course_stays_on_dashboard() {
    let mut app = signed_in();
    app.open_course("defi-development");
    assert_eq!(app.state, AppState::Dashboard);
    assert!(app.message.contains("çok yakında"));
}

#[test]
fn leaving_mid_course_discards_the_attempt() {
    let mut app = signed_in();
    app.open_course("stellar-basics");
    app.complete_lesson();
    app.finish_game(100);
    app.back_to_dashboard();

    assert_eq!(app.state, AppState::Dashboard);
    assert!(app.dashboard.as_ref().unwrap().current().is_none());

    app.open_course("stellar-basics");
    let seq = app.dashboard.as_ref().unwrap().current().unwrap();
    assert_eq!(seq.current_index(), 0);
    assert!(seq.progress().completed_ids.is_empty());
}

#[test]
fn quiz_played_through_its_game_state() {
    let mut app = signed_in();
    app.open_course("stellar-basics");
    app.select_module(5);

    let mut finished = None;
    while finished.is_none() {
        let Some(ActiveGame::Quiz(game)) = app.game.as_mut() else {
            panic!("module 6 is the quiz");
        };
        let answer = game.current_question().unwrap().correct_answer;
        game.select(answer);
        assert_eq!(game.submit(), Some(true));
        if let Some(stellar_academy::games::GameStep::Finished(score)) = game.next_question() {
            finished = Some(score);
        }
    }
    assert_eq!(finished, Some(100));
    app.finish_game(100);

    let seq = app.dashboard.as_ref().unwrap().current().unwrap();
    assert_eq!(seq.game_score("quiz-1"), Some(100));
    assert_eq!(seq.current_index(), 6);
}

#[test]
fn logout_drops_everything() {
    let mut app = signed_in();
    app.open_course("stellar-basics");
    app.logout();

    assert_eq!(app.state, AppState::Landing);
    assert!(app.session.is_none());
    assert!(app.dashboard.is_none());
    assert!(app.game.is_none());
}
