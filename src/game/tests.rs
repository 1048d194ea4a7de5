use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use super::*;
use crate::game::question::Tier;
use crate::output::mock::MockGameOutput;

struct Context {
    game: Game<MockGameOutput>,
    output: MockGameOutput,
}

fn question(text: &str, options: [u32; 4], correct_answer_index: usize) -> Question {
    Question {
        text: text.to_owned(),
        correct_answer_index,
        options,
    }
}

fn build(timer_seconds: u32) -> Context {
    let questions = vec![
        question("1 + 2", [3, 5, 1, 8], 0),
        question("9 - 4", [2, 7, 5, 6], 2),
        question("6 + 6", [10, 11, 13, 12], 3),
    ];
    let session = Session::from_questions(timer_seconds, Tier::One, questions);
    let output = MockGameOutput::new();
    let game = Game::with_session(session, output.clone());
    Context { game, output }
}

fn is_time_warning(message: &Message) -> bool {
    match message {
        Message::TimeRemaining(_) => true,
        _ => false,
    }
}

#[test]
fn creates_game_from_settings() {
    let settings = Settings::default();
    let mut rng = StdRng::seed_from_u64(1);
    let game = Game::new(&settings, &mut rng, MockGameOutput::new()).unwrap();
    assert_eq!(game.total_questions(), 10);
    assert_eq!(game.remaining_seconds(), 60);
    assert!(!game.is_over());
}

#[test]
fn rejects_invalid_settings() {
    let mut settings = Settings::default();
    settings.question_count = 0;
    let mut rng = StdRng::seed_from_u64(1);
    assert!(Game::new(&settings, &mut rng, MockGameOutput::new()).is_err());
}

#[test]
fn begin_announces_rules_and_first_question() {
    let mut ctx = build(60);
    ctx.game.begin();
    let first = ctx.game.current_question().unwrap().clone();
    assert_eq!(
        ctx.output.flush(),
        [
            Message::GameBegins {
                timer_seconds: 60,
                question_count: 3,
                tier: Tier::One,
            },
            Message::QuestionBegins(0, first),
        ]
    );
}

#[test]
fn correct_selection_scores_and_moves_on() {
    let mut ctx = build(60);
    assert!(ctx.game.select(0).unwrap());
    assert_eq!(ctx.game.correct_count(), 1);
    assert_eq!(ctx.game.session().current_index(), 1);
    let messages = ctx.output.flush();
    assert_eq!(messages[0], Message::GuessCorrect(3));
    match &messages[1] {
        Message::QuestionBegins(1, q) => assert_eq!(q.text, "9 - 4"),
        other => panic!("Unexpected message {:?}", other),
    }
}

#[test]
fn incorrect_selection_reveals_answer() {
    let mut ctx = build(60);
    assert!(!ctx.game.select(3).unwrap());
    assert_eq!(ctx.game.correct_count(), 0);
    assert!(ctx.output.contains_message(&Message::GuessIncorrect(3)));
}

#[test]
fn last_selection_ends_game_with_results() {
    let mut ctx = build(60);
    ctx.game.select(0).unwrap();
    ctx.game.select(2).unwrap();
    ctx.game.select(0).unwrap();
    assert!(ctx.game.is_over());
    assert!(ctx.output.contains_message(&Message::GameResults {
        correct_count: 2,
        total_questions: 3,
        score: 200.0 / 3.0,
    }));
    assert!(ctx.game.select(0).is_err());
    assert_eq!(ctx.game.correct_count(), 2);
}

#[test]
fn ticks_once_per_whole_second() {
    let mut ctx = build(60);
    ctx.game.tick(Duration::from_millis(600));
    assert_eq!(ctx.game.remaining_seconds(), 60);
    ctx.game.tick(Duration::from_millis(600));
    assert_eq!(ctx.game.remaining_seconds(), 59);
    ctx.game.tick(Duration::from_millis(2800));
    assert_eq!(ctx.game.remaining_seconds(), 56);
}

#[test]
fn each_second_reports_time_left() {
    let mut ctx = build(60);
    ctx.game.tick(Duration::from_secs(1));
    assert_eq!(ctx.output.flush(), [Message::TimeLeft(59)]);

    ctx.game.tick(Duration::from_millis(500));
    assert!(ctx.output.flush().is_empty());

    ctx.game.tick(Duration::from_millis(2500));
    assert_eq!(
        ctx.output.flush(),
        [Message::TimeLeft(58), Message::TimeLeft(57), Message::TimeLeft(56)]
    );
}

#[test]
fn time_up_ends_game() {
    let mut ctx = build(60);
    for _ in 0..60 {
        ctx.game.tick(Duration::from_secs(1));
    }
    assert!(ctx.game.is_over());
    assert_eq!(ctx.game.session().current_index(), 0);
    assert!(ctx.output.contains_message(&Message::TimeUp));
    assert!(ctx.output.contains_message(&Message::GameResults {
        correct_count: 0,
        total_questions: 3,
        score: 0.0,
    }));

    ctx.output.flush();
    ctx.game.tick(Duration::from_secs(5));
    assert!(ctx.output.flush().is_empty());
}

#[test]
fn warns_when_crossing_time_thresholds() {
    let mut ctx = build(40);
    for _ in 0..9 {
        ctx.game.tick(Duration::from_secs(1));
    }
    assert_eq!(ctx.output.count_matching(is_time_warning), 0);
    ctx.game.tick(Duration::from_secs(1));
    assert!(ctx
        .output
        .contains_message(&Message::TimeRemaining(Duration::from_secs(30))));

    ctx.game.tick(Duration::from_secs(20));
    assert!(ctx
        .output
        .contains_message(&Message::TimeRemaining(Duration::from_secs(10))));
    assert_eq!(ctx.output.count_matching(is_time_warning), 2);
}
