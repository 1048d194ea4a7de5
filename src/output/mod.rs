use std::time::Duration;

use crate::game::question::{Question, Tier};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    GameBegins {
        timer_seconds: u32,
        question_count: usize,
        tier: Tier,
    },
    GameResults {
        correct_count: usize,
        total_questions: usize,
        score: f64,
    },
    GuessCorrect(u32),
    GuessIncorrect(u32),
    QuestionBegins(usize, Question),
    TimeLeft(u32),
    TimeRemaining(Duration),
    TimeUp,
}

/// Receives everything the game wants to tell the player.
pub trait GameOutput {
    fn say(&self, message: &Message);
}
