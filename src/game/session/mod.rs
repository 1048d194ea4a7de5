use log::{debug, info};
use rand::Rng;

use crate::game::question::{generate_questions, Question, Tier};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Active,
    Over,
}

/// One timed play-through: a fixed list of questions and a countdown.
#[derive(Clone, Debug)]
pub struct Session {
    questions: Vec<Question>,
    tier: Tier,
    remaining_seconds: u32,
    current_index: usize,
    correct_count: usize,
    phase: Phase,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(
        timer_seconds: u32,
        tier: Tier,
        question_count: usize,
        rng: &mut R,
    ) -> Self {
        info!(
            "Creating session: {} seconds, tier {}, {} questions",
            timer_seconds, tier, question_count
        );
        let questions = generate_questions(tier, question_count, rng);
        Session::from_questions(timer_seconds, tier, questions)
    }

    pub fn from_questions(timer_seconds: u32, tier: Tier, questions: Vec<Question>) -> Self {
        Session {
            questions,
            tier,
            remaining_seconds: timer_seconds,
            current_index: 0,
            correct_count: 0,
            phase: Phase::Active,
        }
    }

    /// Counts down one second. The session ends once the countdown reaches zero.
    pub fn tick(&mut self) {
        if self.is_over() {
            return;
        }
        if self.remaining_seconds == 0 {
            self.end();
            return;
        }
        self.remaining_seconds -= 1;
        debug!("{} seconds remaining", self.remaining_seconds);
        if self.remaining_seconds == 0 {
            self.end();
        }
    }

    /// Records a correct answer if the selected option matches the current question.
    /// Returns whether it did. Does not move on to the next question.
    pub fn submit_answer(&mut self, option_index: usize) -> bool {
        if self.is_over() {
            return false;
        }
        let is_correct = self
            .current_question()
            .map(|q| q.is_option_correct(option_index))
            .unwrap_or(false);
        if is_correct {
            self.correct_count += 1;
        }
        is_correct
    }

    pub fn advance(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.end();
        }
    }

    fn end(&mut self) {
        if self.phase == Phase::Active {
            info!(
                "Session over: {}/{} correct with {} seconds left",
                self.correct_count,
                self.questions.len(),
                self.remaining_seconds
            );
        }
        self.phase = Phase::Over;
    }

    /// Percentage of all questions answered correctly.
    pub fn score(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        100.0 * self.correct_count as f64 / self.questions.len() as f64
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
