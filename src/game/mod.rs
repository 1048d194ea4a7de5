use anyhow::*;
use log::info;
use rand::Rng;
use std::time::Duration;

pub mod clock;
pub mod question;
pub mod session;
pub mod settings;

use crate::game::question::Question;
use crate::game::session::Session;
use crate::game::settings::Settings;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

const ONE_SECOND: Duration = Duration::from_secs(1);
const TIME_WARNINGS: [u32; 2] = [30, 10];

/// Drives a session and reports every change to its output.
pub struct Game<O: GameOutput> {
    session: Session,
    time_elapsed: Duration,
    clock_started: bool,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R, output: O) -> Result<Game<O>> {
        settings.validate()?;
        let session = Session::new(
            settings.timer_seconds,
            settings.tier(),
            settings.question_count,
            rng,
        );
        Ok(Game::with_session(session, output))
    }

    pub fn with_session(session: Session, output: O) -> Game<O> {
        Game {
            session,
            time_elapsed: Duration::default(),
            clock_started: false,
            output,
        }
    }

    pub fn begin(&mut self) {
        self.output.say(&Message::GameBegins {
            timer_seconds: self.session.remaining_seconds(),
            question_count: self.session.total_questions(),
            tier: self.session.tier(),
        });
        self.announce_question();
    }

    /// Feeds wall-clock time to the session, one countdown step per whole second.
    pub fn tick(&mut self, dt: Duration) {
        if self.session.is_over() {
            return;
        }
        self.time_elapsed += dt;
        while self.time_elapsed >= ONE_SECOND && !self.session.is_over() {
            self.time_elapsed -= ONE_SECOND;
            let before = self.session.remaining_seconds();
            self.session.tick();
            let after = self.session.remaining_seconds();
            if self.session.is_over() {
                info!("Time is up");
                self.output.say(&Message::TimeUp);
                self.announce_results();
            } else {
                self.output.say(&Message::TimeLeft(after));
                self.print_time_remaining(before, after);
            }
        }
    }

    /// Checks the selected option against the current question and moves on.
    pub fn select(&mut self, option_index: usize) -> Result<bool> {
        if self.session.is_over() {
            return Err(anyhow!("The game is over"));
        }
        let answer = self
            .session
            .current_question()
            .map(Question::answer)
            .ok_or_else(|| anyhow!("There is no active question"))?;

        let is_correct = self.session.submit_answer(option_index);
        if is_correct {
            self.output.say(&Message::GuessCorrect(answer));
        } else {
            self.output.say(&Message::GuessIncorrect(answer));
        }

        self.session.advance();
        if self.session.is_over() {
            self.announce_results();
        } else {
            self.announce_question();
        }
        Ok(is_correct)
    }

    pub(crate) fn mark_clock_started(&mut self) -> Result<()> {
        if self.clock_started {
            return Err(anyhow!("The clock for this game is already running"));
        }
        self.clock_started = true;
        Ok(())
    }

    fn announce_question(&mut self) {
        let index = self.session.current_index();
        if let Some(question) = self.session.current_question() {
            self.output
                .say(&Message::QuestionBegins(index, question.clone()));
        }
    }

    fn announce_results(&mut self) {
        self.output.say(&Message::GameResults {
            correct_count: self.session.correct_count(),
            total_questions: self.session.total_questions(),
            score: self.session.score(),
        });
    }

    fn print_time_remaining(&mut self, before: u32, after: u32) {
        for threshold in TIME_WARNINGS.iter() {
            if before > *threshold && after <= *threshold {
                self.output
                    .say(&Message::TimeRemaining(Duration::from_secs(*threshold as u64)));
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds()
    }

    pub fn correct_count(&self) -> usize {
        self.session.correct_count()
    }

    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    pub fn score(&self) -> f64 {
        self.session.score()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }
}
