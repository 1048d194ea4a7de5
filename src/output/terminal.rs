use crate::output::{GameOutput, Message};

// Seconds between printed countdown lines
const TIME_LEFT_INTERVAL: u32 = 20;

/// Prints game messages to standard output, one line per event.
#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> Option<String> {
        use Message::*;
        let text = match message {
            GameBegins {
                timer_seconds,
                question_count,
                tier,
            } => format!(
                "Quick Maths! {} questions at difficulty {}, you have {} seconds.\nType the number of your answer and press enter.",
                question_count, tier, timer_seconds
            ),
            QuestionBegins(index, question) => {
                let mut text = format!("\nQuestion {}: {}", index + 1, question.text);
                for (number, option) in question.options.iter().enumerate() {
                    text += &format!("\n  {}) {}", number + 1, option);
                }
                text
            }
            GuessCorrect(answer) => format!("Correct, the answer is {}!", answer),
            GuessIncorrect(answer) => format!("Wrong, the answer was {}.", answer),
            TimeLeft(seconds) if *seconds > 0 && *seconds % TIME_LEFT_INTERVAL == 0 => {
                format!("Time left: {}", seconds)
            }
            TimeLeft(_) => return None,
            TimeRemaining(duration) => format!("{} seconds left!", duration.as_secs()),
            TimeUp => "\nTime's up!".into(),
            GameResults {
                correct_count,
                total_questions,
                score,
            } => format!(
                "\nGAME OVER\nCorrect answers: {} / {}\nScore: {:.2}%",
                correct_count, total_questions, score
            ),
        };
        Some(text)
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        if let Some(text) = self.interpret_message(message) {
            println!("{}", text);
        }
    }
}
