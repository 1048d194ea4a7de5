use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

mod options;

pub use self::options::{build_options, OPTION_COUNT};


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tier {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Tier {
    pub fn level(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
            Tier::Four => 4,
            Tier::Five => 5,
        }
    }

    fn operations(self) -> &'static [Operation] {
        use Operation::*;
        match self {
            Tier::One => &[Add, Subtract],
            Tier::Two => &[Multiply, Divide, Add, Subtract],
            Tier::Three | Tier::Four | Tier::Five => &[Multiply, Divide, Add, Subtract, Equate],
        }
    }
}

impl From<u8> for Tier {
    fn from(level: u8) -> Self {
        match level {
            1 => Tier::One,
            2 => Tier::Two,
            3 => Tier::Three,
            4 => Tier::Four,
            5 => Tier::Five,
            other => {
                warn!("Unknown difficulty {}, falling back to tier 1", other);
                Tier::One
            }
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::One
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equate,
}

/// A problem statement and the value that solves it, before any options are drawn.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Problem {
    text: String,
    answer: u32,
}

impl Problem {
    fn sum(a: u32, b: u32) -> Self {
        Problem {
            text: format!("{} + {}", a, b),
            answer: a + b,
        }
    }

    // Minuend is built from the answer so the result can never go negative
    fn difference(answer: u32, subtrahend: u32) -> Self {
        Problem {
            text: format!("{} - {}", answer + subtrahend, subtrahend),
            answer,
        }
    }

    fn product(a: u32, b: u32, sign: &str) -> Self {
        Problem {
            text: format!("{} {} {}", a, sign, b),
            answer: a * b,
        }
    }

    // Dividend is built from the answer so the quotient is always exact
    fn quotient(answer: u32, divisor: u32) -> Self {
        Problem {
            text: format!("{} / {}", answer * divisor, divisor),
            answer,
        }
    }

    fn missing_addend(a: u32, addend: u32) -> Self {
        Problem {
            text: format!("{} + ? = {}", a, a + addend),
            answer: addend,
        }
    }
}

fn operand<R: Rng + ?Sized>(rng: &mut R, low: u32, high: u32) -> u32 {
    rng.gen_range(low, high + 1)
}

fn make_problem<R: Rng + ?Sized>(tier: Tier, operation: Operation, rng: &mut R) -> Problem {
    use Operation::*;
    match tier {
        Tier::One => {
            let a = operand(rng, 1, 9);
            let b = operand(rng, 1, 9);
            match operation {
                Subtract => Problem::difference(a, b),
                _ => Problem::sum(a, b),
            }
        }
        Tier::Two => {
            let a = operand(rng, 2, 9);
            let b = operand(rng, 2, 9);
            let c = operand(rng, 10, 99);
            match operation {
                Multiply => Problem::product(a, b, "*"),
                Divide => Problem::quotient(a, b),
                Subtract => Problem::difference(a, c),
                _ => Problem::sum(c, a),
            }
        }
        Tier::Three => {
            let a = operand(rng, 10, 99);
            let b = operand(rng, 3, 9);
            let c = operand(rng, 10, 99);
            match operation {
                Multiply => Problem::product(a, b, "*"),
                Divide => Problem::quotient(a, b),
                Add => Problem::sum(a, c),
                Subtract => Problem::difference(a, c),
                Equate => Problem::missing_addend(a, c),
            }
        }
        Tier::Four => {
            let a = operand(rng, 11, 99);
            let b = operand(rng, 11, 99);
            let c = operand(rng, 100, 999);
            match operation {
                Multiply => Problem::product(a, b, "x"),
                Divide => Problem::quotient(a, operand(rng, 3, 20)),
                Add => Problem::sum(c, a),
                Subtract => Problem::difference(a, c),
                Equate => Problem::missing_addend(a, c),
            }
        }
        Tier::Five => {
            let a = operand(rng, 11, 99);
            let b = operand(rng, 11, 99);
            match operation {
                Multiply => Problem::product(a, b, "x"),
                Divide => Problem::quotient(a, b),
                Add => Problem::sum(a, operand(rng, 100, 999)),
                Subtract => Problem::difference(a, operand(rng, 100, 999)),
                Equate => Problem::missing_addend(a, operand(rng, 100, 999)),
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub correct_answer_index: usize,
    pub options: [u32; OPTION_COUNT],
}

impl Question {
    /// Generates a random question for the given tier.
    pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Question {
        let operation = *tier
            .operations()
            .choose(rng)
            .unwrap_or(&Operation::Add);
        let problem = make_problem(tier, operation, rng);
        let (options, correct_answer_index) = build_options(problem.answer, rng);
        debug!(
            "Generated tier {} question: {} = {}",
            tier, problem.text, problem.answer
        );
        Question {
            text: problem.text,
            correct_answer_index,
            options,
        }
    }

    pub fn answer(&self) -> u32 {
        self.options[self.correct_answer_index]
    }

    /// Whether the option at `index` holds the same value as the correct option.
    pub fn is_option_correct(&self, index: usize) -> bool {
        match self.options.get(index) {
            Some(value) => *value == self.answer(),
            None => false,
        }
    }
}

pub fn generate_questions<R: Rng + ?Sized>(tier: Tier, count: usize, rng: &mut R) -> Vec<Question> {
    (0..count).map(|_| Question::generate(tier, rng)).collect()
}
