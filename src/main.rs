use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use quickmaths::game::clock::{Clock, GameHandle};
use quickmaths::game::question::OPTION_COUNT;
use quickmaths::game::settings::Settings;
use quickmaths::game::Game;
use quickmaths::output::terminal::TerminalOutput;

const CLOCK_PERIOD: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "quickmaths", version, about = "Timed arithmetic quiz")]
struct Cli {
    /// Seconds on the clock
    #[arg(long)]
    timer: Option<u32>,

    /// Difficulty from 1 (single digit sums) to 5 (hardest)
    #[arg(long)]
    difficulty: Option<u8>,

    /// Number of questions in the game
    #[arg(long)]
    questions: Option<usize>,

    /// Seed for reproducible question sets
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file, defaults to settings.toml in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(timer) = self.timer {
            settings.timer_seconds = timer;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(questions) = self.questions {
            settings.question_count = questions;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut settings);
    info!("Starting game with {:?}", settings);

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game: GameHandle<TerminalOutput> = Arc::new(Mutex::new(Game::new(
        &settings,
        &mut rng,
        TerminalOutput::new(),
    )?));
    game.lock().begin();
    let clock = Clock::start(game.clone(), CLOCK_PERIOD)?;

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || forward_lines(io::stdin().lock(), &sender));

    while !game.lock().is_over() {
        match receiver.recv_timeout(CLOCK_PERIOD) {
            Ok(line) => submit_line(&game, &line),
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    clock.stop();
    Ok(())
}

// Sends each input line to the game loop until input ends or the loop is gone
fn forward_lines<R: BufRead>(input: R, sender: &Sender<String>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if sender.send(line).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

fn submit_line(game: &GameHandle<TerminalOutput>, line: &str) {
    let option_number = match line.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= OPTION_COUNT => n,
        _ => {
            println!("Please type a number between 1 and {}", OPTION_COUNT);
            return;
        }
    };
    if let Err(e) = game.lock().select(option_number - 1) {
        warn!("{:#}", e);
    }
}
