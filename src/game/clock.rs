use anyhow::*;
use log::debug;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::game::Game;
use crate::output::GameOutput;

pub type GameHandle<O> = Arc<Mutex<Game<O>>>;

/// Background thread feeding elapsed wall-clock time to a game.
///
/// The thread wakes up every `period`, ticks the game with the time that actually
/// passed and exits on its own once the game is over. A game accepts a single
/// clock; starting a second one fails.
pub struct Clock {
    stopped: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start<O>(game: GameHandle<O>, period: Duration) -> Result<Clock>
    where
        O: GameOutput + Send + 'static,
    {
        game.lock().mark_clock_started()?;

        let stopped = Arc::new(AtomicBool::new(false));
        let thread_stopped = stopped.clone();
        let handle = thread::Builder::new()
            .name("quickmaths-clock".to_owned())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    thread::sleep(period);
                    if thread_stopped.load(Ordering::SeqCst) {
                        break;
                    }
                    let now = Instant::now();
                    let mut game = game.lock();
                    game.tick(now.duration_since(last_tick));
                    last_tick = now;
                    if game.is_over() {
                        break;
                    }
                }
                debug!("Clock thread exiting");
            })
            .context("Could not spawn clock thread")?;

        Ok(Clock {
            stopped,
            handle: Some(handle),
        })
    }

    /// Halts further ticks and waits for the clock thread to finish.
    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.halt();
    }
}
