pub mod game;
pub mod output;
