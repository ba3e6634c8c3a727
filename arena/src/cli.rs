use clap::{ArgEnum, Parser};
use uct::config::{EXPLORATION, SIMULATIONS};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    Nim,
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Uct,
}

/// Pit a UCT agent against a baseline
#[derive(Parser)]
pub struct Args {
    /// Game to play
    #[clap(short, long, arg_enum, default_value = "tic-tac-toe")]
    pub game: GameKind,
    /// Who the UCT agent plays against
    #[clap(short, long, arg_enum, default_value = "random")]
    pub opponent: Opponent,
    /// Number of matches, sides alternate every match
    #[clap(short, long, default_value_t = 10)]
    pub matches: u64,
    /// Simulations per move
    #[clap(short, long, default_value_t = SIMULATIONS)]
    pub simulations: u32,
    /// Exploration constant
    #[clap(short, long, default_value_t = EXPLORATION)]
    pub exploration: f32,
    /// Seed for the rollouts, entropy when left blank
    #[clap(long)]
    pub seed: Option<u64>,
    /// Search every move from scratch
    #[clap(long)]
    pub no_reuse: bool,
    /// Write the log to a file instead of stderr
    #[clap(long)]
    pub log_file: Option<String>,
    /// Log every move and search summary
    #[clap(short, long)]
    pub verbose: bool,
}
