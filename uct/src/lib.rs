// Bandit based Monte-Carlo Planning (Kocsis & Szepesvári 2006)
// http://ggp.stanford.edu/readings/uct.pdf

mod agent;
pub mod config;
mod debug;
mod error;
mod exploration;
mod game;
mod node;
mod random;
mod search;
mod strategy;

pub use agent::Agent;
pub use config::UctConfig;
pub use error::*;
pub use exploration::{lower_confidence_bound, upper_confidence_bound};
pub use game::{Game, GameResult, Player};
pub use node::{Edge, Node};
pub use random::RandomPlayer;
pub use search::{Distribution, Uct};
pub use strategy::{RandomRollout, Strategy};
