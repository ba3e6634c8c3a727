mod error;
mod nim;
mod tictactoe;

pub use error::PlayError;
pub use nim::{Nim, Take, MAX_HEAPS};
pub use tictactoe::{Square, TicTacToe};
