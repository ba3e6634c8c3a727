use std::{fmt::Debug, hash::Hash};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}

impl GameResult {
    /// Outcome from the perspective of the maximizing player.
    pub fn value(self) -> f32 {
        match self {
            GameResult::Winner(Player::Max) => 1.0,
            GameResult::Winner(Player::Min) => -1.0,
            GameResult::Draw | GameResult::Ongoing => 0.0,
        }
    }

    pub fn is_ongoing(self) -> bool {
        matches!(self, GameResult::Ongoing)
    }
}

/// A two-player, perfect-information, turn-based game.
///
/// The search only ever reads the caller's game; every simulation works on
/// its own clone.
pub trait Game: Clone {
    type Action: Copy + Ord + Hash + Debug;

    /// Legal moves in the current position. Empty iff the game is over.
    fn available_moves(&self) -> Vec<Self::Action>;

    /// Apply a move taken from [`Game::available_moves`].
    fn play(&mut self, action: Self::Action);

    /// Whose turn it is.
    fn player_turn(&self) -> Player;

    fn result(&self) -> GameResult;
}
