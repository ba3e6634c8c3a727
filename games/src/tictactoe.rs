use std::fmt::{self, Display};

use uct::{Game, GameResult, Player};

use crate::PlayError;

/// Squares are numbered row by row, `0` is the top left corner.
pub type Square = u8;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Noughts and crosses. The maximizer plays crosses and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    board: [Option<Player>; 9],
    to_move: Player,
    result: GameResult,
}

impl Default for TicTacToe {
    fn default() -> Self {
        TicTacToe {
            board: [None; 9],
            to_move: Player::Max,
            result: GameResult::Ongoing,
        }
    }
}

impl TicTacToe {
    pub fn from_moves(moves: &[Square]) -> Result<Self, PlayError> {
        let mut game = TicTacToe::default();
        for &square in moves {
            game.try_play(square)?;
        }
        Ok(game)
    }

    pub fn get(&self, square: Square) -> Option<Player> {
        self.board.get(square as usize).copied().flatten()
    }

    pub fn try_play(&mut self, square: Square) -> Result<(), PlayError> {
        if !self.result.is_ongoing() {
            return Err(PlayError::GameOver);
        }
        let tile = self
            .board
            .get_mut(square as usize)
            .ok_or(PlayError::OutOfBounds(square))?;
        if tile.is_some() {
            return Err(PlayError::AlreadyOccupied(square));
        }
        *tile = Some(self.to_move);
        self.result = self.check_result();
        self.to_move = self.to_move.next();
        Ok(())
    }

    fn check_result(&self) -> GameResult {
        let winner = LINES.iter().find_map(|line| match line.map(|i| self.board[i]) {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        });
        match winner {
            Some(player) => GameResult::Winner(player),
            None if self.board.iter().all(Option::is_some) => GameResult::Draw,
            None => GameResult::Ongoing,
        }
    }
}

impl Game for TicTacToe {
    type Action = Square;

    fn available_moves(&self) -> Vec<Square> {
        if !self.result.is_ongoing() {
            return Vec::new();
        }
        (0..9).filter(|&square| self.get(square).is_none()).collect()
    }

    fn play(&mut self, square: Square) {
        self.try_play(square).expect("tried to play an illegal move");
    }

    fn player_turn(&self) -> Player {
        self.to_move
    }

    fn result(&self) -> GameResult {
        self.result
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(3) {
            let row: String = row
                .iter()
                .map(|tile| match tile {
                    Some(Player::Max) => 'x',
                    Some(Player::Min) => 'o',
                    None => '.',
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
