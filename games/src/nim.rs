use std::fmt::{self, Display};

use arrayvec::ArrayVec;
use uct::{Game, GameResult, Player};

use crate::PlayError;

pub const MAX_HEAPS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Take {
    pub heap: u8,
    pub count: u8,
}

/// Normal play Nim: whoever takes the last object wins.
/// The maximizer moves first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nim {
    heaps: ArrayVec<u8, MAX_HEAPS>,
    to_move: Player,
}

impl Nim {
    pub fn new(heaps: &[u8]) -> Result<Self, PlayError> {
        let heaps: ArrayVec<u8, MAX_HEAPS> = heaps
            .try_into()
            .map_err(|_| PlayError::TooManyHeaps(MAX_HEAPS))?;
        Ok(Nim {
            heaps,
            to_move: Player::Max,
        })
    }

    pub fn heaps(&self) -> &[u8] {
        &self.heaps
    }

    /// The position is lost for the player to move iff this is zero.
    pub fn nim_sum(&self) -> u8 {
        self.heaps.iter().fold(0, |sum, heap| sum ^ heap)
    }

    pub fn try_play(&mut self, take: Take) -> Result<(), PlayError> {
        if !self.result().is_ongoing() {
            return Err(PlayError::GameOver);
        }
        let heap = self
            .heaps
            .get_mut(take.heap as usize)
            .ok_or(PlayError::NoHeap(take.heap))?;
        if take.count == 0 {
            return Err(PlayError::TakeZero);
        }
        if take.count > *heap {
            return Err(PlayError::TakeTooMany {
                take: take.count,
                heap: *heap,
            });
        }
        *heap -= take.count;
        self.to_move = self.to_move.next();
        Ok(())
    }
}

impl Game for Nim {
    type Action = Take;

    fn available_moves(&self) -> Vec<Take> {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| {
                (1..=size).map(move |count| Take {
                    heap: heap as u8,
                    count,
                })
            })
            .collect()
    }

    fn play(&mut self, take: Take) {
        self.try_play(take).expect("tried to play an illegal move");
    }

    fn player_turn(&self) -> Player {
        self.to_move
    }

    fn result(&self) -> GameResult {
        if self.heaps.iter().all(|&heap| heap == 0) {
            // the previous player took the last object
            GameResult::Winner(self.to_move.next())
        } else {
            GameResult::Ongoing
        }
    }
}

impl Display for Nim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, heap) in self.heaps.iter().enumerate() {
            writeln!(f, "{i}: {}", "|".repeat(*heap as usize))?;
        }
        Ok(())
    }
}
