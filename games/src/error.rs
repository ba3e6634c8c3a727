use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("square {0} is not on the board")]
    OutOfBounds(u8),
    #[error("square {0} is already occupied")]
    AlreadyOccupied(u8),
    #[error("there is no heap {0}")]
    NoHeap(u8),
    #[error("cannot take {take} from a heap of {heap}")]
    TakeTooMany { take: u8, heap: u8 },
    #[error("must take at least one object")]
    TakeZero,
    #[error("at most {0} heaps are supported")]
    TooManyHeaps(usize),
}
