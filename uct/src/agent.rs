use crate::{error::UctError, game::Game};

/// Anything that can pick moves in a game.
pub trait Agent<G: Game> {
    /// Pick a move to play in the given position.
    fn pick(&mut self, game: &G) -> Result<G::Action, UctError>;

    /// Called with every move played by the other side.
    fn observe(&mut self, _action: G::Action) {}

    fn name(&self) -> String;
}
