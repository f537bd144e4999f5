//! The contract between the tree search and a concrete game

/// One of the two sides of a game
///
/// Which side the search maximizes for is chosen per invocation, not fixed
/// per game.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A game position the tree search can explore
///
/// The search never mutates a position, it only reads it and recurses into
/// successors, so implementations hand out fresh values from
/// [`successors`](Position::successors).
pub trait Position: Sized {
    /// Every position reachable from this one by a single legal move, in a
    /// stable order. An empty collection signals a terminal position.
    fn successors(&self) -> Vec<Self>;

    /// The side to move at this position
    fn to_move(&self) -> Player;

    /// The number of maximal contiguous runs of exactly `length` tiles
    /// owned by `player`. The evaluator only queries lengths 2 to 4.
    fn count_lines(&self, length: usize, player: Player) -> usize;
}
