//! Game state types.

/// Where the game stands between rounds.
///
/// `Playing` is the only state that accepts another round; the other three
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Rounds can still be played.
    #[default]
    Playing,
    /// The balance reached the win threshold.
    Won,
    /// The balance dropped to zero.
    Lost,
    /// The player walked away before either threshold was met.
    QuitByChoice,
}

impl GameState {
    /// Returns `true` for `Won`, `Lost` and `QuitByChoice`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}
