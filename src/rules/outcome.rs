//! Move Outcome

/// Result of one move against another, from the first move's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// First move beats second move.
    Win,
    /// First move loses to second move.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// The same result seen from the other side.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Line announced to the player when this is the player's result.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "You lose(",
            Self::Draw => "It's a draw!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        })
    }
}
