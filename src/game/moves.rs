use super::winner::Winner;

/// A playable move. Bomb is the special move: it beats every standard move,
/// ties against another bomb, and each side may play it once per game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn is_special(&self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Outcome of `self` (user) against `other` (bot).
    pub fn versus(&self, other: &Self) -> Winner {
        match (self, other) {
            (a, b) if a == b => Winner::Draw,
            (Self::Bomb, _) => Winner::User,
            (_, Self::Bomb) => Winner::Bot,
            (Self::Rock, Self::Scissors) => Winner::User,
            (Self::Scissors, Self::Paper) => Winner::User,
            (Self::Paper, Self::Rock) => Winner::User,
            _ => Winner::Bot,
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "bomb" => Ok(Self::Bomb),
            other => Err(anyhow::anyhow!("not a move: {}", other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
            Self::Bomb => write!(f, "bomb"),
        }
    }
}

/// What the judge read out of the user's free text.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Interpretation {
    Move(Move),
    Unclear,
    Invalid,
}

impl Interpretation {
    pub fn played(&self) -> Option<Move> {
        match self {
            Self::Move(m) => Some(*m),
            _ => None,
        }
    }
}

/// Anything the judge says that is not a move or "unclear" reads as invalid.
impl From<&str> for Interpretation {
    fn from(s: &str) -> Self {
        match Move::try_from(s) {
            Ok(m) => Self::Move(m),
            Err(_) if s.trim().eq_ignore_ascii_case("unclear") => Self::Unclear,
            Err(_) => Self::Invalid,
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move(m) => write!(f, "{}", m),
            Self::Unclear => write!(f, "unclear"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
