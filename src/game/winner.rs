use colored::*;

/// Who took the round. `None` covers wasted turns (invalid or unclear moves).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Winner {
    User,
    Bot,
    Draw,
    #[default]
    None,
}

impl From<&str> for Winner {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "user" => Self::User,
            "bot" => Self::Bot,
            "draw" => Self::Draw,
            _ => Self::None,
        }
    }
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::Draw => "draw",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shouted form used in the round banner.
pub struct Headline(pub Winner);

impl std::fmt::Display for Headline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.0.label().to_uppercase();
        match self.0 {
            Winner::User => write!(f, "{}", text.green()),
            Winner::Bot => write!(f, "{}", text.red()),
            Winner::Draw => write!(f, "{}", text.yellow()),
            Winner::None => write!(f, "{}", text.dimmed()),
        }
    }
}
