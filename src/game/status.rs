/// Whether the judge accepted the move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Status {
    Valid,
    Invalid,
    Unclear,
}

impl Status {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "VALID" => Self::Valid,
            "UNCLEAR" => Self::Unclear,
            _ => Self::Invalid,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "VALID"),
            Self::Invalid => write!(f, "INVALID"),
            Self::Unclear => write!(f, "UNCLEAR"),
        }
    }
}
