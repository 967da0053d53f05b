use super::error::Error;
use super::Arbitrary;
use super::N_ACTIONS;

/// Observable betting action, ordered from most to least passive.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    #[default]
    Fold = 0,
    Check = 1,
    Call = 2,
    Bet = 3,
    Raise = 4,
}

impl Action {
    /// All five actions in column order of an [`Emission`](super::emission::Emission).
    pub const fn all() -> [Self; N_ACTIONS] {
        [Self::Fold, Self::Check, Self::Call, Self::Bet, Self::Raise]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fold => "Fold",
            Self::Check => "Check",
            Self::Call => "Call",
            Self::Bet => "Bet",
            Self::Raise => "Raise",
        }
    }
}

/// usize isomorphism
impl TryFrom<usize> for Action {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| Error::InvalidObservation(format!("action out of range: {}", n)))
    }
}
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Action {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(n) => Self::try_from(n),
            Err(_) => Self::all()
                .into_iter()
                .find(|a| a.label().eq_ignore_ascii_case(s))
                .ok_or_else(|| Error::InvalidObservation(format!("invalid action: {}", s))),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Action {
    fn random() -> Self {
        Self::all()[rand::random_range(0..N_ACTIONS)]
    }
}
