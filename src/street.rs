use super::error::Error;
use super::N_STREETS;

/// The four betting rounds of a hand, in the order they are played.
///
/// Observations cycle through the streets: observation `i` of an action
/// stream is played on `Street::from(i)`, and every preflop after the first
/// starts a new hand. The street an observation is played on selects the
/// [`Transition`](super::transition::Transition) that governs the move into
/// the next observation, so only the first three streets own one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; N_STREETS] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
    /// The following street. Panics on river.
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("terminal"),
        }
    }
    /// Whether an observation on this street opens a new hand.
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Pref)
    }
    /// Index of the transition that leaves this street.
    /// The river is terminal within a hand and owns none.
    pub fn transition(&self) -> Result<usize, Error> {
        match self {
            Self::Rive => Err(Error::UnknownStreet(*self)),
            street => Ok(*street as usize),
        }
    }
}

/// observation index, cycling every hand
impl From<usize> for Street {
    fn from(i: usize) -> Self {
        match i % N_STREETS {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().chars().next() {
            Some('P') => Ok(Self::Pref),
            Some('F') => Ok(Self::Flop),
            Some('T') => Ok(Self::Turn),
            Some('R') => Ok(Self::Rive),
            _ => Err(Error::InvalidObservation(format!("invalid street: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_every_hand() {
        for i in 0..16 {
            assert_eq!(Street::from(i), Street::all()[i % 4]);
        }
        assert!(Street::from(8).is_opening());
        assert!(!Street::from(9).is_opening());
    }

    #[test]
    fn river_owns_no_transition() {
        assert_eq!(Street::Pref.transition(), Ok(0));
        assert_eq!(Street::Flop.transition(), Ok(1));
        assert_eq!(Street::Turn.transition(), Ok(2));
        assert_eq!(
            Street::Rive.transition(),
            Err(Error::UnknownStreet(Street::Rive))
        );
    }

    #[test]
    fn parses_labels() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.label()), Ok(street));
            assert_eq!(Street::try_from(street.to_string().as_str()), Ok(street));
        }
        assert!(Street::try_from("showdown").is_err());
    }
}
