use super::error::Error;
use super::Arbitrary;
use super::N_STATES;

/// Latent hand strength category at a single street.
///
/// The five levels bucket a Monte Carlo equity estimate into fifths, so
/// the ordering is meaningful: neighbouring categories are "close", which
/// is what the ±1 agreement in [`Accuracy`](super::accuracy::Accuracy)
/// relies on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    #[default]
    VeryWeak = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl Strength {
    /// All five categories, weakest first.
    pub const fn all() -> [Self; N_STATES] {
        [
            Self::VeryWeak,
            Self::Weak,
            Self::Medium,
            Self::Strong,
            Self::VeryStrong,
        ]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
    /// Number of categories separating two strengths.
    pub const fn distance(&self, other: &Self) -> usize {
        (*self as usize).abs_diff(*other as usize)
    }
}

/// usize isomorphism
impl TryFrom<usize> for Strength {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| Error::InvalidObservation(format!("hand strength out of range: {}", n)))
    }
}
impl From<Strength> for usize {
    fn from(s: Strength) -> usize {
        s as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Strength {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(n) => Self::try_from(n),
            Err(_) => Self::all()
                .into_iter()
                .find(|x| x.label().replace(' ', "").eq_ignore_ascii_case(&s.replace([' ', '_'], "")))
                .ok_or_else(|| Error::InvalidObservation(format!("invalid hand strength: {}", s))),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Strength {
    fn random() -> Self {
        Self::all()[rand::random_range(0..N_STATES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for strength in Strength::all() {
            assert_eq!(Strength::try_from(usize::from(strength)), Ok(strength));
        }
        assert!(Strength::try_from(N_STATES).is_err());
    }

    #[test]
    fn parses_labels_and_indices() {
        assert_eq!(Strength::try_from("Very Strong"), Ok(Strength::VeryStrong));
        assert_eq!(Strength::try_from("very_weak"), Ok(Strength::VeryWeak));
        assert_eq!(Strength::try_from("2"), Ok(Strength::Medium));
        assert!(Strength::try_from("7").is_err());
        assert!(Strength::try_from("nuts").is_err());
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Strength::Weak.distance(&Strength::Strong), 2);
        assert_eq!(Strength::Strong.distance(&Strength::Weak), 2);
        assert_eq!(Strength::Medium.distance(&Strength::Medium), 0);
    }
}
