use super::error::Error;
use super::stochastic::Stochastic;
use super::strength::Strength;
use super::Count;
use super::Probability;
use super::N_STATES;
use super::STATIONARY;
use serde::Deserialize;
use serde::Serialize;

/// Hand strength law on the first street of a hand (π).
///
/// Seeds the Viterbi trellis and re-anchors the forward pass at the start
/// of every hand after the first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution([Probability; N_STATES]);

impl Distribution {
    pub fn get(&self, strength: Strength) -> Probability {
        self.0[strength as usize]
    }
    /// Row vector times `diag(π)`.
    ///
    /// This is an elementwise rescale, not a fresh draw: mass stays on the
    /// strength the previous hand ended on and is weighted by how likely
    /// that strength is to open a hand.
    pub fn reset(&self, alpha: &[Probability; N_STATES]) -> [Probability; N_STATES] {
        std::array::from_fn(|s| alpha[s] * self.0[s])
    }
    pub fn inner(&self) -> &[Probability; N_STATES] {
        &self.0
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self(STATIONARY)
    }
}

impl From<[Probability; N_STATES]> for Distribution {
    fn from(pi: [Probability; N_STATES]) -> Self {
        Self(pi)
    }
}

/// normalized frequencies
impl TryFrom<[Count; N_STATES]> for Distribution {
    type Error = Error;
    fn try_from(counts: [Count; N_STATES]) -> Result<Self, Self::Error> {
        match counts.iter().sum::<Count>() {
            0 => Err(Error::EmptyDataset),
            n => Ok(Self(counts.map(|c| c as Probability / n as Probability))),
        }
    }
}

impl Stochastic for Distribution {
    fn rows(&self) -> impl Iterator<Item = &[Probability]> {
        std::iter::once(self.0.as_slice())
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (strength, p) in Strength::all().iter().zip(self.0.iter()) {
            writeln!(f, "{:<12}{:>9.6}", strength, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_is_valid() {
        assert!(Distribution::default().validate("initial").is_ok());
    }

    #[test]
    fn vacant_initial_is_not_a_distribution() {
        // unlike transition rows, the initial law must carry mass
        assert!(!crate::is_distribution(Distribution::from([0.; N_STATES]).inner()));
    }

    #[test]
    fn normalizes_counts() {
        let pi = Distribution::try_from([1 as Count, 3, 0, 0, 4]).unwrap();
        assert_eq!(pi.inner(), &[0.125, 0.375, 0., 0., 0.5]);
    }

    #[test]
    fn empty_counts() {
        assert_eq!(Distribution::try_from([0 as Count; N_STATES]), Err(Error::EmptyDataset));
    }

    #[test]
    fn reset_is_elementwise() {
        let pi = Distribution::from([0.2, 0.3, 0.28, 0.16, 0.06]);
        let alpha = [1., 0., 2., 0., 1.];
        assert_eq!(pi.reset(&alpha), [0.2, 0., 0.56, 0., 0.06]);
    }
}
