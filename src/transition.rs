use super::stochastic::Stochastic;
use super::strength::Strength;
use super::Probability;
use super::N_STATES;
use serde::Deserialize;
use serde::Serialize;

/// Hand strength transition law for crossing one street.
///
/// Rows index the strength on the street being left, columns the strength
/// on the street being entered. A row may be all-zero when it was
/// estimated from data that never visited that strength; propagating mass
/// through such a row loses it instead of inventing a destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transition([[Probability; N_STATES]; N_STATES]);

impl Transition {
    /// P(next = `to` | current = `from`).
    pub fn get(&self, from: Strength, to: Strength) -> Probability {
        self.0[from as usize][to as usize]
    }
    /// Outgoing law of one strength.
    pub fn row(&self, from: Strength) -> &[Probability; N_STATES] {
        &self.0[from as usize]
    }
    /// Row vector times matrix: pushes a weight vector across the street.
    pub fn propagate(&self, alpha: &[Probability; N_STATES]) -> [Probability; N_STATES] {
        let mut next = [0.; N_STATES];
        for (i, a) in alpha.iter().enumerate() {
            for (j, n) in next.iter_mut().enumerate() {
                *n += a * self.0[i][j];
            }
        }
        next
    }
    pub fn inner(&self) -> &[[Probability; N_STATES]; N_STATES] {
        &self.0
    }
}

impl From<[[Probability; N_STATES]; N_STATES]> for Transition {
    fn from(matrix: [[Probability; N_STATES]; N_STATES]) -> Self {
        Self(matrix)
    }
}

impl Stochastic for Transition {
    fn rows(&self) -> impl Iterator<Item = &[Probability]> {
        self.0.iter().map(|row| row.as_slice())
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.iter() {
            for p in row.iter() {
                write!(f, "{:>6.2}", p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
