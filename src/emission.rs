use super::action::Action;
use super::stochastic::Stochastic;
use super::strength::Strength;
use super::Probability;
use super::N_ACTIONS;
use super::N_STATES;
use serde::Deserialize;
use serde::Serialize;

/// P(action | hand strength) for one strategy.
///
/// Rows are hand strengths, columns are actions. The forward pass needs
/// the same numbers as a diagonal matrix per action; [`Emission::diagonal`]
/// reads that view straight out of the stored matrix so the two can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emission([[Probability; N_ACTIONS]; N_STATES]);

impl Emission {
    /// P(`action` | `strength`).
    pub fn get(&self, strength: Strength, action: Action) -> Probability {
        self.0[strength as usize][action as usize]
    }
    /// Action distribution of one strength.
    pub fn row(&self, strength: Strength) -> &[Probability; N_ACTIONS] {
        &self.0[strength as usize]
    }
    /// Diagonal of the per-action observation matrix, i.e. the action's
    /// column indexed by strength.
    pub fn diagonal(&self, action: Action) -> [Probability; N_STATES] {
        std::array::from_fn(|s| self.0[s][action as usize])
    }
    /// Row vector times `diag(E[:, action])`.
    pub fn observe(&self, alpha: &[Probability; N_STATES], action: Action) -> [Probability; N_STATES] {
        let diagonal = self.diagonal(action);
        std::array::from_fn(|s| alpha[s] * diagonal[s])
    }
    pub fn inner(&self) -> &[[Probability; N_ACTIONS]; N_STATES] {
        &self.0
    }
}

impl From<[[Probability; N_ACTIONS]; N_STATES]> for Emission {
    fn from(matrix: [[Probability; N_ACTIONS]; N_STATES]) -> Self {
        Self(matrix)
    }
}

impl Stochastic for Emission {
    fn rows(&self) -> impl Iterator<Item = &[Probability]> {
        self.0.iter().map(|row| row.as_slice())
    }
}
