use super::distribution::Distribution;
use super::emission::Emission;
use super::error::Error;
use super::stochastic::is_distribution;
use super::stochastic::Stochastic;
use super::strategy::Strategy;
use super::street::Street;
use super::transition::Transition;
use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The full, validated parameter set of the periodic HMM.
///
/// Built once, either from the reference tables ([`Model::default`]) or
/// from data via [`Census`](super::census::Census), and never mutated
/// afterwards. Every evaluator borrows it read-only, so one instance can
/// back any number of concurrent queries.
///
/// # Invariants
///
/// - every transition and emission row sums to one within [`TOLERANCE`],
///   or is identically zero
/// - the initial distribution sums to one within [`TOLERANCE`]
///
/// Deserialization goes through [`Parameters`] and the same validation, so
/// a malformed JSON model is rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Parameters", into = "Parameters")]
pub struct Model {
    transitions: [Transition; N_TRANSITIONS],
    emissions: [Emission; N_STRATEGIES],
    initial: Distribution,
}

impl Model {
    /// Validates and assembles a model.
    ///
    /// `transitions` are ordered by the street they leave (preflop, flop,
    /// turn); `emissions` by [`Strategy::all`].
    pub fn new(
        transitions: [Transition; N_TRANSITIONS],
        emissions: [Emission; N_STRATEGIES],
        initial: Distribution,
    ) -> Result<Self, Error> {
        for (street, transition) in Street::all().iter().zip(transitions.iter()) {
            transition.validate(&format!("{} transition", street))?;
        }
        for (strategy, emission) in Strategy::all().iter().zip(emissions.iter()) {
            emission.validate(&format!("{} emission", strategy))?;
        }
        if !is_distribution(initial.inner()) {
            return Err(Error::InvalidModel(format!(
                "initial distribution is not stochastic: {:?}",
                initial.inner()
            )));
        }
        log::debug!("{:<32}{:<32}", "validated model", "ok");
        Ok(Self {
            transitions,
            emissions,
            initial,
        })
    }

    /// Law governing the move out of `street` into the next one.
    /// Fails for the river, which ends the hand.
    pub fn transition(&self, street: Street) -> Result<&Transition, Error> {
        street.transition().map(|i| &self.transitions[i])
    }
    /// Emission matrix of a strategy.
    pub fn emission(&self, strategy: Strategy) -> &Emission {
        &self.emissions[strategy as usize]
    }
    /// Initial hand strength law, π.
    pub fn initial(&self) -> &Distribution {
        &self.initial
    }
    /// Replaces the emissions, keeping transitions and π.
    pub fn with_emissions(&self, emissions: [Emission; N_STRATEGIES]) -> Result<Self, Error> {
        Self::new(self.transitions, emissions, self.initial)
    }
}

/// The reference parameters, estimated offline from simulated deals.
impl Default for Model {
    fn default() -> Self {
        Self {
            transitions: [
                Transition::from(TRANSITION_PREFLOP),
                Transition::from(TRANSITION_FLOP),
                Transition::from(TRANSITION_TURN),
            ],
            emissions: [
                Emission::from(EMISSION_TIGHT_AGGRESSIVE),
                Emission::from(EMISSION_LOOSE_AGGRESSIVE),
                Emission::from(EMISSION_TIGHT_PASSIVE),
                Emission::from(EMISSION_LOOSE_PASSIVE),
                Emission::from(EMISSION_MANIAC),
            ],
            initial: Distribution::default(),
        }
    }
}

/// Serialized shape of a [`Model`], keyed by name rather than position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    pub preflop: Transition,
    pub flop: Transition,
    pub turn: Transition,
    pub emissions: BTreeMap<Strategy, Emission>,
    pub initial: Distribution,
}

impl TryFrom<Parameters> for Model {
    type Error = Error;
    fn try_from(parameters: Parameters) -> Result<Self, Self::Error> {
        let mut emissions = [Emission::from([[0.; N_ACTIONS]; N_STATES]); N_STRATEGIES];
        for strategy in Strategy::all() {
            emissions[strategy as usize] = parameters
                .emissions
                .get(&strategy)
                .copied()
                .ok_or_else(|| Error::InvalidModel(format!("missing {} emission", strategy)))?;
        }
        Self::new(
            [parameters.preflop, parameters.flop, parameters.turn],
            emissions,
            parameters.initial,
        )
    }
}

impl From<Model> for Parameters {
    fn from(model: Model) -> Self {
        let [preflop, flop, turn] = model.transitions;
        Self {
            preflop,
            flop,
            turn,
            emissions: Strategy::all()
                .into_iter()
                .map(|s| (s, *model.emission(s)))
                .collect(),
            initial: model.initial,
        }
    }
}
