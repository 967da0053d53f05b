use super::action::Action;
use super::error::Error;
use super::model::Model;
use super::strategy::Strategy;
use super::street::Street;
use super::Probability;
use super::N_STATES;
use super::N_STRATEGIES;

/// Forward algorithm over the periodic HMM.
///
/// For a fixed strategy, carries a row vector `alpha` holding
/// P(current strength, every action so far) through the action stream:
///
/// - first action: `alpha = π · diag(E[:, a₀])`
/// - first action of every later hand: `alpha = alpha · diag(π) · diag(E[:, aᵢ])`
/// - any other action: `alpha = alpha · T(street of aᵢ₋₁) · diag(E[:, aᵢ])`
///
/// The hand-boundary step re-anchors every hand to π and treats hands as
/// independent of where the previous one finished.
///
/// The total mass of the final `alpha` is comparable across strategies for
/// the same stream, which is all [`Forward::classify`] needs. Products are
/// taken in plain probability space, so very long streams underflow to 0.
pub struct Forward<'a> {
    model: &'a Model,
}

impl<'a> From<&'a Model> for Forward<'a> {
    fn from(model: &'a Model) -> Self {
        Self { model }
    }
}

impl Forward<'_> {
    /// Final `alpha` vector after the whole stream. `None` when empty.
    pub fn alpha(&self, actions: &[Action], strategy: Strategy) -> Result<Option<[Probability; N_STATES]>, Error> {
        let emission = self.model.emission(strategy);
        let initial = self.model.initial();
        let mut alpha: Option<[Probability; N_STATES]> = None;
        for (i, action) in actions.iter().copied().enumerate() {
            let street = Street::from(i);
            let prior = match alpha {
                None => *initial.inner(),
                Some(ref a) if street.is_opening() => initial.reset(a),
                Some(ref a) => self.model.transition(Street::from(i - 1))?.propagate(a),
            };
            alpha = Some(emission.observe(&prior, action));
        }
        Ok(alpha)
    }

    /// Likelihood of the stream under one strategy. Zero for an empty stream.
    pub fn likelihood(&self, actions: &[Action], strategy: Strategy) -> Result<Probability, Error> {
        self.alpha(actions, strategy)
            .map(|alpha| alpha.map_or(0., |a| a.iter().sum()))
    }

    /// Likelihood of the stream under every strategy.
    pub fn likelihoods(&self, actions: &[Action]) -> Result<Likelihoods, Error> {
        let mut scores = [0.; N_STRATEGIES];
        for strategy in Strategy::all() {
            scores[strategy as usize] = self.likelihood(actions, strategy)?;
        }
        Ok(Likelihoods(scores))
    }

    /// Strategy with the highest likelihood.
    pub fn classify(&self, actions: &[Action]) -> Result<Strategy, Error> {
        self.likelihoods(actions).map(|l| l.argmax())
    }
}

/// Unnormalized per-strategy likelihoods of one action stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Likelihoods([Probability; N_STRATEGIES]);

impl Likelihoods {
    pub fn get(&self, strategy: Strategy) -> Probability {
        self.0[strategy as usize]
    }
    /// Highest-scoring strategy, earliest in enumeration order on ties.
    pub fn argmax(&self) -> Strategy {
        Strategy::all()
            .into_iter()
            .fold(Strategy::default(), |best, s| {
                if self.get(s) > self.get(best) { s } else { best }
            })
    }
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, Probability)> + '_ {
        Strategy::all().into_iter().map(|s| (s, self.get(s)))
    }
}

impl std::fmt::Display for Likelihoods {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (strategy, p) in self.iter() {
            writeln!(f, "{:<18}{:>14.6e}", strategy, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Distribution;
    use crate::Emission;
    use crate::Strength;

    fn brute(model: &Model, actions: &[Action], strategy: Strategy) -> Probability {
        // sum over every hidden path of a single hand
        let emission = model.emission(strategy);
        let mut total = 0.;
        let n = actions.len();
        for code in 0..N_STATES.pow(n as u32) {
            let path = (0..n)
                .map(|t| Strength::try_from(code / N_STATES.pow(t as u32) % N_STATES).unwrap())
                .collect::<Vec<_>>();
            let mut p = model.initial().get(path[0]) * emission.get(path[0], actions[0]);
            for t in 1..n {
                let transition = model.transition(Street::from(t - 1)).unwrap();
                p *= transition.get(path[t - 1], path[t]) * emission.get(path[t], actions[t]);
            }
            total += p;
        }
        total
    }

    #[test]
    fn first_alpha_scales_initial_by_fold_column() {
        let reference = Model::default();
        let model = Model::new(
            [
                *reference.transition(Street::Pref).unwrap(),
                *reference.transition(Street::Flop).unwrap(),
                *reference.transition(Street::Turn).unwrap(),
            ],
            Strategy::all().map(|s| *reference.emission(s)),
            Distribution::from([0.2, 0.3, 0.28, 0.16, 0.06]),
        )
        .unwrap();
        let alpha = Forward::from(&model)
            .alpha(&[Action::Fold], Strategy::TightAggressive)
            .unwrap()
            .unwrap();
        assert_eq!(alpha, [0.2 * 0.85, 0.3 * 0.50, 0.28 * 0.10, 0.16 * 0.00, 0.06 * 0.00]);
    }

    #[test]
    fn empty_stream_is_zero() {
        let model = Model::default();
        let forward = Forward::from(&model);
        for strategy in Strategy::all() {
            assert_eq!(forward.likelihood(&[], strategy), Ok(0.));
        }
    }

    #[test]
    fn single_hand_matches_path_enumeration() {
        let model = Model::default();
        let forward = Forward::from(&model);
        let actions = [Action::Check, Action::Call, Action::Bet, Action::Raise];
        for strategy in Strategy::all() {
            let exact = brute(&model, &actions, strategy);
            let fast = forward.likelihood(&actions, strategy).unwrap();
            assert!((exact - fast).abs() < 1e-12, "{}: {} ≠ {}", strategy, exact, fast);
        }
    }

    #[test]
    fn second_hand_resets_elementwise() {
        let model = Model::default();
        let forward = Forward::from(&model);
        let strategy = Strategy::LooseAggressive;
        let first = [Action::Call, Action::Call, Action::Bet, Action::Check];
        let ref alpha = forward.alpha(&first, strategy).unwrap().unwrap();
        let emission = model.emission(strategy);
        let expected = emission
            .observe(&model.initial().reset(alpha), Action::Raise)
            .iter()
            .sum::<Probability>();
        let stream = [&first[..], &[Action::Raise]].concat();
        assert_eq!(forward.likelihood(&stream, strategy), Ok(expected));
    }

    #[test]
    fn deterministic() {
        let model = Model::default();
        let forward = Forward::from(&model);
        let actions = (0..32).map(|_| Action::random()).collect::<Vec<_>>();
        for strategy in Strategy::all() {
            let a = forward.likelihood(&actions, strategy).unwrap();
            let b = forward.likelihood(&actions, strategy).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
            assert!(a >= 0.);
        }
    }

    #[test]
    fn maniac_never_folds() {
        let model = Model::default();
        let forward = Forward::from(&model);
        let likelihoods = forward.likelihoods(&[Action::Fold]).unwrap();
        assert_eq!(likelihoods.get(Strategy::Maniac), 0.);
        assert_eq!(likelihoods.argmax(), Strategy::TightPassive);
    }

    #[test]
    fn aggression_reads_as_aggressive() {
        let model = Model::default();
        let forward = Forward::from(&model);
        let stream = [Action::Bet, Action::Raise, Action::Bet, Action::Raise].repeat(5);
        let strategy = forward.classify(&stream).unwrap();
        assert!(matches!(strategy, Strategy::Maniac | Strategy::LooseAggressive));
    }

    #[test]
    fn ties_resolve_to_first_strategy() {
        let flat = Emission::from([[0.2; 5]; 5]);
        let model = Model::default().with_emissions([flat; N_STRATEGIES]).unwrap();
        let forward = Forward::from(&model);
        let strategy = forward.classify(&[Action::Call, Action::Bet]).unwrap();
        assert_eq!(strategy, Strategy::TightAggressive);
    }
}
