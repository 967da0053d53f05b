use super::action::Action;
use super::error::Error;
use super::model::Model;
use super::strategy::Strategy;
use super::strength::Strength;
use super::Probability;
use super::N_STRATEGIES;

/// Probability mass over strategies.
///
/// Serves as both prior and posterior. A posterior is either normalized,
/// or all-zero when no strategy can produce the evidence at all; the
/// all-zero case is reported through [`Posterior::is_degenerate`] instead
/// of an error so batch classification never has to stop for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posterior([Probability; N_STRATEGIES]);

impl Posterior {
    /// Equal mass on every strategy.
    pub fn uniform() -> Self {
        Self([1. / N_STRATEGIES as Probability; N_STRATEGIES])
    }
    pub fn get(&self, strategy: Strategy) -> Probability {
        self.0[strategy as usize]
    }
    pub fn total(&self) -> Probability {
        self.0.iter().sum()
    }
    /// No strategy explains the evidence.
    pub fn is_degenerate(&self) -> bool {
        self.0.iter().all(|p| *p == 0.)
    }
    /// Most probable strategy, earliest in enumeration order on ties.
    /// `None` for degenerate evidence.
    pub fn argmax(&self) -> Option<Strategy> {
        match self.is_degenerate() {
            true => None,
            false => Some(
                Strategy::all()
                    .into_iter()
                    .fold(Strategy::default(), |best, s| {
                        if self.get(s) > self.get(best) { s } else { best }
                    }),
            ),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, Probability)> + '_ {
        Strategy::all().into_iter().map(|s| (s, self.get(s)))
    }
}

impl Default for Posterior {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Prior from raw weights. They need not be normalized, only their ratios
/// matter, but each must be finite and non-negative and some must be positive.
impl TryFrom<[Probability; N_STRATEGIES]> for Posterior {
    type Error = Error;
    fn try_from(weights: [Probability; N_STRATEGIES]) -> Result<Self, Self::Error> {
        match weights.iter().all(|w| w.is_finite() && *w >= 0.) && weights.iter().any(|w| *w > 0.) {
            true => Ok(Self(weights)),
            false => Err(Error::InvalidObservation(format!("invalid prior weights: {:?}", weights))),
        }
    }
}

impl std::fmt::Display for Posterior {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (strategy, p) in self.iter() {
            writeln!(f, "{:<18}{:>8.4}", strategy, p)?;
        }
        Ok(())
    }
}

/// Bayes' rule over strategies when the hand strengths are known.
///
/// With the strengths given, only the emission model matters: the
/// likelihood of a strategy is the product of `E[strength][action]` over
/// every observation. Transitions and π play no part.
pub struct Estimator<'a> {
    model: &'a Model,
}

impl<'a> From<&'a Model> for Estimator<'a> {
    fn from(model: &'a Model) -> Self {
        Self { model }
    }
}

impl Estimator<'_> {
    /// P(actions | strategy, strengths).
    pub fn likelihood(&self, strategy: Strategy, actions: &[Action], states: &[Strength]) -> Result<Probability, Error> {
        if actions.len() != states.len() {
            return Err(Error::InvalidObservation(format!(
                "{} actions against {} hand strengths",
                actions.len(),
                states.len()
            )));
        }
        let emission = self.model.emission(strategy);
        Ok(actions
            .iter()
            .zip(states.iter())
            .map(|(a, s)| emission.get(*s, *a))
            .product())
    }

    /// P(strategy | actions, strengths) under `prior`, uniform if absent.
    pub fn posterior(&self, actions: &[Action], states: &[Strength], prior: Option<&Posterior>) -> Result<Posterior, Error> {
        let ref prior = prior.copied().unwrap_or_default();
        let mut joint = [0.; N_STRATEGIES];
        for strategy in Strategy::all() {
            joint[strategy as usize] = self.likelihood(strategy, actions, states)? * prior.get(strategy);
        }
        let total = joint.iter().sum::<Probability>();
        match total > 0. {
            true => Ok(Posterior(joint.map(|p| p / total))),
            false => Ok(Posterior([0.; N_STRATEGIES])),
        }
    }

    /// Online tracking: the posterior after each hand is the prior of the
    /// next. Returns the posterior after every hand, in order.
    ///
    /// Once the evidence goes degenerate the all-zero posterior stays
    /// degenerate for every later hand.
    pub fn sequential<'h, I>(&self, hands: I, prior: Option<Posterior>) -> Result<Vec<Posterior>, Error>
    where
        I: IntoIterator<Item = (&'h [Action], &'h [Strength])>,
    {
        let mut belief = prior.unwrap_or_default();
        let mut trail = Vec::new();
        for (actions, states) in hands {
            belief = self.posterior(actions, states, Some(&belief))?;
            trail.push(belief);
        }
        log::debug!("{:<32}{:<32}", "sequential posterior hands", trail.len());
        Ok(trail)
    }

    /// Every hand judged on its own under the same fixed prior.
    pub fn independent<'h, I>(&self, hands: I, prior: Option<Posterior>) -> Result<Vec<Posterior>, Error>
    where
        I: IntoIterator<Item = (&'h [Action], &'h [Strength])>,
    {
        let ref prior = prior.unwrap_or_default();
        hands
            .into_iter()
            .map(|(actions, states)| self.posterior(actions, states, Some(prior)))
            .collect()
    }
}
