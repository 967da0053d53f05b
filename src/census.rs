use super::distribution::Distribution;
use super::emission::Emission;
use super::error::Error;
use super::model::Model;
use super::sequence::Trajectory;
use super::street::Street;
use super::transition::Transition;
use super::Count;
use super::Probability;
use super::N_STATES;
use super::N_STRATEGIES;
use super::N_TRANSITIONS;

/// Raw transition counts for one street.
pub type Tally = [[Count; N_STATES]; N_STATES];

/// Frequency counts over simulated hand strength trajectories.
///
/// Every observed hand contributes one count to each street's transition
/// tally (`[current][next]`) and one to the opening frequency of its
/// preflop strength. Normalizing turns the tallies into a [`Transition`]
/// per street and the opening counts into the initial [`Distribution`].
///
/// A strength never seen on a street leaves an all-zero tally row, which
/// normalizes to an all-zero transition row rather than dividing by zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Census {
    tallies: [Tally; N_TRANSITIONS],
    opening: [Count; N_STATES],
    hands: usize,
}

impl Census {
    /// Counts one hand.
    pub fn observe(&mut self, trajectory: &Trajectory) {
        self.opening[trajectory[0] as usize] += 1;
        for (tally, pair) in self.tallies.iter_mut().zip(trajectory.windows(2)) {
            tally[pair[0] as usize][pair[1] as usize] += 1;
        }
        self.hands += 1;
    }
    /// Number of hands observed.
    pub fn hands(&self) -> usize {
        self.hands
    }
    /// Raw counts for the transition leaving `street`.
    pub fn tally(&self, street: Street) -> Result<&Tally, Error> {
        street.transition().map(|i| &self.tallies[i])
    }
    /// Row-normalized transition leaving `street`.
    pub fn transition(&self, street: Street) -> Result<Transition, Error> {
        self.tally(street).map(Self::normalize)
    }
    /// Transitions for preflop, flop and turn.
    pub fn transitions(&self) -> [Transition; N_TRANSITIONS] {
        self.tallies.map(|tally| Self::normalize(&tally))
    }
    /// Opening hand strength frequencies. Fails without data.
    pub fn initial(&self) -> Result<Distribution, Error> {
        Distribution::try_from(self.opening)
    }
    /// Assembles a validated model from the estimated transitions and π,
    /// with externally supplied emissions.
    pub fn model(&self, emissions: [Emission; N_STRATEGIES]) -> Result<Model, Error> {
        let initial = self.initial()?;
        log::info!("{:<32}{:<32}", "estimated model from hands", self.hands);
        Model::new(self.transitions(), emissions, initial)
    }

    fn normalize(tally: &Tally) -> Transition {
        Transition::from(tally.map(|row| match row.iter().sum::<Count>() {
            0 => [0.; N_STATES],
            n => row.map(|c| c as Probability / n as Probability),
        }))
    }
}

impl Extend<Trajectory> for Census {
    fn extend<I: IntoIterator<Item = Trajectory>>(&mut self, iter: I) {
        for ref trajectory in iter {
            self.observe(trajectory);
        }
        log::debug!("{:<32}{:<32}", "census hands", self.hands);
    }
}

impl FromIterator<Trajectory> for Census {
    fn from_iter<I: IntoIterator<Item = Trajectory>>(iter: I) -> Self {
        let mut census = Self::default();
        census.extend(iter);
        census
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (street, transition) in Street::all().iter().zip(self.transitions().iter()) {
            writeln!(f, "{} -> {}", street.label(), street.next().label())?;
            write!(f, "{}", transition)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Stochastic;
    use crate::Strategy;
    use crate::Strength;
    use crate::Strength::*;

    fn dataset() -> Vec<Trajectory> {
        vec![
            [Weak, Medium, Strong, VeryStrong],
            [Weak, Weak, Medium, Medium],
            [Medium, Medium, Strong, Strong],
            [VeryWeak, VeryWeak, VeryWeak, Weak],
            [Weak, Medium, Medium, Strong],
        ]
    }

    #[test]
    fn counts_adjacent_pairs() {
        let census = dataset().into_iter().collect::<Census>();
        assert_eq!(census.hands(), 5);
        let preflop = census.tally(Street::Pref).unwrap();
        assert_eq!(preflop[Weak as usize][Medium as usize], 2);
        assert_eq!(preflop[Weak as usize][Weak as usize], 1);
        let turn = census.tally(Street::Turn).unwrap();
        assert_eq!(turn[Medium as usize], [0, 0, 1, 1, 0]);
    }

    #[test]
    fn rows_normalize() {
        let census = dataset().into_iter().collect::<Census>();
        let preflop = census.transition(Street::Pref).unwrap();
        assert!((preflop.get(Weak, Medium) - 2. / 3.).abs() < 1e-12);
        assert!((preflop.get(Weak, Weak) - 1. / 3.).abs() < 1e-12);
    }

    #[test]
    fn unseen_turn_strength_leaves_zero_row() {
        let census = dataset().into_iter().collect::<Census>();
        let turn = census.transition(Street::Turn).unwrap();
        assert_eq!(turn.row(VeryStrong), &[0.; N_STATES]);
        assert!(turn.validate("turn").is_ok());
    }

    #[test]
    fn initial_from_preflop_column() {
        let census = dataset().into_iter().collect::<Census>();
        assert_eq!(census.initial().unwrap().inner(), &[0.2, 0.6, 0.2, 0., 0.]);
    }

    #[test]
    fn empty_dataset() {
        assert_eq!(Census::default().initial(), Err(Error::EmptyDataset));
        assert!(matches!(
            Census::default().model(Strategy::all().map(|s| *Model::default().emission(s))),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn river_has_no_tally() {
        assert_eq!(
            Census::default().tally(Street::Rive),
            Err(Error::UnknownStreet(Street::Rive))
        );
    }

    #[test]
    fn estimates_pass_model_validation() {
        let census = (0..2048)
            .map(|_| [(); 4].map(|_| Strength::random()))
            .collect::<Census>();
        let emissions = Strategy::all().map(|s| *Model::default().emission(s));
        assert!(census.model(emissions).is_ok());
    }
}
