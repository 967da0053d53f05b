use super::error::Error;
use super::Probability;
use super::TOLERANCE;

/// A matrix (or vector) whose rows are probability distributions.
///
/// Validation accepts two kinds of row:
/// - finite, non-negative entries summing to one within [`TOLERANCE`]
/// - identically zero, standing for a state that was never observed
///
/// Consumers must treat a zero row as "no mass flows out of this state"
/// rather than renormalizing it.
pub trait Stochastic {
    /// Iterates over the rows, in state order.
    fn rows(&self) -> impl Iterator<Item = &[Probability]>;

    /// Checks every row, naming the first offender.
    fn validate(&self, name: &str) -> Result<(), Error> {
        self.rows()
            .enumerate()
            .find(|(_, row)| !is_distribution(row) && !is_vacant(row))
            .map_or(Ok(()), |(i, row)| {
                Err(Error::InvalidModel(format!(
                    "{} row {} is not stochastic: {:?}",
                    name, i, row
                )))
            })
    }
}

/// Row of a probability law: finite, non-negative, unit mass.
pub fn is_distribution(row: &[Probability]) -> bool {
    row.iter().all(|p| p.is_finite() && *p >= 0.)
        && (row.iter().sum::<Probability>() - 1.).abs() <= TOLERANCE
}

/// Row with no mass at all.
pub fn is_vacant(row: &[Probability]) -> bool {
    row.iter().all(|p| *p == 0.)
}
