use super::strength::Strength;
use super::Probability;

/// Agreement between predicted and true hand strengths across a batch.
///
/// Tracks exact matches and matches within one category. The ±1 rate is
/// the forgiving one: the strength buckets are equity fifths, so landing
/// in a neighbouring bucket is a near miss rather than a wrong read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy {
    total: usize,
    exact: usize,
    adjacent: usize,
}

impl Accuracy {
    pub fn observe(&mut self, predicted: Strength, truth: Strength) {
        let distance = predicted.distance(&truth);
        self.total += 1;
        self.exact += (distance == 0) as usize;
        self.adjacent += (distance <= 1) as usize;
    }
    pub fn total(&self) -> usize {
        self.total
    }
    /// Fraction of exact matches. Zero for an empty batch.
    pub fn exact(&self) -> Probability {
        Self::rate(self.exact, self.total)
    }
    /// Fraction of predictions within one category.
    pub fn adjacent(&self) -> Probability {
        Self::rate(self.adjacent, self.total)
    }
    /// Combines two disjoint batches.
    pub fn merge(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            exact: self.exact + other.exact,
            adjacent: self.adjacent + other.adjacent,
        }
    }
    fn rate(hits: usize, total: usize) -> Probability {
        match total {
            0 => 0.,
            n => hits as Probability / n as Probability,
        }
    }
}

impl FromIterator<(Strength, Strength)> for Accuracy {
    fn from_iter<I: IntoIterator<Item = (Strength, Strength)>>(iter: I) -> Self {
        let mut accuracy = Self::default();
        for (predicted, truth) in iter {
            accuracy.observe(predicted, truth);
        }
        accuracy
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "exact {:.2}%  within one {:.2}%  ({} hands)",
            self.exact() * 100.,
            self.adjacent() * 100.,
            self.total
        )
    }
}
