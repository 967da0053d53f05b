use super::action::Action;
use super::error::Error;
use super::model::Model;
use super::sequence::hands;
use super::strategy::Strategy;
use super::strength::Strength;
use super::street::Street;
use super::Probability;
use super::N_STATES;

/// Most probable hand strength trajectory of one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    states: Vec<Strength>,
    probability: Probability,
}

impl Path {
    /// Decoded strengths, one per observation, earliest first.
    pub fn states(&self) -> &[Strength] {
        &self.states
    }
    /// Joint probability of the decoded path and the observed actions.
    pub fn probability(&self) -> Probability {
        self.probability
    }
    /// Strength on the last decoded street.
    pub fn last(&self) -> Strength {
        self.states.last().copied().unwrap_or_default()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let states = self
            .states
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(" → ");
        write!(f, "{} ({:.6e})", states, self.probability)
    }
}

/// L × N_STATES dynamic programming table.
struct Trellis {
    delta: Vec<[Probability; N_STATES]>,
    parent: Vec<[usize; N_STATES]>,
}

impl Trellis {
    /// Index and value of the largest entry, lowest index on ties.
    fn argmax(row: &[Probability; N_STATES]) -> (usize, Probability) {
        row.iter()
            .copied()
            .enumerate()
            .fold((0, row[0]), |best, (i, p)| if p > best.1 { (i, p) } else { best })
    }

    /// Follows parents back from the best final state.
    fn backtrack(&self) -> Path {
        let last = self.delta.len() - 1;
        let (mut state, probability) = Self::argmax(&self.delta[last]);
        let mut states = vec![Strength::default(); self.delta.len()];
        for t in (0..=last).rev() {
            states[t] = Strength::all()[state];
            state = self.parent[t][state];
        }
        Path {
            states,
            probability,
        }
    }
}

/// Viterbi decoding of a single hand under a known strategy.
///
/// Recurrence over the trellis:
///
/// - `δ₀(s) = π(s) · E(s, a₀)`
/// - `δₜ(j) = maxᵢ δₜ₋₁(i) · T(street t−1)(i, j) · E(j, aₜ)`
///
/// Maxima are found by a left-to-right scan that only replaces the running
/// best on a strictly larger value, so ties go to the lowest strength both
/// when choosing parents and when choosing the final state. Probabilities
/// are plain products and underflow for long inputs.
pub struct Viterbi<'a> {
    model: &'a Model,
}

impl<'a> From<&'a Model> for Viterbi<'a> {
    fn from(model: &'a Model) -> Self {
        Self { model }
    }
}

impl Viterbi<'_> {
    /// Decodes one hand of at least one and at most four observations.
    ///
    /// A fifth observation would need a transition out of the river, which
    /// does not exist: such input fails with [`Error::UnknownStreet`]. Use
    /// [`Viterbi::decode_hands`] for multi-hand streams.
    pub fn decode(&self, strategy: Strategy, actions: &[Action]) -> Result<Path, Error> {
        let first = actions
            .first()
            .copied()
            .ok_or_else(|| Error::InvalidObservation("cannot decode an empty hand".to_string()))?;
        let emission = self.model.emission(strategy);
        let initial = self.model.initial();
        let mut trellis = Trellis {
            delta: Vec::with_capacity(actions.len()),
            parent: Vec::with_capacity(actions.len()),
        };
        trellis
            .delta
            .push(std::array::from_fn(|s| initial.inner()[s] * emission.diagonal(first)[s]));
        trellis.parent.push([0; N_STATES]);
        for (t, action) in actions.iter().copied().enumerate().skip(1) {
            let transition = self.model.transition(Street::from(t - 1))?;
            let ref previous = trellis.delta[t - 1];
            let mut delta = [0.; N_STATES];
            let mut parent = [0; N_STATES];
            for to in Strength::all() {
                let scores: [Probability; N_STATES] = std::array::from_fn(|from| {
                    previous[from]
                        * transition.get(Strength::all()[from], to)
                        * emission.get(to, action)
                });
                let (i, best) = Trellis::argmax(&scores);
                delta[to as usize] = best;
                parent[to as usize] = i;
            }
            trellis.delta.push(delta);
            trellis.parent.push(parent);
        }
        let path = trellis.backtrack();
        log::debug!("{:<32}{:<32}", format!("decoded {}", strategy), path);
        Ok(path)
    }

    /// Splits a multi-hand stream into hands and decodes each independently.
    pub fn decode_hands(&self, strategy: Strategy, actions: &[Action]) -> Result<Vec<Path>, Error> {
        hands(actions)
            .map(|hand| self.decode(strategy, hand))
            .collect()
    }
}
