use super::accuracy::Accuracy;
use super::action::Action;
use super::error::Error;
use super::forward::Forward;
use super::model::Model;
use super::posterior::Estimator;
use super::sequence::hands;
use super::sequence::parse;
use super::strategy::Strategy;
use super::strength::Strength;
use super::viterbi::Viterbi;
use super::Probability;
use super::N_STREETS;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

/// One player's observed history with its ground truth attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    strategy: Strategy,
    actions: Vec<Action>,
    states: Vec<Strength>,
}

impl Record {
    /// Pairs every action with the hand strength it was taken on.
    pub fn new(strategy: Strategy, actions: Vec<Action>, states: Vec<Strength>) -> Result<Self, Error> {
        match actions.len() == states.len() {
            true => Ok(Self {
                strategy,
                actions,
                states,
            }),
            false => Err(Error::InvalidObservation(format!(
                "{} actions against {} hand strengths",
                actions.len(),
                states.len()
            ))),
        }
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn states(&self) -> &[Strength] {
        &self.states
    }
    /// Actions and strengths split into hands.
    pub fn hands(&self) -> impl Iterator<Item = (&[Action], &[Strength])> {
        hands(&self.actions).zip(hands(&self.states))
    }
}

/// (strategy, actions, strengths) as exported text columns.
impl TryFrom<(&str, &str, &str)> for Record {
    type Error = Error;
    fn try_from((strategy, actions, states): (&str, &str, &str)) -> Result<Self, Self::Error> {
        Self::new(
            Strategy::try_from(strategy)?,
            parse::<Action>(actions)?,
            parse::<Strength>(states)?,
        )
    }
}

/// What each inference mode made of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub truth: Strategy,
    pub forward: Strategy,
    pub posterior: Option<Strategy>,
    pub rivers: Accuracy,
}

/// Batch summary across many records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Report {
    players: usize,
    forward: usize,
    posterior: usize,
    rivers: Accuracy,
}

impl Report {
    pub fn players(&self) -> usize {
        self.players
    }
    /// Fraction of players whose forward argmax is their true strategy.
    pub fn forward(&self) -> Probability {
        Self::rate(self.forward, self.players)
    }
    /// Fraction of players whose posterior argmax is their true strategy.
    pub fn posterior(&self) -> Probability {
        Self::rate(self.posterior, self.players)
    }
    /// Decoded against true river strengths over every complete hand.
    pub fn rivers(&self) -> &Accuracy {
        &self.rivers
    }
    fn rate(hits: usize, total: usize) -> Probability {
        match total {
            0 => 0.,
            n => hits as Probability / n as Probability,
        }
    }
}

impl FromIterator<Verdict> for Report {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |report, verdict| Self {
            players: report.players + 1,
            forward: report.forward + (verdict.forward == verdict.truth) as usize,
            posterior: report.posterior + (verdict.posterior == Some(verdict.truth)) as usize,
            rivers: report.rivers.merge(verdict.rivers),
        })
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "players            {}", self.players)?;
        writeln!(f, "forward accuracy   {:.2}%", self.forward() * 100.)?;
        writeln!(f, "posterior accuracy {:.2}%", self.posterior() * 100.)?;
        write!(f, "river strength     {}", self.rivers)
    }
}

/// Runs every inference mode over a batch of records.
///
/// Records are independent of each other and only read the shared model,
/// so the batch fans out across threads.
pub struct Evaluation<'a> {
    model: &'a Model,
}

impl<'a> From<&'a Model> for Evaluation<'a> {
    fn from(model: &'a Model) -> Self {
        Self { model }
    }
}

impl Evaluation<'_> {
    /// Classifies one record by forward argmax and by posterior argmax,
    /// and decodes each complete hand under the true strategy to score
    /// the river read.
    pub fn judge(&self, record: &Record) -> Result<Verdict, Error> {
        let forward = Forward::from(self.model).classify(record.actions())?;
        let posterior = Estimator::from(self.model)
            .posterior(record.actions(), record.states(), None)?
            .argmax();
        let viterbi = Viterbi::from(self.model);
        let mut rivers = Accuracy::default();
        for (actions, states) in record.hands().filter(|(a, _)| a.len() == N_STREETS) {
            let path = viterbi.decode(record.strategy(), actions)?;
            rivers.observe(path.last(), states[N_STREETS - 1]);
        }
        Ok(Verdict {
            truth: record.strategy(),
            forward,
            posterior,
            rivers,
        })
    }

    /// Judges every record in parallel and summarizes.
    pub fn evaluate(&self, records: &[Record]) -> Result<Report, Error> {
        let verdicts = records
            .par_iter()
            .map(|record| self.judge(record))
            .collect::<Result<Vec<Verdict>, Error>>()?;
        let report = verdicts.into_iter().collect::<Report>();
        log::info!("{:<32}{:<32}", "evaluated players", report.players());
        log::info!("{:<32}{:<32.4}", "forward accuracy", report.forward());
        log::info!("{:<32}{:<32.4}", "posterior accuracy", report.posterior());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maniac() -> Record {
        Record::try_from((
            "Maniac",
            "[3, 4, 3, 4, 4, 3, 3, 4]",
            "[2, 3, 3, 4, 1, 2, 2, 3]",
        ))
        .unwrap()
    }

    fn rock() -> Record {
        Record::try_from((
            "Tight_Passive",
            "[0, 1, 1, 0, 1, 2, 1, 1]",
            "[1, 1, 1, 0, 2, 2, 3, 3]",
        ))
        .unwrap()
    }

    #[test]
    fn record_requires_parallel_sequences() {
        assert!(matches!(
            Record::try_from(("Maniac", "[3, 4]", "[2]")),
            Err(Error::InvalidObservation(_))
        ));
        assert!(matches!(
            Record::try_from(("Nit", "[3]", "[2]")),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn splits_into_hands() {
        let record = maniac();
        let hands = record.hands().collect::<Vec<_>>();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1].0, &[Action::Raise, Action::Bet, Action::Bet, Action::Raise]);
        assert_eq!(hands[1].1[3], Strength::Strong);
    }

    #[test]
    fn judges_obvious_players() {
        let model = Model::default();
        let evaluation = Evaluation::from(&model);
        let verdict = evaluation.judge(&maniac()).unwrap();
        assert_eq!(verdict.posterior, Some(Strategy::Maniac));
        assert_eq!(verdict.rivers.total(), 2);
        let verdict = evaluation.judge(&rock()).unwrap();
        assert_eq!(verdict.posterior, Some(Strategy::TightPassive));
        assert_eq!(verdict.forward, Strategy::TightPassive);
    }

    #[test]
    fn report_counts_hits() {
        let model = Model::default();
        let report = Evaluation::from(&model)
            .evaluate(&[maniac(), rock()])
            .unwrap();
        assert_eq!(report.players(), 2);
        assert_eq!(report.posterior(), 1.);
        assert_eq!(report.rivers().total(), 4);
    }

    #[test]
    fn empty_batch() {
        let model = Model::default();
        let report = Evaluation::from(&model).evaluate(&[]).unwrap();
        assert_eq!(report, Report::default());
        assert_eq!(report.forward(), 0.);
    }
}
