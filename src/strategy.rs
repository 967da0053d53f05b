use super::error::Error;
use super::Arbitrary;
use super::N_STRATEGIES;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of player archetypes.
///
/// Each strategy owns exactly one [`Emission`](super::emission::Emission)
/// in the [`Model`](super::model::Model), looked up by discriminant. Adding
/// an archetype means adding a variant here and a matrix there.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "Tight_Aggressive")]
    TightAggressive = 0,
    #[serde(rename = "Loose_Aggressive")]
    LooseAggressive = 1,
    #[serde(rename = "Tight_Passive")]
    TightPassive = 2,
    #[serde(rename = "Loose_Passive")]
    LoosePassive = 3,
    #[serde(rename = "Maniac")]
    Maniac = 4,
}

impl Strategy {
    /// All archetypes in enumeration order. Ties in classification
    /// resolve toward the earlier entry.
    pub const fn all() -> [Self; N_STRATEGIES] {
        [
            Self::TightAggressive,
            Self::LooseAggressive,
            Self::TightPassive,
            Self::LoosePassive,
            Self::Maniac,
        ]
    }
    /// Stable name used in serialized models and reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TightAggressive => "Tight_Aggressive",
            Self::LooseAggressive => "Loose_Aggressive",
            Self::TightPassive => "Tight_Passive",
            Self::LoosePassive => "Loose_Passive",
            Self::Maniac => "Maniac",
        }
    }
}

impl From<Strategy> for usize {
    fn from(s: Strategy) -> usize {
        s as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Strategy {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let ref key = s.trim().replace(['_', '-', ' '], "").to_lowercase();
        Self::all()
            .into_iter()
            .find(|x| x.label().replace('_', "").to_lowercase() == *key)
            .or_else(|| match key.as_str() {
                "tag" => Some(Self::TightAggressive),
                "lag" => Some(Self::LooseAggressive),
                _ => None,
            })
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Strategy {
    fn random() -> Self {
        Self::all()[rand::random_range(0..N_STRATEGIES)]
    }
}
