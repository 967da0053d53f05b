use super::street::Street;
use thiserror::Error;

/// Failures raised by model construction and inference calls.
///
/// Construction errors ([`Error::InvalidModel`], [`Error::EmptyDataset`])
/// abort model setup. The rest are scoped to a single call and never
/// touch the shared [`Model`](super::model::Model), so batch drivers can
/// skip the offending item and keep going.
///
/// Evidence that no strategy can explain is not an error: the
/// [`Posterior`](super::posterior::Posterior) comes back all-zero instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("no transition leaves the {0}")]
    UnknownStreet(Street),
    #[error("invalid observation: {0}")]
    InvalidObservation(String),
    #[error("empty dataset")]
    EmptyDataset,
}
