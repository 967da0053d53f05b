//! Hidden Markov model inference over observed poker betting actions.
//!
//! A player's hand strength is a latent variable that evolves street by
//! street under a periodic, non-homogeneous Markov chain: the transition
//! law depends on which street is being crossed, and every fourth
//! observation starts a new hand. The player's [`Strategy`] determines how
//! hand strength is emitted as betting [`Action`]s.
//!
//! ## Core Types
//!
//! - [`Model`]: validated, immutable parameter set shared by every evaluator
//! - [`Transition`]: street-keyed 5×5 hand strength transition law
//! - [`Emission`]: strategy-keyed P(action | strength)
//! - [`Distribution`]: initial (and per-hand reset) hand strength law
//!
//! ## Inference
//!
//! - [`Forward`]: marginal likelihood of an action stream per strategy
//! - [`Viterbi`]: most probable hand strength path within one hand
//! - [`Estimator`]: Bayesian posterior over strategies given known strengths
//! - [`Census`]: empirical transition and initial law estimation
//!
//! ## Reporting
//!
//! - [`Accuracy`]: exact and ±1 agreement between predicted and true strengths
//! - [`Evaluation`]: batch classification and decoding over player records
mod accuracy;
mod action;
mod census;
mod distribution;
mod emission;
mod error;
mod evaluation;
mod forward;
mod model;
mod posterior;
mod sequence;
mod stochastic;
mod strategy;
mod street;
mod strength;
mod transition;
mod viterbi;

pub use accuracy::*;
pub use action::*;
pub use census::*;
pub use distribution::*;
pub use emission::*;
pub use error::*;
pub use evaluation::*;
pub use forward::*;
pub use model::*;
pub use posterior::*;
pub use sequence::*;
pub use stochastic::*;
pub use strategy::*;
pub use street::*;
pub use strength::*;
pub use transition::*;
pub use viterbi::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Probabilities, likelihoods, and posterior mass.
pub type Probability = f64;
/// Frequency counts accumulated by the empirical builder.
pub type Count = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MODEL DIMENSIONS
// ============================================================================
/// Hand strength categories, Very Weak through Very Strong.
pub const N_STATES: usize = 5;
/// Observable betting actions, Fold through Raise.
pub const N_ACTIONS: usize = 5;
/// Streets per hand. Observation `i` is played on street `i % N_STREETS`.
pub const N_STREETS: usize = 4;
/// Street-to-street transitions per hand. The river has none.
pub const N_TRANSITIONS: usize = N_STREETS - 1;
/// Player archetypes with an emission matrix each.
pub const N_STRATEGIES: usize = 5;
/// Row sums must land within this distance of one.
pub const TOLERANCE: Probability = 1e-6;

// ============================================================================
// REFERENCE TRANSITIONS
// Rows: current strength, cols: next strength (Very Weak .. Very Strong).
// Estimated from one million Monte Carlo dealt hands.
// ============================================================================
/// Preflop → Flop.
#[rustfmt::skip]
pub const TRANSITION_PREFLOP: [[Probability; N_STATES]; N_STATES] = [
    [1.00, 0.00, 0.00, 0.00, 0.00],
    [0.00, 0.56, 0.39, 0.04, 0.01],
    [0.00, 0.43, 0.43, 0.12, 0.02],
    [0.00, 0.00, 0.50, 0.37, 0.13],
    [0.00, 0.00, 0.00, 0.00, 1.00],
];
/// Flop → Turn.
#[rustfmt::skip]
pub const TRANSITION_FLOP: [[Probability; N_STATES]; N_STATES] = [
    [1.00, 0.00, 0.00, 0.00, 0.00],
    [0.10, 0.65, 0.23, 0.02, 0.00],
    [0.00, 0.27, 0.51, 0.20, 0.02],
    [0.00, 0.00, 0.32, 0.60, 0.08],
    [0.00, 0.00, 0.00, 0.36, 0.64],
];
/// Turn → River.
#[rustfmt::skip]
pub const TRANSITION_TURN: [[Probability; N_STATES]; N_STATES] = [
    [0.64, 0.23, 0.13, 0.00, 0.00],
    [0.42, 0.31, 0.17, 0.09, 0.01],
    [0.02, 0.28, 0.44, 0.23, 0.03],
    [0.00, 0.00, 0.27, 0.62, 0.11],
    [0.00, 0.00, 0.00, 0.33, 0.67],
];

// ============================================================================
// REFERENCE EMISSIONS
// Rows: hand strength, cols: Fold, Check, Call, Bet, Raise.
// ============================================================================
/// Selective preflop, bets and raises its strong hands.
#[rustfmt::skip]
pub const EMISSION_TIGHT_AGGRESSIVE: [[Probability; N_ACTIONS]; N_STATES] = [
    [0.85, 0.10, 0.05, 0.00, 0.00],
    [0.50, 0.30, 0.15, 0.05, 0.00],
    [0.10, 0.40, 0.30, 0.15, 0.05],
    [0.00, 0.10, 0.25, 0.45, 0.20],
    [0.00, 0.02, 0.08, 0.40, 0.50],
];
/// Plays many hands, bets and raises its strong hands.
#[rustfmt::skip]
pub const EMISSION_LOOSE_AGGRESSIVE: [[Probability; N_ACTIONS]; N_STATES] = [
    [0.30, 0.25, 0.20, 0.15, 0.10],
    [0.15, 0.25, 0.25, 0.20, 0.15],
    [0.05, 0.15, 0.25, 0.35, 0.20],
    [0.00, 0.05, 0.15, 0.40, 0.40],
    [0.00, 0.02, 0.08, 0.30, 0.60],
];
/// Selective, and only calls even when strong.
#[rustfmt::skip]
pub const EMISSION_TIGHT_PASSIVE: [[Probability; N_ACTIONS]; N_STATES] = [
    [0.90, 0.08, 0.02, 0.00, 0.00],
    [0.70, 0.20, 0.10, 0.00, 0.00],
    [0.40, 0.40, 0.20, 0.00, 0.00],
    [0.10, 0.50, 0.40, 0.00, 0.00],
    [0.00, 0.40, 0.60, 0.00, 0.00],
];
/// Plays many hands and calls too often.
#[rustfmt::skip]
pub const EMISSION_LOOSE_PASSIVE: [[Probability; N_ACTIONS]; N_STATES] = [
    [0.50, 0.30, 0.15, 0.05, 0.00],
    [0.30, 0.35, 0.30, 0.05, 0.00],
    [0.10, 0.30, 0.55, 0.05, 0.00],
    [0.02, 0.20, 0.70, 0.06, 0.02],
    [0.00, 0.10, 0.80, 0.08, 0.02],
];
/// Never folds, bets and raises regardless of strength.
#[rustfmt::skip]
pub const EMISSION_MANIAC: [[Probability; N_ACTIONS]; N_STATES] = [
    [0.00, 0.10, 0.20, 0.40, 0.30],
    [0.00, 0.05, 0.15, 0.45, 0.35],
    [0.00, 0.02, 0.10, 0.50, 0.38],
    [0.00, 0.00, 0.05, 0.45, 0.50],
    [0.00, 0.00, 0.02, 0.38, 0.60],
];

// ============================================================================
// REFERENCE INITIAL DISTRIBUTION
// Preflop hand strength frequencies from the same Monte Carlo deal.
// ============================================================================
/// Stationary hand strength law at the start of every hand.
pub const STATIONARY: [Probability; N_STATES] = [0.205922, 0.311032, 0.279692, 0.156896, 0.046458];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Logging for the `pokerhmm` binary.
///
/// Summaries go to stderr at INFO so inference results on stdout stay
/// pipeable. Per-hand decode and census detail goes to
/// `logs/pokerhmm-<unix secs>.log` at DEBUG.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let path = format!("logs/pokerhmm-{}.log", secs);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create {}", path))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
