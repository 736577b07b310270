//! Snake-draft distribution and balance metrics.
//!
//! # Algorithm
//!
//! [`SnakeDraft`] orders the roster with a rule engine, then deals students
//! into classes in alternating (boustrophedon) order. It is a fixed
//! single-pass heuristic, not an optimizer: there is no post-pass
//! rebalancing and no quality bound.
//!
//! # Metrics
//!
//! [`DraftKpi`] summarizes a finished distribution: group sizes and the
//! spread of difficulty/helper scores across classes.
//!
//! # Reference
//!
//! Brams & Taylor (1999), "The Win-Win Solution" — balanced alternation

mod kpi;
mod snake;

pub use kpi::DraftKpi;
pub use snake::{snake_slot, DraftRequest, SnakeDraft};
