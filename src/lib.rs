//! Classroom placement toolkit.
//!
//! Collects a student roster, tags students with difficulty and helper
//! attributes, and distributes them into a fixed number of classes with a
//! deterministic sort-and-snake-draft pass. The resulting groups carry
//! aggregate scores and can be exported as a spreadsheet-compatible CSV.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Attribute`, `AttributeCatalog`,
//!   `Group`, `GroupStats`
//! - **`draft`**: Placement rules and the rule engine that orders the roster
//! - **`distributor`**: Snake-draft distribution and balance metrics
//! - **`roster`**: Bulk roster parsing (pasted line/tab-separated text)
//! - **`ident`**: Caller-injected unique-id generation
//! - **`validation`**: Input integrity checks (class count, duplicate IDs,
//!   dangling attribute references)
//! - **`export`**: CSV serialization for spreadsheet applications
//! - **`wizard`**: Four-step workflow state (setup → roster → evaluation → result)
//!
//! # Determinism
//!
//! Distribution is a pure function of its inputs: the roster ordering uses a
//! stable sort, ties keep their original order, and the draft contains no
//! randomness — re-running with the same roster and class count reproduces
//! the identical partition.
//!
//! # References
//!
//! - Brams & Taylor (1999), "The Win-Win Solution" (balanced alternation)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//!   (priority dispatching)

pub mod distributor;
pub mod draft;
pub mod export;
pub mod ident;
pub mod models;
pub mod roster;
pub mod validation;
pub mod wizard;
