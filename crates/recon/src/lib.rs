//! `vendrec-recon` — fuzzy reconciliation of extracted vendor items against
//! a master stock catalog.
//!
//! Pure engine crate: receives pre-loaded records, returns the partitioned
//! match tables. No IO dependencies.

pub mod error;
pub mod matcher;
pub mod reconcile;
pub mod similarity;

pub use error::ReconError;
pub use matcher::{CandidateMatch, NameMatcher, DEFAULT_THRESHOLD};
pub use reconcile::{reconcile, MatchResult, ReconcileOutcome, Reconciler};
pub use similarity::token_sort_ratio;
