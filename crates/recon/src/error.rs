use thiserror::Error;

/// Invalid-input conditions that abort a reconciliation run outright.
///
/// A run that simply finds no acceptable matches is a normal, successful
/// outcome and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconError {
    #[error("stock catalog is empty, nothing to match against")]
    EmptyCatalog,
    #[error("matcher invoked with an empty candidate list")]
    NoCandidates,
}
