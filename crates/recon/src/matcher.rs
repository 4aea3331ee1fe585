use crate::error::ReconError;
use crate::similarity::token_sort_ratio;

/// Acceptance threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// Best candidate found for a single query name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    /// The winning candidate, present only when its score cleared the
    /// threshold.
    pub accepted: Option<&'a str>,
    /// Best score found across all candidates, reported even on rejection.
    pub score: u8,
}

/// Scores a query name against a candidate list and applies the acceptance
/// threshold. Pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    pub threshold: u8,
}

impl Default for NameMatcher {
    fn default() -> Self {
        NameMatcher { threshold: DEFAULT_THRESHOLD }
    }
}

impl NameMatcher {
    pub fn new(threshold: u8) -> Self {
        NameMatcher { threshold }
    }

    /// Find the best-scoring candidate for `query`.
    ///
    /// Ties resolve to the first candidate in iteration order, so results
    /// are reproducible for a fixed catalog ordering. The candidate list
    /// must be non-empty; an empty list is a caller contract violation.
    pub fn best_match<'a>(
        &self,
        query: &str,
        candidates: &[&'a str],
    ) -> Result<CandidateMatch<'a>, ReconError> {
        let Some((first, rest)) = candidates.split_first() else {
            return Err(ReconError::NoCandidates);
        };

        let mut best_name = *first;
        let mut best_score = token_sort_ratio(query, best_name);
        for &name in rest {
            let score = token_sort_ratio(query, name);
            if score > best_score {
                best_name = name;
                best_score = score;
            }
        }

        Ok(CandidateMatch {
            accepted: (best_score >= self.threshold).then_some(best_name),
            score: best_score,
        })
    }
}
