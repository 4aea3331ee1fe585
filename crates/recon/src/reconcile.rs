use std::collections::HashMap;

use rust_decimal::Decimal;
use vendrec_core::{SourceTag, StockRecord, VendorRecord};

use crate::error::ReconError;
use crate::matcher::NameMatcher;

/// Outcome row for a single vendor record.
///
/// Exactly one is produced per input record. The stock fields are populated
/// iff the best score cleared the threshold; the score is always the best
/// one found, so rejected rows still say how close they came.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub vendor_item: String,
    pub vendor_rate: Decimal,
    pub source: SourceTag,
    pub matched_item: Option<String>,
    pub stock_balance: Option<Decimal>,
    pub score: u8,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        self.matched_item.is_some()
    }
}

/// The two order-preserving partitions of a reconciliation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileOutcome {
    pub matched: Vec<MatchResult>,
    pub unmatched: Vec<MatchResult>,
}

impl ReconcileOutcome {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }
}

/// Drives the matcher over a full extracted table.
pub struct Reconciler {
    matcher: NameMatcher,
}

impl Reconciler {
    pub fn new(threshold: u8) -> Self {
        Reconciler { matcher: NameMatcher::new(threshold) }
    }

    /// Partition every vendor record into matched or unmatched against the
    /// stock catalog.
    ///
    /// An empty catalog fails fast rather than yielding an all-unmatched
    /// table, so a broken catalog load cannot masquerade as a legitimate
    /// zero-match business outcome. Deterministic: same inputs, same
    /// partition, same scores.
    pub fn reconcile(
        &self,
        vendor_records: &[VendorRecord],
        stock_records: &[StockRecord],
    ) -> Result<ReconcileOutcome, ReconError> {
        if stock_records.is_empty() {
            return Err(ReconError::EmptyCatalog);
        }

        // Candidate names in catalog order, built once for the whole run.
        let candidates: Vec<&str> = stock_records.iter().map(|s| s.item.as_str()).collect();

        // Duplicate catalog names resolve to their first occurrence.
        let mut by_name: HashMap<&str, &StockRecord> = HashMap::new();
        for stock in stock_records {
            by_name.entry(stock.item.as_str()).or_insert(stock);
        }

        let mut outcome = ReconcileOutcome::default();
        for record in vendor_records {
            let found = self.matcher.best_match(&record.item, &candidates)?;
            match found.accepted.and_then(|name| by_name.get(name).copied()) {
                Some(stock) => outcome.matched.push(MatchResult {
                    vendor_item: record.item.clone(),
                    vendor_rate: record.rate,
                    source: record.source,
                    matched_item: Some(stock.item.clone()),
                    stock_balance: Some(stock.balance),
                    score: found.score,
                }),
                None => outcome.unmatched.push(MatchResult {
                    vendor_item: record.item.clone(),
                    vendor_rate: record.rate,
                    source: record.source,
                    matched_item: None,
                    stock_balance: None,
                    score: found.score,
                }),
            }
        }

        Ok(outcome)
    }
}

/// One-shot reconciliation with an explicit threshold.
pub fn reconcile(
    vendor_records: &[VendorRecord],
    stock_records: &[StockRecord],
    threshold: u8,
) -> Result<ReconcileOutcome, ReconError> {
    Reconciler::new(threshold).reconcile(vendor_records, stock_records)
}
