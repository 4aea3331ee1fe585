use std::fmt;

use vendrec_core::VendorRecord;

/// Why a candidate line was dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No token on the line parsed as a rate.
    MissingRate,
    /// A rate token was present but did not parse as a number.
    BadRate(String),
    /// The rate parsed but nothing was left over for the item name.
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingRate => write!(f, "no rate found"),
            SkipReason::BadRate(token) => write!(f, "unparseable rate '{token}'"),
            SkipReason::EmptyName => write!(f, "no item name left after the rate"),
        }
    }
}

/// One dropped input line, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the source document text.
    pub line_no: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Result of extracting one document: every record that parsed, plus every
/// line that looked like an item but did not.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    pub records: Vec<VendorRecord>,
    pub skipped: Vec<SkippedLine>,
}

impl ExtractReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn skip(&mut self, line_no: usize, text: &str, reason: SkipReason) {
        self.skipped.push(SkippedLine { line_no, text: text.to_string(), reason });
    }
}
