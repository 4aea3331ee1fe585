use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance of an extracted vendor line: text-layer price sheets versus
/// photographed or scanned documents run through OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    #[serde(rename = "PDF")]
    Pdf,
    Image,
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTag::Pdf => write!(f, "PDF"),
            SourceTag::Image => write!(f, "Image"),
        }
    }
}

impl std::str::FromStr for SourceTag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(SourceTag::Pdf),
            "image" => Ok(SourceTag::Image),
            other => Err(format!("Unknown source tag: '{other}'")),
        }
    }
}

/// One (name, rate) pair lifted out of a vendor price document.
///
/// Rates are carried verbatim: zero and negative values pass through, since
/// validating them is the extraction layer's call, not the engine's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub item: String,
    pub rate: Decimal,
    pub source: SourceTag,
}

impl VendorRecord {
    pub fn new(item: impl Into<String>, rate: Decimal, source: SourceTag) -> Self {
        VendorRecord { item: item.into(), rate, source }
    }
}

/// One canonical stock item with its available balance.
///
/// Item names are assumed unique within a catalog; loaders do not enforce
/// this, and duplicates resolve to their first occurrence downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub item: String,
    pub balance: Decimal,
}

impl StockRecord {
    pub fn new(item: impl Into<String>, balance: Decimal) -> Self {
        StockRecord { item: item.into(), balance }
    }
}
