use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendrec_core::StockRecord;

use crate::{CatalogError, CatalogSource};

/// Zero-based column positions for a delimited stock catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogColumns {
    pub item: usize,
    pub balance: usize,
    pub has_header: bool,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        CatalogColumns { item: 0, balance: 1, has_header: true }
    }
}

/// Stock catalog in a local delimited file.
pub struct CsvCatalog {
    path: PathBuf,
    columns: CatalogColumns,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvCatalog { path: path.into(), columns: CatalogColumns::default() }
    }

    pub fn with_columns(path: impl Into<PathBuf>, columns: CatalogColumns) -> Self {
        CsvCatalog { path: path.into(), columns }
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> Result<Vec<StockRecord>, CatalogError> {
        read_csv_catalog(File::open(&self.path)?, &self.columns)
    }
}

/// Read a stock catalog from any delimited-text reader.
///
/// Rows with an empty item name or an unreadable balance are dropped. A
/// catalog where no row survives is an error rather than an empty success,
/// so the failure points here instead of at the reconciler.
pub fn read_csv_catalog<R: Read>(
    data: R,
    columns: &CatalogColumns,
) -> Result<Vec<StockRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(columns.has_header)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let item = row.get(columns.item).unwrap_or_default().trim();
        if item.is_empty() {
            continue;
        }
        let Some(balance) = row.get(columns.balance).and_then(parse_balance) else {
            continue;
        };
        records.push(StockRecord::new(item, balance));
    }

    if records.is_empty() {
        return Err(CatalogError::NoRows);
    }
    Ok(records)
}

fn parse_balance(field: &str) -> Option<Decimal> {
    let clean = field.trim().replace(',', "");
    Decimal::from_str(&clean).ok()
}
