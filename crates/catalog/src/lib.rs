//! Catalog-loading collaborators.
//!
//! Every source yields the same `Vec<StockRecord>` behind the narrow
//! `CatalogSource` seam, so the reconciler and its tests never care whether
//! the catalog came from a workbook, a CSV file, an HTTP fetch, or an
//! in-memory fixture.

pub mod csv;
pub mod http;
pub mod xlsx;

pub use crate::csv::{read_csv_catalog, CatalogColumns, CsvCatalog};
pub use crate::http::RemoteCatalog;
pub use crate::xlsx::{WorkbookLayout, XlsxCatalog};

use thiserror::Error;
use vendrec_core::StockRecord;

/// A loader for the master stock catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<StockRecord>, CatalogError>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to fetch catalog: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("catalog fetch returned HTTP {0}")]
    FetchStatus(u16),
    #[error("worksheet '{0}' not found")]
    SheetNotFound(String),
    #[error("column header '{0}' not found")]
    HeaderNotFound(String),
    #[error("catalog has no loadable rows")]
    NoRows,
}
