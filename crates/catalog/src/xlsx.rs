use std::path::PathBuf;
use std::str::FromStr;

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendrec_core::StockRecord;

use crate::{CatalogError, CatalogSource};

/// Where the stock catalog lives inside the master workbook.
///
/// The defaults mirror the stock sheet this tool was built around: a
/// `STOCK` worksheet with an `Item` column and a verbosely named balance
/// column. Both are configurable because vendors' bookkeepers rename things.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookLayout {
    pub sheet: String,
    pub item_header: String,
    pub balance_header: String,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        WorkbookLayout {
            sheet: "STOCK".to_string(),
            item_header: "Item".to_string(),
            balance_header: "Balance Cases  after minus order cases".to_string(),
        }
    }
}

/// Stock catalog in a local Excel workbook (xlsx, xls, xlsb, ods).
pub struct XlsxCatalog {
    path: PathBuf,
    layout: WorkbookLayout,
}

impl XlsxCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        XlsxCatalog { path: path.into(), layout: WorkbookLayout::default() }
    }

    pub fn with_layout(path: impl Into<PathBuf>, layout: WorkbookLayout) -> Self {
        XlsxCatalog { path: path.into(), layout }
    }
}

impl CatalogSource for XlsxCatalog {
    fn load(&self) -> Result<Vec<StockRecord>, CatalogError> {
        let mut workbook = open_workbook_auto(&self.path)?;
        if !workbook.sheet_names().iter().any(|s| s == &self.layout.sheet) {
            return Err(CatalogError::SheetNotFound(self.layout.sheet.clone()));
        }
        let range = workbook.worksheet_range(&self.layout.sheet)?;
        records_from_range(&range, &self.layout)
    }
}

/// Walk a worksheet: find the row naming both configured columns (title
/// rows above it are common), then read every row below it.
pub fn records_from_range(
    range: &Range<Data>,
    layout: &WorkbookLayout,
) -> Result<Vec<StockRecord>, CatalogError> {
    let mut rows = range.rows();

    let mut columns = None;
    let mut saw_item_header = false;
    for row in rows.by_ref() {
        let item = header_position(row, &layout.item_header);
        let balance = header_position(row, &layout.balance_header);
        saw_item_header |= item.is_some();
        if let (Some(item), Some(balance)) = (item, balance) {
            columns = Some((item, balance));
            break;
        }
    }
    let Some((item_col, balance_col)) = columns else {
        let missing = if saw_item_header {
            layout.balance_header.clone()
        } else {
            layout.item_header.clone()
        };
        return Err(CatalogError::HeaderNotFound(missing));
    };

    let mut records = Vec::new();
    for row in rows {
        let Some(item) = row.get(item_col).and_then(cell_str).map(str::trim) else {
            continue;
        };
        if item.is_empty() {
            continue;
        }
        let Some(balance) = row.get(balance_col).and_then(cell_decimal) else {
            continue;
        };
        records.push(StockRecord::new(item, balance));
    }

    if records.is_empty() {
        return Err(CatalogError::NoRows);
    }
    Ok(records)
}

fn header_position(row: &[Data], header: &str) -> Option<usize> {
    row.iter()
        .position(|cell| cell_str(cell).is_some_and(|s| s.trim() == header))
}

fn cell_str(cell: &Data) -> Option<&str> {
    match cell {
        Data::String(s) => Some(s),
        _ => None,
    }
}

fn cell_decimal(cell: &Data) -> Option<Decimal> {
    match cell {
        Data::Float(f) => Decimal::try_from(*f).ok(),
        Data::Int(i) => Some(Decimal::from(*i)),
        Data::String(s) => Decimal::from_str(&s.trim().replace(',', "")).ok(),
        _ => None,
    }
}
