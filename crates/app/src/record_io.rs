use std::io::{Read, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use vendrec_core::{SourceTag, VendorRecord};

/// Write the extracted vendor table in its interchange form.
pub fn write_records_csv<W: Write>(out: W, records: &[VendorRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Vendor Item", "Vendor Rate", "Source"])?;
    for record in records {
        writer.write_record(&[
            record.item.clone(),
            record.rate.to_string(),
            record.source.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read an extracted vendor table back, as written by `write_records_csv`.
///
/// Rows with an empty item are skipped; a bad rate or source tag is an
/// error, since the file is machine-written and corruption should be loud.
pub fn read_records_csv<R: Read>(data: R) -> Result<Vec<VendorRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(data);

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let line = idx + 2; // 1-based, after the header row
        let item = row.get(0).unwrap_or_default().trim();
        if item.is_empty() {
            continue;
        }
        let rate_field = row.get(1).unwrap_or_default().trim();
        let rate = Decimal::from_str(rate_field)
            .with_context(|| format!("line {line}: bad rate '{rate_field}'"))?;
        let source = SourceTag::from_str(row.get(2).unwrap_or_default().trim())
            .map_err(|e| anyhow::anyhow!("line {line}: {e}"))?;
        records.push(VendorRecord::new(item, rate, source));
    }
    Ok(records)
}
