use std::io::Write;

use anyhow::Result;
use vendrec_recon::MatchResult;

/// Accepted matches, in the fixed export column order.
pub fn write_matched_csv<W: Write>(out: W, rows: &[MatchResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "Vendor Item",
        "Vendor Rate",
        "Matched Stock Item",
        "Stock (Balance Cases)",
        "Match Score",
        "Source",
    ])?;
    for row in rows {
        writer.write_record(&[
            row.vendor_item.clone(),
            row.vendor_rate.to_string(),
            row.matched_item.clone().unwrap_or_default(),
            row.stock_balance.map(|b| b.to_string()).unwrap_or_default(),
            row.score.to_string(),
            row.source.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Items that found no acceptable match. The best score found is still
/// reported so the operator can judge how near a miss each row was.
pub fn write_unmatched_csv<W: Write>(out: W, rows: &[MatchResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Vendor Item", "Vendor Rate", "Match Score", "Source"])?;
    for row in rows {
        writer.write_record(&[
            row.vendor_item.clone(),
            row.vendor_rate.to_string(),
            row.score.to_string(),
            row.source.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use vendrec_core::SourceTag;

    fn matched_row() -> MatchResult {
        MatchResult {
            vendor_item: "SUNFLOWER OIL 1L".to_string(),
            vendor_rate: Decimal::from(1250),
            source: SourceTag::Pdf,
            matched_item: Some("Sunflower Oil 1L".to_string()),
            stock_balance: Some(Decimal::from(14)),
            score: 100,
        }
    }

    fn unmatched_row() -> MatchResult {
        MatchResult {
            vendor_item: "TOTALLY UNRELATED WIDGET".to_string(),
            vendor_rate: Decimal::from(99),
            source: SourceTag::Image,
            matched_item: None,
            stock_balance: None,
            score: 31,
        }
    }

    #[test]
    fn matched_export_column_order() {
        let mut buf = Vec::new();
        write_matched_csv(&mut buf, &[matched_row()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Vendor Item,Vendor Rate,Matched Stock Item,Stock (Balance Cases),Match Score,Source"
        );
        assert_eq!(
            lines.next().unwrap(),
            "SUNFLOWER OIL 1L,1250,Sunflower Oil 1L,14,100,PDF"
        );
    }

    #[test]
    fn unmatched_export_column_order() {
        let mut buf = Vec::new();
        write_unmatched_csv(&mut buf, &[unmatched_row()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Vendor Item,Vendor Rate,Match Score,Source");
        assert_eq!(lines.next().unwrap(), "TOTALLY UNRELATED WIDGET,99,31,Image");
    }

    #[test]
    fn row_count_matches_input() {
        let rows = vec![unmatched_row(), unmatched_row(), unmatched_row()];
        let mut buf = Vec::new();
        write_unmatched_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4); // header + 3 rows
    }
}
