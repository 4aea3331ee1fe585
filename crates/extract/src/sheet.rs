use serde::{Deserialize, Serialize};
use vendrec_core::{SourceTag, VendorRecord};

use crate::report::{ExtractReport, SkipReason};
use crate::util::parse_rate;

/// Layout hints for text-layer vendor price sheets.
///
/// Item lines carry the name, the rate, then a per-unit marker token
/// (`SUNFLOWER OIL 1L 1,250/- CASE 12`); everything from the marker onward
/// is packaging detail. Lines without the marker are headers, footers, or
/// page furniture, not failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    pub unit_marker: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout { unit_marker: "CASE".to_string() }
    }
}

/// Parse one document's worth of price-sheet text.
pub fn parse_sheet_text(text: &str, layout: &SheetLayout) -> ExtractReport {
    let mut report = ExtractReport::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let Some((lead, _)) = line.split_once(&layout.unit_marker) else {
            continue;
        };

        let name_and_rate = lead.trim();
        let (name, rate_token) = match name_and_rate.rsplit_once(char::is_whitespace) {
            Some(pair) => pair,
            None if parse_rate(name_and_rate).is_some() => {
                report.skip(line_no, line, SkipReason::EmptyName);
                continue;
            }
            None => {
                report.skip(line_no, line, SkipReason::MissingRate);
                continue;
            }
        };

        let Some(rate) = parse_rate(rate_token) else {
            report.skip(line_no, line, SkipReason::BadRate(rate_token.to_string()));
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            report.skip(line_no, line, SkipReason::EmptyName);
            continue;
        }

        report.records.push(VendorRecord::new(name, rate, SourceTag::Pdf));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn parse(text: &str) -> ExtractReport {
        parse_sheet_text(text, &SheetLayout::default())
    }

    #[test]
    fn typical_item_line() {
        let report = parse("SUNFLOWER OIL 1L 1,250/- CASE 12");
        assert_eq!(report.records.len(), 1);
        let r = &report.records[0];
        assert_eq!(r.item, "SUNFLOWER OIL 1L");
        assert_eq!(r.rate, Decimal::from(1250));
        assert_eq!(r.source, SourceTag::Pdf);
    }

    #[test]
    fn lines_without_the_marker_are_ignored() {
        let report = parse("VENDOR PRICE LIST\nPage 1 of 2\n");
        assert!(report.records.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn multiple_items_keep_document_order() {
        let text = "PRICE LIST JULY\n\
                    SUNFLOWER OIL 1L 1,250/- CASE 12\n\
                    MUSTARD OIL 1L 890/- CASE 12\n\
                    BASMATI RICE 5KG 2,100/- CASE 4\n";
        let report = parse(text);
        let items: Vec<&str> = report.records.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, ["SUNFLOWER OIL 1L", "MUSTARD OIL 1L", "BASMATI RICE 5KG"]);
    }

    #[test]
    fn bad_rate_is_collected_not_dropped() {
        let report = parse("SUNFLOWER OIL 1L n/a CASE 12");
        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_no, 1);
        assert_eq!(report.skipped[0].reason, SkipReason::BadRate("n/a".to_string()));
    }

    #[test]
    fn rate_with_no_name_is_collected() {
        let report = parse("1,250/- CASE 12");
        assert!(report.records.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::EmptyName);
    }

    #[test]
    fn marker_with_nothing_before_it_is_collected() {
        let report = parse("CASE 12");
        assert_eq!(report.skipped[0].reason, SkipReason::MissingRate);
    }

    #[test]
    fn custom_unit_marker() {
        let layout = SheetLayout { unit_marker: "CTN".to_string() };
        let report = parse_sheet_text("GREEN TEA 250G 640/- CTN 24", &layout);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].item, "GREEN TEA 250G");
        assert_eq!(report.records[0].rate, Decimal::from(640));
    }

    #[test]
    fn mixed_good_and_bad_lines() {
        let text = "SUNFLOWER OIL 1L 1,250/- CASE 12\n\
                    SMUDGED ITEM ???/- CASE 6\n\
                    MUSTARD OIL 1L 890/- CASE 12\n";
        let report = parse(text);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_no, 2);
    }
}
