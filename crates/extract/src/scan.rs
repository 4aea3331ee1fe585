use thiserror::Error;
use vendrec_core::{SourceTag, VendorRecord};

use crate::ocr::{OcrEngine, OcrError};
use crate::preprocess::{clean_for_ocr, PreprocessError};
use crate::report::{ExtractReport, SkipReason};
use crate::util::parse_rate;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("image preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("text recognition failed: {0}")]
    Ocr(#[from] OcrError),
}

/// Photograph → vendor records: clean the image, run the recognition
/// engine, parse the recognized text line by line.
pub fn scan_image(data: &[u8], engine: &dyn OcrEngine) -> Result<ExtractReport, ScanError> {
    let png = clean_for_ocr(data)?;
    let text = engine.read_text(&png)?;
    Ok(parse_ocr_text(&text))
}

/// Parse raw recognized text.
///
/// Item lines are recognized by carrying at least one digit. The last token
/// that parses as a number is the rate; the remaining tokens form the item
/// name. Digit-free lines are page furniture, not failures.
pub fn parse_ocr_text(text: &str) -> ExtractReport {
    let mut report = ExtractReport::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if !line.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((rate_pos, rate)) = tokens
            .iter()
            .enumerate()
            .rev()
            .find_map(|(pos, token)| parse_rate(token).map(|rate| (pos, rate)))
        else {
            report.skip(line_no, line, SkipReason::MissingRate);
            continue;
        };

        let name = tokens
            .iter()
            .enumerate()
            .filter(|(pos, _)| *pos != rate_pos)
            .map(|(_, token)| *token)
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            report.skip(line_no, line, SkipReason::EmptyName);
            continue;
        }

        report.records.push(VendorRecord::new(name, rate, SourceTag::Image));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::FixedText;
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn tiny_png() -> Vec<u8> {
        let img: GrayImage = ImageBuffer::from_fn(4, 4, |_, _| Luma([200u8]));
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn rate_is_the_last_numeric_token() {
        let report = parse_ocr_text("SUNFLOWER OIL 1L 1250");
        assert_eq!(report.records.len(), 1);
        let r = &report.records[0];
        assert_eq!(r.item, "SUNFLOWER OIL 1L");
        assert_eq!(r.rate, Decimal::from(1250));
        assert_eq!(r.source, SourceTag::Image);
    }

    #[test]
    fn unit_suffixed_tokens_are_part_of_the_name() {
        // "5KG" carries a digit but is not a number.
        let report = parse_ocr_text("BASMATI RICE 5KG 2100");
        assert_eq!(report.records[0].item, "BASMATI RICE 5KG");
        assert_eq!(report.records[0].rate, Decimal::from(2100));
    }

    #[test]
    fn digit_free_lines_are_ignored() {
        let report = parse_ocr_text("FRESH MART SUPPLIES\nMUSTARD OIL 1L 890\nTHANK YOU");
        assert_eq!(report.records.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn digit_line_with_no_numeric_token_is_collected() {
        let report = parse_ocr_text("B4TTERY AC1D");
        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingRate);
    }

    #[test]
    fn bare_number_line_has_no_name() {
        let report = parse_ocr_text("1250");
        assert_eq!(report.skipped[0].reason, SkipReason::EmptyName);
    }

    #[test]
    fn decimal_rates_survive() {
        let report = parse_ocr_text("GREEN TEA 250G 149.50");
        assert_eq!(report.records[0].rate, Decimal::new(14950, 2));
    }

    #[test]
    fn scan_runs_the_whole_pipeline() {
        let engine = FixedText::new("FRESH MART\nSUNFLOWER OIL 1L 1250\nMUSTARD OIL 1L 890");
        let report = scan_image(&tiny_png(), &engine).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].item, "SUNFLOWER OIL 1L");
        assert_eq!(report.records[1].item, "MUSTARD OIL 1L");
    }

    #[test]
    fn scan_surfaces_undecodable_images() {
        let engine = FixedText::new("irrelevant");
        let err = scan_image(b"not an image", &engine).unwrap_err();
        assert!(matches!(err, ScanError::Preprocess(_)));
    }
}
