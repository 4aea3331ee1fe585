use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a price-sheet rate token.
///
/// Accepts plain decimals plus the list style `1,250/-`: thousands
/// separators are stripped and a trailing `/-` ignored. Sign is preserved;
/// rates are not validated for being positive anywhere in this system.
pub(crate) fn parse_rate(token: &str) -> Option<Decimal> {
    let token = token.trim().trim_end_matches("/-");
    let clean = token.replace(',', "");
    if clean.is_empty() {
        return None;
    }
    Decimal::from_str(&clean).ok()
}
