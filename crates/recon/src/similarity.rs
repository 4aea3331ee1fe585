use strsim::normalized_levenshtein;

/// Score two item names ignoring token order, on a 0–100 scale.
///
/// Both names are lowercased, split on anything non-alphanumeric, and their
/// tokens sorted and rejoined before a normalized Levenshtein comparison.
/// 100 means identical token multisets regardless of original order; the
/// scale is truncated rather than rounded so near-identical long strings
/// stay at 99. There is no separate normalization pass anywhere upstream:
/// raw names come straight here.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = token_sort_key(a);
    let b = token_sort_key(b);

    if a == b {
        return 100;
    }

    (normalized_levenshtein(&a, &b) * 100.0) as u8
}

fn token_sort_key(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_names_score_100() {
        assert_eq!(token_sort_ratio("Sunflower Oil 1L", "Sunflower Oil 1L"), 100);
    }

    #[test]
    fn reordered_tokens_score_100() {
        assert_eq!(token_sort_ratio("Oil Sunflower 1L", "Sunflower Oil 1L"), 100);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(token_sort_ratio("sunflower-oil, 1l", "Sunflower Oil 1L"), 100);
    }

    #[test]
    fn unrelated_names_score_low() {
        let score = token_sort_ratio("Totally Unrelated Widget", "Basmati Rice 5KG");
        assert!(score < 50, "score was {score}");
    }

    #[test]
    fn close_names_score_between() {
        let score = token_sort_ratio("Sunflower Oil 1Ltr", "Sunflower Oil 1L");
        assert!(score > 75 && score < 100, "score was {score}");
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(token_sort_ratio("", "Sunflower Oil 1L"), 0);
    }

    #[test]
    fn different_names_never_reach_100() {
        assert!(token_sort_ratio("Sunflower Oil 1L", "Sunflower Oil 2L") < 100);
    }

    proptest! {
        #[test]
        fn score_is_bounded(a in ".*", b in ".*") {
            prop_assert!(token_sort_ratio(&a, &b) <= 100);
        }

        #[test]
        fn score_is_symmetric(a in ".*", b in ".*") {
            prop_assert_eq!(token_sort_ratio(&a, &b), token_sort_ratio(&b, &a));
        }
    }
}
