use std::sync::LazyLock;

use regex::Regex;

/// First bracketed run of uppercase ASCII letters, e.g. `[AAPL]`.
static BRACKETED_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Z]+)\]").expect("bracketed-symbol pattern is valid"));

/// Extracts a best-effort ticker symbol from a bulletin headline.
///
/// Rules, applied in order:
///
/// 1. The first `[UPPERCASE]` bracketed tag anywhere in the headline wins,
///    returned without the brackets.
/// 2. Otherwise the headline is split on whitespace and the first token of
///    at most five characters whose cased characters are all uppercase is
///    returned as-is. Attached punctuation is kept (`AAPL!` stays `AAPL!`),
///    and short uppercase words (`CEO`, `ON`) match too.
/// 3. Otherwise `None`.
///
/// This is a display heuristic, not a validator: downstream consumers treat
/// the result as a hint and must tolerate both `None` and false positives.
#[must_use]
pub fn extract_symbol(headline: &str) -> Option<String> {
    if let Some(caps) = BRACKETED_SYMBOL.captures(headline) {
        return Some(caps[1].to_string());
    }
    headline
        .split_whitespace()
        .find(|token| is_shouted(token) && token.chars().count() <= 5)
        .map(ToString::to_string)
}

/// At least one cased character, none of them lowercase. Digits and
/// punctuation are uncased and neither match nor disqualify.
fn is_shouted(token: &str) -> bool {
    let mut cased = false;
    for ch in token.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}
