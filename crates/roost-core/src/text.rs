//! Small string helpers shared by the normalizer, the asset mapper and the
//! mock engine.

use std::collections::HashSet;

/// Trims `raw` and returns `None` when it is empty or the literal `any`
/// (case-insensitive). Search forms submit `any` for "no preference".
#[must_use]
pub fn clean_any(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(trimmed)
    }
}

/// Title-cases each whitespace-separated word, treating `_` as a space.
///
/// `"listed_rental"` becomes `"Listed Rental"`, `"COMMERCIAL"` becomes
/// `"Commercial"`.
#[must_use]
pub fn titleize(input: &str) -> String {
    input
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims every value and drops blanks and repeats, keeping first-seen order.
#[must_use]
pub fn dedup_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any value equals or contains any needle, ignoring case.
#[must_use]
pub fn contains_any_ci<S: AsRef<str>>(values: &[S], needles: &[&str]) -> bool {
    needles.iter().any(|needle| {
        let needle = needle.to_lowercase();
        values
            .iter()
            .any(|value| value.as_ref().to_lowercase().contains(&needle))
    })
}
