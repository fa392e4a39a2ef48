use std::collections::HashSet;

/// Extract the distinct tokens of a piece of message text.
///
/// The text is lowercased, then split on every character that is not
/// alphanumeric; separators are discarded and each maximal alphanumeric run
/// becomes one token. Alphanumeric means Unicode alphanumeric, so accented
/// words such as `mañana` stay whole.
pub fn extract_tokens(text: &str) -> HashSet<String> {
    split_tokens(&text.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// Normalize a single search term the same way indexed text is normalized
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Break a free-form query into the tokens it would produce if indexed.
///
/// Returned sorted and deduplicated.
pub fn tokenize_query(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = extract_tokens(query).into_iter().collect();
    tokens.sort();
    tokens
}

fn split_tokens(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}
