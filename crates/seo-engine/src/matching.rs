/// Case-insensitive substring test.
pub fn contains_ignore_case(field: &str, keyword: &str) -> bool {
    field.to_lowercase().contains(&keyword.to_lowercase())
}

/// Whether every word of `keyword` occurs somewhere in `field`, ignoring case.
///
/// Word order and contiguity do not matter, and words match as substrings, so
/// "Consulting Services" matches "services for consultants". An empty keyword
/// never matches.
pub fn partial_match(keyword: &str, field: &str) -> bool {
    let field = field.to_lowercase();
    let mut words = keyword.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(|word| field.contains(&word.to_lowercase()))
}
