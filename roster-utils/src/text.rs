//! Pure text helpers for card and modal rendering.

/// Build a two-letter initials badge from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Truncate a string to `max_chars`, appending an ellipsis when cut.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }

    let kept: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Leanne Graham"), "LG");
        assert_eq!(initials("Mrs. Dennis Schulist"), "MD");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn truncate_only_cuts_long_values() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a rather long course name", 10), "a rather …");
    }
}
