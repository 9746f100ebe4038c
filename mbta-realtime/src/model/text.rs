//! Display formatting helpers.

/// Uppercase the first ASCII lowercase letter of every whitespace-separated
/// word. Other characters are left as they are.
///
/// ```
/// use mbta_realtime::model::capitalize_words;
///
/// assert_eq!(capitalize_words("silver line waterfront"), "Silver Line Waterfront");
/// assert_eq!(capitalize_words("  red  line"), "  Red  Line");
/// ```
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start && c.is_ascii_lowercase() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("orange line"), "Orange Line");
        assert_eq!(capitalize_words("Orange Line"), "Orange Line");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn leaves_non_letters_alone() {
        assert_eq!(capitalize_words("route 1 inbound"), "Route 1 Inbound");
        assert_eq!(capitalize_words("sl1-sl2"), "Sl1-sl2");
        assert_eq!(capitalize_words("éole line"), "éole Line");
    }
}
