use regex::Regex;

/// A whole line that begins with the word "chapter" (any case) and a space.
///
/// Only the keyword is case-insensitive; the rest of the line is free text.
const HEADING_PATTERN: &str = r"(?m)^(?i:chapter) .*$";

pub(crate) fn heading_regex() -> Regex {
    Regex::new(HEADING_PATTERN).expect("valid heading regex")
}
