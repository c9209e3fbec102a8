use once_cell::sync::Lazy;
use regex::Regex;

// "chapter" followed by one space, or "chapter" as the entire header.
static CHAPTER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^chapter(?: |$)").expect("valid chapter prefix regex"));

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid non-word regex"));

/// Filename-safe label for a chapter header, or an empty string when the
/// header carries nothing usable after its "chapter " prefix.
pub fn chapter_label(header: &str) -> String {
    let label = match CHAPTER_PREFIX.find(header) {
        Some(prefix) => header[prefix.end()..].trim(),
        None => header,
    };

    if !label.chars().any(is_word_char) {
        return String::new();
    }

    NON_WORD_RUN.replace_all(label, "_").into_owned()
}

/// `chapter_<label>.txt`, falling back to the ordinal when the label is empty.
///
/// Two headers that sanitize to the same label produce the same name.
pub fn chapter_file_name(header: &str, ordinal: usize) -> String {
    let mut label = chapter_label(header);
    if label.is_empty() {
        label = ordinal.to_string();
    }

    format!("chapter_{label}.txt")
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
