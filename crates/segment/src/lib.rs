mod heading;

use chapters_core::{Chapter, SplitError};
use once_cell::sync::Lazy;
use regex::Regex;

static DEFAULT_SEGMENTER: Lazy<Segmenter> = Lazy::new(Segmenter::new);

/// Splits document text at heading lines.
#[derive(Debug, Clone)]
pub struct Segmenter {
    heading: Regex,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            heading: heading::heading_regex(),
        }
    }

    /// Every heading line with the trimmed text up to the next heading.
    ///
    /// Text before the first heading is dropped. Returns an empty vector when
    /// the document has no heading at all.
    pub fn segment(&self, text: &str) -> Vec<Chapter> {
        let headings = self.heading.find_iter(text).collect::<Vec<_>>();
        let mut chapters = Vec::with_capacity(headings.len());

        if let Some(first) = headings.first() {
            let preamble = text[..first.start()].trim();
            if !preamble.is_empty() {
                tracing::debug!(
                    preamble_chars = preamble.chars().count(),
                    "discarding text before first heading"
                );
            }
        }

        for (idx, heading) in headings.iter().enumerate() {
            let body_end = headings
                .get(idx + 1)
                .map(|next| next.start())
                .unwrap_or(text.len());

            chapters.push(Chapter::new(
                heading.as_str().trim(),
                text[heading.end()..body_end].trim(),
            ));
        }

        tracing::debug!(chapters = chapters.len(), "segmented document");
        chapters
    }

    /// Like [`Segmenter::segment`], but a document without headings is an error.
    pub fn split(&self, text: &str) -> Result<Vec<Chapter>, SplitError> {
        let chapters = self.segment(text);
        if chapters.is_empty() {
            return Err(SplitError::NoChapters);
        }

        Ok(chapters)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn segment(text: &str) -> Vec<Chapter> {
    DEFAULT_SEGMENTER.segment(text)
}

pub fn split(text: &str) -> Result<Vec<Chapter>, SplitError> {
    DEFAULT_SEGMENTER.split(text)
}
