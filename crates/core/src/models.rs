/// One heading line and the text that follows it up to the next heading.
///
/// Both fields are whitespace-trimmed. `content` is empty when the heading is
/// the last thing in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub header: String,
    pub content: String,
}

impl Chapter {
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }

    /// The exact bytes written for this chapter: header, blank line, body.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.header, self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    /// 1-based position of the chapter in the document.
    pub ordinal: usize,
    pub file_name: String,
    pub body: String,
}

/// A later chapter whose file name was already taken by an earlier one.
/// The later write still wins; this only exists so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub file_name: String,
    pub ordinal: usize,
    pub earlier_ordinal: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FilePlan {
    pub files: Vec<ChapterFile>,
    pub collisions: Vec<NameCollision>,
}
