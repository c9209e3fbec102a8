use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chapters_core::{ChapterFile, SplitError};
use parking_lot::RwLock;

/// Reads the whole input document as UTF-8.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, SplitError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SplitError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

pub trait ChapterSink {
    /// Stores one chapter file, replacing any previous file of the same name.
    /// Returns the number of bytes written.
    fn write_chapter(&self, file: &ChapterFile) -> Result<u64, SplitError>;
}

#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn path_for(&self, file: &ChapterFile) -> PathBuf {
        self.root.join(&file.file_name)
    }
}

impl ChapterSink for DirectorySink {
    fn write_chapter(&self, file: &ChapterFile) -> Result<u64, SplitError> {
        let path = self.path_for(file);
        fs::write(&path, file.body.as_bytes())
            .map_err(|source| SplitError::WriteChapter { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), ordinal = file.ordinal, "wrote chapter file");
        Ok(file.body.len() as u64)
    }
}

#[derive(Clone, Default)]
pub struct MemorySink {
    files: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.files.read().get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names = self.files.read().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl ChapterSink for MemorySink {
    fn write_chapter(&self, file: &ChapterFile) -> Result<u64, SplitError> {
        self.files
            .write()
            .insert(file.file_name.clone(), file.body.clone());
        Ok(file.body.len() as u64)
    }
}
