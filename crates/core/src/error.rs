use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("no chapters found")]
    NoChapters,

    #[error("failed reading {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing {}", .path.display())]
    WriteChapter {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
