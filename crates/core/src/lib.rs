pub mod error;
pub mod models;
pub mod naming;
pub mod plan;

pub use error::SplitError;
pub use models::*;
pub use naming::{chapter_file_name, chapter_label};
pub use plan::plan_files;
