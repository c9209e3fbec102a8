use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::models::{Chapter, ChapterFile, FilePlan, NameCollision};
use crate::naming::chapter_file_name;

/// Names and renders every chapter in document order.
pub fn plan_files(chapters: &[Chapter]) -> FilePlan {
    let mut first_use: HashMap<String, usize> = HashMap::new();
    let mut plan = FilePlan::default();

    for (idx, chapter) in chapters.iter().enumerate() {
        let ordinal = idx + 1;
        let file_name = chapter_file_name(&chapter.header, ordinal);

        match first_use.entry(file_name.clone()) {
            Entry::Occupied(entry) => plan.collisions.push(NameCollision {
                file_name: file_name.clone(),
                ordinal,
                earlier_ordinal: *entry.get(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(ordinal);
            }
        }

        plan.files.push(ChapterFile {
            ordinal,
            file_name,
            body: chapter.render(),
        });
    }

    plan
}
