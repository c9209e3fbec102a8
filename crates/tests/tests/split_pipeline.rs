use std::fs;

use anyhow::Result;
use chapters_core::{FilePlan, plan_files};
use chapters_segment::{segment, split};
use chapters_storage::{ChapterSink, DirectorySink, MemorySink, read_document};

fn write_all(plan: &FilePlan, sink: &impl ChapterSink) -> Result<()> {
    for file in &plan.files {
        sink.write_chapter(file)?;
    }
    Ok(())
}

#[test]
fn document_on_disk_splits_into_chapter_files() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let input = temp.path().join("novel.txt");
    fs::write(
        &input,
        "Title page\nby Somebody\n\nChapter 1: The Start\nIt began.\n\n\nIt went on.\n\nchapter 2\nMiddle.\nCHAPTER The End\n",
    )?;

    let text = read_document(&input)?;
    let plan = plan_files(&split(&text)?);
    write_all(&plan, &DirectorySink::new(temp.path()))?;

    assert_eq!(
        fs::read_to_string(temp.path().join("chapter_1_The_Start.txt"))?,
        "Chapter 1: The Start\n\nIt began.\n\n\nIt went on."
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("chapter_2.txt"))?,
        "chapter 2\n\nMiddle."
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("chapter_The_End.txt"))?,
        "CHAPTER The End\n\n"
    );
    Ok(())
}

#[test]
fn chapter_count_matches_heading_count() {
    let text = (1..=25)
        .map(|n| format!("Chapter {n}\nline {n}\n"))
        .collect::<String>();

    let chapters = segment(&text);
    assert_eq!(chapters.len(), 25);

    let plan = plan_files(&chapters);
    for (idx, file) in plan.files.iter().enumerate() {
        assert_eq!(file.ordinal, idx + 1);
        assert_eq!(file.file_name, format!("chapter_{}.txt", idx + 1));
    }
}

#[test]
fn preamble_never_reaches_output() -> Result<()> {
    let sink = MemorySink::new();
    let plan = plan_files(&split("SECRET PREFACE\n\nChapter I\none\nChapter II\ntwo")?);
    write_all(&plan, &sink)?;

    assert_eq!(sink.file_names(), vec!["chapter_I.txt", "chapter_II.txt"]);
    for name in sink.file_names() {
        assert!(!sink.get(&name).unwrap_or_default().contains("SECRET"));
    }
    Ok(())
}

#[test]
fn plain_labels_round_trip_into_file_names() {
    for label in ["One", "XIV", "epilogue", "part_2", "Mixed_Case_9"] {
        let chapters = segment(&format!("Chapter {label}\nbody"));
        let plan = plan_files(&chapters);
        assert_eq!(plan.files[0].file_name, format!("chapter_{label}.txt"));
    }
}

#[test]
fn document_without_headings_is_rejected() {
    let err = split("A story with no chapter headings.\nchapter\n").unwrap_err();
    assert_eq!(err.to_string(), "no chapters found");
}
