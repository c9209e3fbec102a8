use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chapters_core::plan_files;
use chapters_observability::{RunMetrics, init_tracing};
use chapters_segment::Segmenter;
use chapters_storage::{ChapterSink, DirectorySink, read_document};
use clap::Parser;
use clap::error::ErrorKind;

const USAGE: &str = "usage: split-chapters <input_file>";

#[derive(Debug, Parser)]
#[command(name = "split-chapters")]
#[command(about = "Split a text document into one file per chapter")]
#[command(version)]
struct Cli {
    /// Text file to split; chapter files are written to the current directory
    #[arg(allow_hyphen_values = true)]
    input_file: PathBuf,

    // Anything after the input file is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing("split_chapters");

    match run(&cli.input_file, &DirectorySink::current_dir()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, sink: &impl ChapterSink) -> Result<()> {
    let metrics = RunMetrics::new();

    let text = read_document(input)?;
    let chapters = Segmenter::new().split(&text)?;
    metrics.add_chapters(chapters.len());

    let plan = plan_files(&chapters);
    metrics.add_collisions(plan.collisions.len());
    for collision in &plan.collisions {
        tracing::info!(
            file_name = %collision.file_name,
            ordinal = collision.ordinal,
            earlier_ordinal = collision.earlier_ordinal,
            "chapter file name reused; later chapter overwrites earlier one"
        );
    }

    for file in &plan.files {
        let bytes = sink
            .write_chapter(file)
            .with_context(|| format!("chapter {} not written", file.ordinal))?;
        metrics.observe_write(bytes);
        println!("wrote {}", file.file_name);
    }

    metrics.log_summary();
    Ok(())
}
