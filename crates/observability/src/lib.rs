use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct RunMetrics {
    chapters_found: AtomicU64,
    files_written: AtomicU64,
    bytes_written: AtomicU64,
    name_collisions: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSnapshot {
    pub chapters_found: u64,
    pub files_written: u64,
    pub bytes_written: u64,
    pub name_collisions: u64,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chapters(&self, count: usize) {
        self.chapters_found
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn add_collisions(&self, count: usize) {
        self.name_collisions
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn observe_write(&self, bytes: u64) {
        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            chapters_found: self.chapters_found.load(Ordering::Relaxed),
            files_written: self.files_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            name_collisions: self.name_collisions.load(Ordering::Relaxed),
        }
    }

    /// Emits the current counters as one `info` event.
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(summary) => tracing::info!(summary = %summary, "split finished"),
            Err(err) => tracing::warn!(error = %err, "failed encoding run summary"),
        }
    }
}

/// Installs a JSON subscriber on stderr. `RUST_LOG` overrides the default
/// `warn` level; repeated calls are no-ops.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=warn,chapters_segment=warn,chapters_storage=warn,chapters_observability=warn",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    });
}
