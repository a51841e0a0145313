use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;
use tokio::fs;
use tokio::sync::{mpsc, Mutex};
use tokio::task;

use crate::extract::{extract, ExtractError, ExtractOptions};
use crate::output;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Batch configuration shared by every worker.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    /// Mirror each input file's directory chain under the output root.
    pub preserve: bool,
    pub concurrency: usize,
    pub extract: ExtractOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            preserve: false,
            concurrency: 8,
            extract: ExtractOptions::default(),
        }
    }
}

/// Outcome of one input file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub written: usize,
    pub error: Option<ProcessError>,
}

/// Process sourcemap files over a bounded worker pool.
///
/// Each file is read, extracted, and written by one task; a failing file
/// is reported in its `FileReport` and never aborts the rest of the
/// batch. Writes for one document happen sequentially inside its task,
/// so duplicate destination paths within a map resolve last-write-wins.
pub async fn process_many(files: Vec<PathBuf>, opts: BatchOptions) -> Vec<FileReport> {
    let concurrency = opts.concurrency.max(1);
    let (tx, rx) = mpsc::channel::<PathBuf>(concurrency * 2);
    let (report_tx, mut report_rx) = mpsc::channel::<FileReport>(concurrency * 2);
    let opts = Arc::new(opts);
    let rx = Arc::new(Mutex::new(rx));

    // Spawn workers
    let mut handles = Vec::new();
    for _ in 0..concurrency {
        let rx = Arc::clone(&rx);
        let report_tx = report_tx.clone();
        let opts = Arc::clone(&opts);
        let handle = task::spawn(async move {
            loop {
                let input = {
                    let mut rx = rx.lock().await;
                    rx.recv().await
                };
                let input = match input {
                    Some(path) => path,
                    None => break,
                };
                let report = process_one(input, &opts).await;
                let _ = report_tx.send(report).await;
            }
        });
        handles.push(handle);
    }

    // Feed files to workers
    for file in files {
        let _ = tx.send(file).await;
    }
    drop(tx);
    drop(report_tx);

    for handle in handles {
        let _ = handle.await;
    }

    let mut reports = Vec::new();
    while let Some(report) = report_rx.recv().await {
        reports.push(report);
    }
    reports
}

async fn process_one(input: PathBuf, opts: &BatchOptions) -> FileReport {
    debug!("processing {}", input.display());
    match recover_sources(&input, opts).await {
        Ok(written) => FileReport {
            input,
            written,
            error: None,
        },
        Err(err) => {
            warn!("skipping {}: {err}", input.display());
            FileReport {
                input,
                written: 0,
                error: Some(err),
            }
        }
    }
}

async fn recover_sources(input: &Path, opts: &BatchOptions) -> Result<usize, ProcessError> {
    let bytes = fs::read(input).await?;
    let sources = extract(&bytes, input, &opts.extract).await?;
    let root = output::destination_root(&opts.output_dir, input, opts.preserve);

    let mut written = 0usize;
    for source in &sources {
        let dest = output::write_source(&root, &source.relative_path, &source.content).await?;
        debug!("wrote {} bytes to {}", source.content.len(), dest.display());
        written += 1;
    }
    Ok(written)
}
