use crate::dataset::checksum::sha256_path;
use crate::dataset::registry::RemoteFileMetadata;
use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

const CHUNK_SIZE: usize = 64 * 1024;

/// Receives transfer progress. Purely cosmetic.
pub trait ProgressObserver: Send + Sync {
    fn start(&self, filename: &str, total: Option<u64>);
    fn advance(&self, bytes: u64);
    fn finish(&self);
}

pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn start(&self, _filename: &str, _total: Option<u64>) {}
    fn advance(&self, _bytes: u64) {}
    fn finish(&self) {}
}

/// Terminal progress bar, one per transfer.
#[derive(Default)]
pub struct ProgressBarObserver {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressObserver for ProgressBarObserver {
    fn start(&self, filename: &str, total: Option<u64>) {
        let bar = match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                bar.set_style(
                    ProgressStyle::with_template(
                        "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => ProgressBar::new_spinner(),
        };
        bar.set_message(filename.to_string());
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn advance(&self, bytes: u64) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.inc(bytes);
            }
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

pub struct Downloader {
    client: Client,
    progress: Box<dyn ProgressObserver>,
    transfers: AtomicUsize,
}

impl Downloader {
    /// Downloader that draws a progress bar for every transfer.
    pub fn new() -> Result<Self> {
        Self::with_progress(Box::new(ProgressBarObserver::default()))
    }

    pub fn quiet() -> Result<Self> {
        Self::with_progress(Box::new(NoProgress))
    }

    pub fn with_progress(progress: Box<dyn ProgressObserver>) -> Result<Self> {
        // Trajectories can take far longer than any sensible total timeout.
        let client = Client::builder()
            .user_agent(concat!("mdanalysis-data/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::DownloadFailed(format!("Could not create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            progress,
            transfers: AtomicUsize::new(0),
        })
    }

    /// Number of transfers this downloader has completed.
    pub fn transfers(&self) -> usize {
        self.transfers.load(Ordering::Relaxed)
    }

    /// Download `remote` into `dirname` and verify its SHA-256.
    ///
    /// Any existing file at the target path is overwritten. On a checksum
    /// mismatch the downloaded file is left in place for inspection.
    pub fn fetch_remote(&self, remote: &RemoteFileMetadata, dirname: &Path) -> Result<PathBuf> {
        let file_path = dirname.join(&remote.filename);

        tracing::info!("Downloading {} -> {}", remote.url, file_path.display());
        self.transfer(&remote.url, &remote.filename, &file_path)?;
        self.transfers.fetch_add(1, Ordering::Relaxed);

        let checksum = sha256_path(&file_path)?;
        if !checksum.eq_ignore_ascii_case(&remote.checksum) {
            tracing::warn!(
                path = %file_path.display(),
                computed = %checksum,
                expected = %remote.checksum,
                "checksum mismatch"
            );
            return Err(Error::ChecksumMismatch {
                path: file_path,
                computed: checksum,
                expected: remote.checksum.clone(),
            });
        }

        tracing::debug!(path = %file_path.display(), "checksum verified");
        Ok(file_path)
    }

    fn transfer(&self, url: &str, filename: &str, file_path: &Path) -> Result<u64> {
        let mut response = self.client.get(url).send()?.error_for_status()?;

        let mut writer = BufWriter::new(File::create(file_path)?);
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written = 0u64;

        self.progress.start(filename, response.content_length());
        let copied = loop {
            let n = match response.read(&mut buf) {
                Ok(0) => break Ok(()),
                Ok(n) => n,
                Err(e) => break Err(Error::DownloadFailed(format!("{}: {}", url, e))),
            };
            if let Err(e) = writer.write_all(&buf[..n]) {
                break Err(Error::IoError(e));
            }
            written += n as u64;
            self.progress.advance(n as u64);
        };
        self.progress.finish();
        copied?;

        writer.flush()?;
        Ok(written)
    }
}
