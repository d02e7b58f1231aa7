//! Unpacking of downloaded dataset archives.

use crate::error::{Error, Result};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
    TarBz2,
    Zip,
}

impl ArchiveFormat {
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Ok(Self::TarGz)
        } else if lower.ends_with(".tar.bz2") || lower.ends_with(".tbz2") {
            Ok(Self::TarBz2)
        } else if lower.ends_with(".tar") {
            Ok(Self::Tar)
        } else if lower.ends_with(".zip") {
            Ok(Self::Zip)
        } else {
            Err(Error::ArchiveError(format!(
                "Unsupported archive format: {}",
                filename
            )))
        }
    }
}

/// Unpack `archive_path` into `destination`, keeping the archive itself.
pub fn extract(archive_path: &Path, destination: &Path) -> Result<()> {
    let filename = archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::ArchiveError(format!("Invalid archive path: {}", archive_path.display()))
        })?;
    let format = ArchiveFormat::from_filename(filename)?;

    tracing::info!("Unpacking {}...", archive_path.display());
    let file = BufReader::new(File::open(archive_path)?);
    match format {
        ArchiveFormat::Tar => unpack_tar(file, destination),
        ArchiveFormat::TarGz => unpack_tar(GzDecoder::new(file), destination),
        ArchiveFormat::TarBz2 => unpack_tar(BzDecoder::new(file), destination),
        ArchiveFormat::Zip => {
            let mut archive = zip::ZipArchive::new(file)?;
            archive.extract(destination)?;
            Ok(())
        }
    }
}

fn unpack_tar<R: Read>(reader: R, destination: &Path) -> Result<()> {
    tar::Archive::new(reader)
        .unpack(destination)
        .map_err(|e| Error::ArchiveError(e.to_string()))
}
