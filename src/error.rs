use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Dataset not found: {0}")]
	DatasetNotFound(String),

	#[error("Data {role}={} not found and downloads are disabled", path.display())]
	DataUnavailable { role: String, path: PathBuf },

	#[error(
		"{} has an SHA256 checksum ({computed}) differing from expected ({expected}), file may be corrupted",
		path.display()
	)]
	ChecksumMismatch {
		path: PathBuf,
		computed: String,
		expected: String,
	},

	#[error("Files in {location} are incomplete: only {found} but should be {expected}")]
	IncompleteArchive {
		location: String,
		found: usize,
		expected: usize,
	},

	#[error("Description not found: {0}")]
	DescriptionNotFound(String),

	#[error("Download failed: {0}")]
	DownloadFailed(String),

	#[error("Archive error: {0}")]
	ArchiveError(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Error::DownloadFailed(err.to_string())
	}
}

impl From<zip::result::ZipError> for Error {
	fn from(err: zip::result::ZipError) -> Self {
		Error::ArchiveError(err.to_string())
	}
}

impl From<glob::PatternError> for Error {
	fn from(err: glob::PatternError) -> Self {
		Error::ConfigError(format!("invalid member pattern: {}", err))
	}
}

pub type Result<T> = std::result::Result<T, Error>;
