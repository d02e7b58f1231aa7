use crate::error::{Error, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Environment variable that overrides the cache root.
pub const DATA_HOME_ENV: &str = "MDANALYSIS_DATA";

/// Name of the cache root inside the user's home directory.
pub const DEFAULT_DIR_NAME: &str = "MDAnalysis_data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub data_home: PathBuf,
}

impl Config {
	/// Resolves `data_home` (or the environment / default location) and
	/// makes sure the directory exists.
	pub fn with_data_home(data_home: Option<&Path>) -> Result<Self> {
		Ok(Self {
			data_home: get_data_home(data_home)?,
		})
	}

	/// Storage directory of one dataset below the cache root.
	pub fn dataset_dir(&self, directory: &str) -> PathBuf {
		self.data_home.join(directory)
	}

	/// Delete the cache root and everything below it.
	pub fn clear(&self) -> Result<()> {
		clear_data_home(Some(&self.data_home))
	}
}

/// Return the path of the data directory, creating it if needed.
///
/// An explicit `data_home` wins; otherwise `MDANALYSIS_DATA` is consulted and
/// finally `~/MDAnalysis_data` is used. A leading `~` is expanded to the home
/// directory and relative paths are made absolute.
pub fn get_data_home(data_home: Option<&Path>) -> Result<PathBuf> {
	let path = locate_data_home(data_home, std::env::var_os(DATA_HOME_ENV))?;
	fs::create_dir_all(&path)?;
	Ok(path)
}

/// Delete the data directory and everything below it.
pub fn clear_data_home(data_home: Option<&Path>) -> Result<()> {
	let path = get_data_home(data_home)?;
	tracing::info!("Removing data home {}", path.display());
	fs::remove_dir_all(&path)?;
	Ok(())
}

fn locate_data_home(explicit: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
	let raw = match (explicit, env_value) {
		(Some(path), _) => path.to_path_buf(),
		(None, Some(value)) if !value.is_empty() => PathBuf::from(value),
		_ => home_dir()?.join(DEFAULT_DIR_NAME),
	};

	let expanded = expand_home(&raw)?;
	if expanded.is_absolute() {
		Ok(expanded)
	} else {
		Ok(std::env::current_dir()?.join(expanded))
	}
}

fn expand_home(path: &Path) -> Result<PathBuf> {
	let mut components = path.components();
	match components.next() {
		Some(Component::Normal(first)) if first == "~" => Ok(home_dir()?.join(components.as_path())),
		_ => Ok(path.to_path_buf()),
	}
}

fn home_dir() -> Result<PathBuf> {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.ok_or_else(|| Error::ConfigError("Could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_path_wins_over_environment() {
		let dir = tempfile::tempdir().unwrap();
		let explicit = dir.path().join("explicit");
		let located =
			locate_data_home(Some(&explicit), Some(OsString::from("/somewhere/else"))).unwrap();
		assert_eq!(located, explicit);
	}

	#[test]
	fn environment_used_without_explicit_path() {
		let located = locate_data_home(None, Some(OsString::from("/tmp/MDAnalysisData"))).unwrap();
		assert_eq!(located, PathBuf::from("/tmp/MDAnalysisData"));
	}

	#[test]
	fn empty_environment_falls_back_to_default() {
		let located = locate_data_home(None, Some(OsString::new())).unwrap();
		assert_eq!(located, home_dir().unwrap().join(DEFAULT_DIR_NAME));
	}

	#[test]
	fn default_is_under_home() {
		let located = locate_data_home(None, None).unwrap();
		assert_eq!(located, home_dir().unwrap().join("MDAnalysis_data"));
	}

	#[test]
	fn tilde_is_expanded() {
		let located = locate_data_home(Some(Path::new("~/md_cache")), None).unwrap();
		assert_eq!(located, home_dir().unwrap().join("md_cache"));
	}

	#[test]
	fn relative_path_is_made_absolute() {
		let located = locate_data_home(Some(Path::new("relative/cache")), None).unwrap();
		assert!(located.is_absolute());
		assert!(located.ends_with("relative/cache"));
	}

	#[test]
	fn get_data_home_creates_and_is_idempotent() {
		let dir = tempfile::tempdir().unwrap();
		let target = dir.path().join("a").join("b");
		let first = get_data_home(Some(&target)).unwrap();
		let second = get_data_home(Some(&target)).unwrap();
		assert_eq!(first, target);
		assert_eq!(first, second);
		assert!(target.is_dir());
	}

	#[test]
	fn clear_data_home_removes_tree() {
		let dir = tempfile::tempdir().unwrap();
		let home = get_data_home(Some(&dir.path().join("MDAnalysis_data_test"))).unwrap();
		let nested = home.join("some_dataset");
		fs::create_dir_all(&nested).unwrap();
		let textfile = nested.join("address.txt");
		fs::write(&textfile, "Four score and seven years ago").unwrap();
		assert!(textfile.exists());

		clear_data_home(Some(&home)).unwrap();
		assert!(!home.exists());
		assert!(!textfile.exists());
	}

	#[test]
	fn config_dataset_dir_joins_directory() {
		let dir = tempfile::tempdir().unwrap();
		let config = Config::with_data_home(Some(dir.path())).unwrap();
		assert_eq!(config.dataset_dir("CG_fiber"), dir.path().join("CG_fiber"));
	}

	#[test]
	fn config_clear_removes_data_home() {
		let dir = tempfile::tempdir().unwrap();
		let config = Config::with_data_home(Some(&dir.path().join("cache"))).unwrap();
		fs::create_dir_all(config.dataset_dir("CG_fiber")).unwrap();

		config.clear().unwrap();
		assert!(!config.data_home.exists());
	}
}
