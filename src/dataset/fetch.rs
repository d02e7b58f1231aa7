use crate::config::Config;
use crate::dataset::archive;
use crate::dataset::descr::read_description;
use crate::dataset::downloader::Downloader;
use crate::dataset::registry::{
    ArchiveContents, DatasetMetadata, DatasetRegistry, Layout, MemberSelection,
    RemoteFileMetadata,
};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A group of files selected from an unpacked archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberFiles {
    pub role: String,
    pub paths: Vec<PathBuf>,
    pub labels: Vec<String>,
}

/// Local files of a fetched dataset together with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub name: String,
    pub files: BTreeMap<String, PathBuf>,
    pub members: Option<MemberFiles>,
    #[serde(rename = "DESCR")]
    pub descr: String,
}

impl Dataset {
    pub fn path(&self, role: &str) -> Option<&Path> {
        self.files.get(role).map(PathBuf::as_path)
    }

    pub fn topology(&self) -> Option<&Path> {
        self.path("topology")
    }

    pub fn trajectory(&self) -> Option<&Path> {
        self.path("trajectory")
    }

    /// Ensemble trajectories, for datasets that ship them.
    pub fn trajectories(&self) -> &[PathBuf] {
        match &self.members {
            Some(members) if members.role == "trajectories" => &members.paths,
            _ => &[],
        }
    }

    pub fn n_members(&self) -> usize {
        self.members.as_ref().map_or(0, |m| m.paths.len())
    }
}

/// Resolves dataset names and makes their files available locally.
pub struct DatasetFetcher<'a> {
    registry: &'a DatasetRegistry,
    downloader: Downloader,
}

impl DatasetFetcher<'static> {
    /// Fetcher over all built-in datasets with a progress bar per download.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(DatasetRegistry::builtin(), Downloader::new()?))
    }
}

impl<'a> DatasetFetcher<'a> {
    pub fn new(registry: &'a DatasetRegistry, downloader: Downloader) -> Self {
        Self {
            registry,
            downloader,
        }
    }

    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Fetch dataset `name` into `<data_home>/<directory>`.
    ///
    /// Files already on disk are used as they are and not verified again.
    /// With `download_if_missing` false, a missing file is an error and no
    /// network request is made.
    pub fn fetch(
        &self,
        name: &str,
        data_home: Option<&Path>,
        download_if_missing: bool,
    ) -> Result<Dataset> {
        let meta = self.registry.get(name)?;
        let data_location = Config::with_data_home(data_home)?.dataset_dir(&meta.directory);
        fs::create_dir_all(&data_location)?;

        let (files, members) = match &meta.layout {
            Layout::Files(remotes) => (
                self.fetch_files(remotes, &data_location, download_if_missing)?,
                None,
            ),
            Layout::Archive { archive, contents } => self.fetch_archive(
                archive,
                contents,
                &data_location,
                download_if_missing,
            )?,
        };

        Ok(Dataset {
            name: meta.name.clone(),
            files,
            members,
            descr: read_description(&meta.description)?.to_string(),
        })
    }

    fn fetch_files(
        &self,
        remotes: &[(String, RemoteFileMetadata)],
        data_location: &Path,
        download_if_missing: bool,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let mut records = BTreeMap::new();
        for (role, remote) in remotes {
            let local_path = data_location.join(&remote.filename);
            if local_path.exists() {
                tracing::debug!(role = %role, path = %local_path.display(), "using cached file");
            } else {
                if !download_if_missing {
                    return Err(Error::DataUnavailable {
                        role: role.clone(),
                        path: local_path,
                    });
                }
                tracing::info!("Downloading {}: {} -> {}...", role, remote.url, local_path.display());
                self.downloader.fetch_remote(remote, data_location)?;
            }
            records.insert(role.clone(), local_path);
        }
        Ok(records)
    }

    fn fetch_archive(
        &self,
        remote: &RemoteFileMetadata,
        contents: &ArchiveContents,
        data_location: &Path,
        download_if_missing: bool,
    ) -> Result<(BTreeMap<String, PathBuf>, Option<MemberFiles>)> {
        match collect_contents(contents, data_location) {
            Ok(unpacked) => {
                tracing::debug!(path = %data_location.display(), "using unpacked archive");
                return Ok(unpacked);
            }
            Err(Error::IncompleteArchive { .. }) => {}
            Err(e) => return Err(e),
        }

        let archive_path = data_location.join(&remote.filename);
        if !archive_path.exists() {
            if !download_if_missing {
                return Err(Error::DataUnavailable {
                    role: "archive".to_string(),
                    path: archive_path,
                });
            }
            tracing::info!("Downloading archive: {} -> {}...", remote.url, archive_path.display());
            self.downloader.fetch_remote(remote, data_location)?;
        }

        archive::extract(&archive_path, data_location)?;
        collect_contents(contents, data_location)
    }
}

/// Locate the declared contents of an unpacked archive.
fn collect_contents(
    contents: &ArchiveContents,
    data_location: &Path,
) -> Result<(BTreeMap<String, PathBuf>, Option<MemberFiles>)> {
    let mut files = BTreeMap::new();
    for (role, relative) in &contents.files {
        let path = data_location.join(relative);
        if !path.exists() {
            return Err(Error::IncompleteArchive {
                location: path.display().to_string(),
                found: 0,
                expected: 1,
            });
        }
        files.insert(role.clone(), path);
    }

    let members = match &contents.members {
        None => None,
        Some(spec) => {
            let (location, paths) = match &spec.selection {
                MemberSelection::Glob(pattern) => (
                    data_location.join(pattern).display().to_string(),
                    glob_members(data_location, pattern)?,
                ),
                MemberSelection::Listed(relative) => (
                    data_location.display().to_string(),
                    relative
                        .iter()
                        .map(|path| data_location.join(path))
                        .filter(|path| path.exists())
                        .collect(),
                ),
            };
            if paths.len() != spec.expected {
                return Err(Error::IncompleteArchive {
                    location,
                    found: paths.len(),
                    expected: spec.expected,
                });
            }
            Some(MemberFiles {
                role: spec.role.clone(),
                paths,
                labels: spec.labels.clone(),
            })
        }
    };

    Ok((files, members))
}

/// Match a `/`-separated glob `pattern` below `base`.
///
/// Only the pattern is interpreted; `base` is walked as a plain path, so
/// metacharacters or non-UTF-8 bytes in the data home do not matter.
fn glob_members(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut candidates = vec![base.to_path_buf()];
    for part in pattern.split('/').filter(|part| !part.is_empty()) {
        let matcher = glob::Pattern::new(part)?;
        let mut next = Vec::new();
        for dir in &candidates {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(_) => continue,
            };
            for entry in entries {
                let entry = entry?;
                if entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| matcher.matches(name))
                {
                    next.push(entry.path());
                }
            }
        }
        candidates = next;
    }
    candidates.sort();
    Ok(candidates)
}

/// Fetch a built-in dataset by name.
pub fn fetch(name: &str, data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    DatasetFetcher::builtin()?.fetch(name, data_home, download_if_missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::archive::tests::tar_gz;
    use crate::dataset::registry::Members;
    use httpmock::prelude::*;
    use sha2::{Digest, Sha256};

    fn sha256_hex(data: &[u8]) -> String {
        hex::encode(Sha256::digest(data))
    }

    fn ensemble(server: &MockServer, archive: &[u8], expected: usize) -> DatasetRegistry {
        DatasetRegistry::new(vec![DatasetMetadata::archive(
            "ensemble",
            "adk_transitions_DIMS.rst",
            RemoteFileMetadata::new("E.tar.gz", &server.url("/E.tar.gz"), &sha256_hex(archive)),
            ArchiveContents {
                files: vec![("topology".to_string(), "E/topologies/adk.psf".to_string())],
                members: Some(Members {
                    role: "trajectories".to_string(),
                    selection: MemberSelection::Glob("E/trajectories/dims*_fit-core.dcd".to_string()),
                    expected,
                    labels: Vec::new(),
                }),
            },
        )])
        .unwrap()
    }

    fn ensemble_archive() -> Vec<u8> {
        tar_gz(&[
            ("E/topologies/adk.psf", &b"psf"[..]),
            ("E/trajectories/dims0002_fit-core.dcd", &b"2"[..]),
            ("E/trajectories/dims0001_fit-core.dcd", &b"1"[..]),
            ("E/trajectories/dims0003_fit-core.dcd", &b"3"[..]),
            ("E/trajectories/notes.txt", &b"ignored"[..]),
        ])
    }

    #[test]
    fn archive_is_unpacked_and_members_globbed() {
        let server = MockServer::start();
        let archive = ensemble_archive();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/E.tar.gz");
            then.status(200).body(archive.clone());
        });
        let registry = ensemble(&server, &archive, 3);
        let fetcher = DatasetFetcher::new(&registry, Downloader::quiet().unwrap());
        let home = tempfile::tempdir().unwrap();

        let dataset = fetcher.fetch("ensemble", Some(home.path()), true).unwrap();
        let location = home.path().join("ensemble");
        assert_eq!(dataset.topology(), Some(location.join("E/topologies/adk.psf").as_path()));
        assert_eq!(dataset.n_members(), 3);
        assert_eq!(
            dataset.trajectories()[0],
            location.join("E/trajectories/dims0001_fit-core.dcd")
        );
        assert!(dataset.descr.contains("DIMS"));

        // unpacked contents are reused without touching the network
        let again = fetcher.fetch("ensemble", Some(home.path()), false).unwrap();
        assert_eq!(again, dataset);
        mock.assert_hits(1);
    }

    #[test]
    fn archive_present_but_not_unpacked_is_extracted_offline() {
        let server = MockServer::start();
        let archive = ensemble_archive();
        let registry = ensemble(&server, &archive, 3);
        let fetcher = DatasetFetcher::new(&registry, Downloader::quiet().unwrap());
        let home = tempfile::tempdir().unwrap();
        let location = home.path().join("ensemble");
        fs::create_dir_all(&location).unwrap();
        fs::write(location.join("E.tar.gz"), &archive).unwrap();

        let dataset = fetcher.fetch("ensemble", Some(home.path()), false).unwrap();
        assert_eq!(dataset.n_members(), 3);
        assert_eq!(fetcher.downloader().transfers(), 0);
    }

    #[test]
    fn unpacked_archive_found_under_data_home_with_glob_syntax() {
        let server = MockServer::start();
        let archive = ensemble_archive();
        let any = server.mock(|when, then| {
            when.method(GET);
            then.status(200).body(archive.clone());
        });
        let registry = ensemble(&server, &archive, 3);
        let fetcher = DatasetFetcher::new(&registry, Downloader::quiet().unwrap());
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("cache[1]");
        let location = home.join("ensemble");
        fs::create_dir_all(&location).unwrap();
        fs::write(location.join("E.tar.gz"), &archive).unwrap();

        let first = fetcher.fetch("ensemble", Some(&home), false).unwrap();
        assert_eq!(first.n_members(), 3);

        // without the archive the unpacked files alone must be recognised
        fs::remove_file(location.join("E.tar.gz")).unwrap();
        let second = fetcher.fetch("ensemble", Some(&home), true).unwrap();
        assert_eq!(second, first);
        assert_eq!(fetcher.downloader().transfers(), 0);
        any.assert_hits(0);
    }

    #[cfg(unix)]
    #[test]
    fn glob_members_below_non_utf8_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join(OsStr::from_bytes(b"cache\xff"));
        let trajectories = base.join("E").join("trajectories");
        fs::create_dir_all(&trajectories).unwrap();
        for name in ["dims2_fit-core.dcd", "dims1_fit-core.dcd", "notes.txt"] {
            fs::write(trajectories.join(name), b"x").unwrap();
        }

        let paths = glob_members(&base, "E/trajectories/dims*_fit-core.dcd").unwrap();
        assert_eq!(
            paths,
            vec![
                trajectories.join("dims1_fit-core.dcd"),
                trajectories.join("dims2_fit-core.dcd"),
            ]
        );
    }

    #[test]
    fn invalid_member_pattern_is_not_treated_as_missing() {
        let home = tempfile::tempdir().unwrap();
        let contents = ArchiveContents {
            files: Vec::new(),
            members: Some(Members {
                role: "trajectories".to_string(),
                selection: MemberSelection::Glob("E/[unclosed".to_string()),
                expected: 1,
                labels: Vec::new(),
            }),
        };
        let registry = DatasetRegistry::new(vec![DatasetMetadata::archive(
            "broken",
            "adk_transitions_DIMS.rst",
            RemoteFileMetadata::new("B.tar.gz", "http://127.0.0.1:9/B.tar.gz", &"0".repeat(64)),
            contents,
        )])
        .unwrap();
        let fetcher = DatasetFetcher::new(&registry, Downloader::quiet().unwrap());

        let err = fetcher.fetch("broken", Some(home.path()), false).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn wrong_member_count_is_incomplete_archive() {
        let server = MockServer::start();
        let archive = ensemble_archive();
        server.mock(|when, then| {
            when.method(GET).path("/E.tar.gz");
            then.status(200).body(archive.clone());
        });
        let registry = ensemble(&server, &archive, 200);
        let fetcher = DatasetFetcher::new(&registry, Downloader::quiet().unwrap());
        let home = tempfile::tempdir().unwrap();

        match fetcher.fetch("ensemble", Some(home.path()), true) {
            Err(Error::IncompleteArchive {
                found, expected, ..
            }) => {
                assert_eq!(found, 3);
                assert_eq!(expected, 200);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn listed_members_keep_labels() {
        let home = tempfile::tempdir().unwrap();
        let location = home.path().join("vesicles");
        for size in ["small", "large"] {
            let dir = location.join(size);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("system.gro"), b"gro").unwrap();
        }
        let contents = ArchiveContents {
            files: Vec::new(),
            members: Some(Members {
                role: "structures".to_string(),
                selection: MemberSelection::Listed(vec![
                    "small/system.gro".to_string(),
                    "large/system.gro".to_string(),
                ]),
                expected: 2,
                labels: vec!["small".to_string(), "large".to_string()],
            }),
        };

        let (files, members) = collect_contents(&contents, &location).unwrap();
        assert!(files.is_empty());
        let members = members.unwrap();
        assert_eq!(members.paths[1], location.join("large/system.gro"));
        assert_eq!(members.labels, vec!["small", "large"]);
    }

    #[test]
    fn missing_declared_file_is_incomplete_archive() {
        let home = tempfile::tempdir().unwrap();
        let contents = ArchiveContents {
            files: vec![("topology".to_string(), "top/missing.psf".to_string())],
            members: None,
        };
        assert!(matches!(
            collect_contents(&contents, home.path()),
            Err(Error::IncompleteArchive { expected: 1, .. })
        ));
    }

    #[test]
    fn handle_serializes_description_as_descr() {
        let dataset = Dataset {
            name: "alpha".to_string(),
            files: BTreeMap::from([("topology".to_string(), PathBuf::from("/x/a.top"))]),
            members: None,
            descr: "text".to_string(),
        };
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["DESCR"], "text");
        assert_eq!(json["files"]["topology"], "/x/a.top");
    }
}
