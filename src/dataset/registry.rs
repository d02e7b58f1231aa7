use crate::dataset::catalog;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single remote resource: where it lives locally, where to download it
/// from and the SHA-256 it must have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileMetadata {
    pub filename: String,
    pub url: String,
    pub checksum: String,
}

impl RemoteFileMetadata {
    pub fn new(filename: &str, url: &str, checksum: &str) -> Self {
        Self {
            filename: filename.to_string(),
            url: url.to_string(),
            checksum: checksum.to_ascii_lowercase(),
        }
    }
}

/// How the files of a dataset are selected after an archive was unpacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberSelection {
    /// Glob pattern relative to the dataset directory.
    Glob(String),
    /// Explicit relative paths; only the ones that exist are selected.
    Listed(Vec<String>),
}

/// A group of similar files inside an archive, e.g. an ensemble of
/// trajectories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Members {
    pub role: String,
    pub selection: MemberSelection,
    pub expected: usize,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// What must exist in the dataset directory once an archive was unpacked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveContents {
    /// role -> path relative to the dataset directory
    pub files: Vec<(String, String)>,
    pub members: Option<Members>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Individually downloaded files keyed by role, in declaration order.
    Files(Vec<(String, RemoteFileMetadata)>),
    /// One archive that is unpacked in place.
    Archive {
        archive: RemoteFileMetadata,
        contents: ArchiveContents,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub name: String,
    /// Subdirectory of the data home the files are stored in.
    pub directory: String,
    /// Name of the bundled description resource.
    pub description: String,
    pub layout: Layout,
}

impl DatasetMetadata {
    pub fn files(name: &str, description: &str, files: Vec<(&str, RemoteFileMetadata)>) -> Self {
        Self {
            name: name.to_string(),
            directory: name.to_string(),
            description: description.to_string(),
            layout: Layout::Files(
                files
                    .into_iter()
                    .map(|(role, meta)| (role.to_string(), meta))
                    .collect(),
            ),
        }
    }

    pub fn archive(
        name: &str,
        description: &str,
        archive: RemoteFileMetadata,
        contents: ArchiveContents,
    ) -> Self {
        Self {
            name: name.to_string(),
            directory: name.to_string(),
            description: description.to_string(),
            layout: Layout::Archive { archive, contents },
        }
    }

    /// Store the dataset under `directory` instead of its name.
    pub fn in_directory(mut self, directory: &str) -> Self {
        self.directory = directory.to_string();
        self
    }
}

static BUILTIN: Lazy<DatasetRegistry> = Lazy::new(|| {
    DatasetRegistry::new(catalog::all())
        .unwrap_or_else(|e| panic!("invalid built-in dataset catalog: {}", e))
});

#[derive(Debug, Default)]
pub struct DatasetRegistry {
    datasets: BTreeMap<String, DatasetMetadata>,
}

impl DatasetRegistry {
    /// Build a registry from explicit definitions. Names must be unique.
    pub fn new(definitions: Vec<DatasetMetadata>) -> Result<Self> {
        let mut datasets = BTreeMap::new();
        for meta in definitions {
            if datasets.contains_key(&meta.name) {
                return Err(Error::ConfigError(format!(
                    "Dataset '{}' is defined more than once",
                    meta.name
                )));
            }
            datasets.insert(meta.name.clone(), meta);
        }
        Ok(Self { datasets })
    }

    /// The registry of all datasets shipped with this crate.
    pub fn builtin() -> &'static DatasetRegistry {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Result<&DatasetMetadata> {
        self.datasets
            .get(name)
            .ok_or_else(|| Error::DatasetNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetMetadata> {
        self.datasets.values()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
