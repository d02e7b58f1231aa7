pub mod archive;
pub mod catalog;
pub mod checksum;
pub mod descr;
pub mod downloader;
pub mod fetch;
pub mod registry;

pub use downloader::{Downloader, NoProgress, ProgressBarObserver, ProgressObserver};
pub use fetch::{fetch, Dataset, DatasetFetcher, MemberFiles};
pub use registry::{
    ArchiveContents, DatasetMetadata, DatasetRegistry, Layout, MemberSelection, Members,
    RemoteFileMetadata,
};
