//! Download, cache and verify the MDAnalysis example datasets.
//!
//! ```no_run
//! let adk = mdanalysis_data::datasets::fetch_adk_equilibrium(None, true)?;
//! println!("{:?} {:?}", adk.topology(), adk.trajectory());
//! # Ok::<(), mdanalysis_data::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod datasets;
pub mod error;

pub use config::{clear_data_home, get_data_home, Config};
pub use dataset::{fetch, Dataset, DatasetFetcher, DatasetRegistry, Downloader};
pub use error::{Error, Result};
