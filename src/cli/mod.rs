use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdanalysis-data")]
#[command(version, about = "Download and cache MDAnalysis example datasets", long_about = None)]
pub struct Cli {
	/// Cache directory (defaults to $MDANALYSIS_DATA or ~/MDAnalysis_data)
	#[arg(long, global = true, env = "MDANALYSIS_DATA")]
	pub data_home: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Download a dataset (if needed) and print its local files as JSON
	Fetch {
		/// Dataset name (see `list`)
		name: String,

		/// Fail instead of downloading missing files
		#[arg(long)]
		offline: bool,

		/// Do not draw progress bars
		#[arg(long, short)]
		quiet: bool,
	},

	/// Print the description of a dataset
	Describe {
		/// Dataset name (see `list`)
		name: String,
	},

	/// List known datasets
	List,

	/// Print the cache directory
	Home,

	/// Delete the cache directory and everything in it
	Clear,
}
