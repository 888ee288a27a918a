use std::path::PathBuf;

use clap::{Parser, Subcommand};
use errtab_catalog::Format;

#[derive(Parser, Debug)]
#[command(name = "errtab")]
#[command(about = "Generate C error tables from status-code catalogs")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Generator config (TOML); defaults to the SCPI prefix table
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Render a catalog as table rows or enumerators
	Generate {
		/// Catalog file (uses the bundled SCPI catalog if omitted)
		catalog: Option<PathBuf>,

		/// Output format: `table` or `enum` (overrides the config)
		#[arg(long, short = 'f')]
		format: Option<Format>,

		/// Write to this file instead of stdout
		#[arg(long, short = 'o', value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Resolve a code to its message, falling back to its group
	Lookup {
		/// Status code, e.g. -221
		#[arg(allow_negative_numbers = true)]
		code: i32,

		/// Catalog file (uses the bundled SCPI catalog if omitted)
		#[arg(long, value_name = "PATH")]
		catalog: Option<PathBuf>,

		/// Extra detail appended to the message
		#[arg(long)]
		extra: Option<String>,
	},
}
