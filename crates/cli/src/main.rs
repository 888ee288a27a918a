//! errtab binary.
//!
//! Thin I/O layer over `errtab-catalog`: picks the catalog and configuration,
//! renders the whole output in memory, then writes it in one go so that a
//! malformed catalog never leaves a half-written file behind.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use errtab_catalog::{Catalog, Format, GeneratorConfig};
use tracing::{debug, info};

use crate::cli::{Cli, Command};

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &cli.config {
		Some(path) => {
			GeneratorConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?
		}
		None => GeneratorConfig::default(),
	};

	match cli.command {
		Command::Generate {
			catalog,
			format,
			output,
		} => {
			generate(&config, catalog.as_deref(), format, output.as_deref())?;
			Ok(ExitCode::SUCCESS)
		}
		Command::Lookup { code, catalog, extra } => lookup(catalog.as_deref(), code, extra.as_deref()),
	}
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
	match path {
		Some(path) => {
			debug!(path = %path.display(), "loading catalog");
			Catalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
		}
		None => {
			debug!("using bundled SCPI catalog");
			Catalog::scpi().context("bundled SCPI catalog is malformed")
		}
	}
}

fn generate(config: &GeneratorConfig, catalog: Option<&Path>, format: Option<Format>, output: Option<&Path>) -> Result<()> {
	let format = format.unwrap_or(config.format);
	let catalog = load_catalog(catalog)?;
	let rendered = catalog.render(&config.prefixes, format);

	match output {
		Some(path) => write_output(path, &rendered)?,
		None => {
			let mut stdout = io::stdout().lock();
			stdout.write_all(rendered.as_bytes())?;
			stdout.flush()?;
		}
	}

	info!(records = catalog.len(), %format, "generated catalog");
	Ok(())
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
	fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

fn lookup(catalog: Option<&Path>, code: i32, extra: Option<&str>) -> Result<ExitCode> {
	let catalog = load_catalog(catalog)?;
	println!("{}", catalog.error_string(code, extra));

	Ok(match catalog.resolve(code) {
		Some(resolved) => {
			if resolved.code != code {
				debug!(code, resolved = resolved.code, "coerced to group code");
			}
			ExitCode::SUCCESS
		}
		None => ExitCode::FAILURE,
	})
}
