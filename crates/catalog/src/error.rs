//! Error types for catalog parsing and generator configuration.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a catalog or its configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// A non-blank catalog line could not be split into `code<TAB>description`.
	#[error("malformed record #{record} (line {line}): {reason}: {content:?}")]
	MalformedRecord {
		/// 1-based position among the non-blank lines of the catalog.
		record: usize,
		/// 1-based physical line number in the source text.
		line: usize,
		/// The offending line, trimmed.
		content: String,
		/// What was wrong with it.
		reason: MalformedReason,
	},

	/// Error reading a catalog or configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error writing generated output.
	#[error("failed to write output: {0}")]
	Output(#[from] std::io::Error),

	/// Error parsing TOML syntax or shape.
	#[error("failed to parse generator config: {0}")]
	ConfigParse(#[from] toml::de::Error),

	/// A prefix table base is not a non-zero multiple of 100.
	#[error("invalid prefix base {0} (expected a non-zero multiple of 100)")]
	InvalidBase(i32),

	/// A prefix token is empty or would not form a valid identifier.
	#[error("invalid prefix token {token:?} for base {base} (expected [A-Z0-9_]+)")]
	InvalidToken {
		/// Base the token was declared for.
		base: i32,
		/// The rejected token.
		token: String,
	},

	/// The same base was declared more than once.
	#[error("duplicate prefix base {0}")]
	DuplicateBase(i32),

	/// An output format name was not recognized.
	#[error("unknown output format {0:?} (expected 'table' or 'enum')")]
	UnknownFormat(String),
}

/// Why a catalog line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
	#[error("missing tab separator")]
	MissingTab,
	#[error("more than one tab separator")]
	ExtraTab,
	#[error("invalid code: {0}")]
	InvalidCode(#[from] ParseIntError),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
