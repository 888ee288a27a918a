//! Output formatting for classified records.
//!
//! Each record becomes exactly one line, in catalog order, with no section
//! separators and no special handling of the last line.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::ident::Entry;
use crate::parse::{Record, parse_records};
use crate::prefix::PrefixTable;

#[cfg(test)]
mod tests;

/// Shape of each emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
	/// Initializer rows for a `{ code, message }` table:
	/// `\t{-221, "Settings conflict"},`
	#[default]
	Table,
	/// Enumerator rows naming each code: `\tE_EXE_SETTINGS_CONFLICT = -221,`
	Enum,
}

impl Format {
	/// Renders `entry` as one newline-terminated line.
	///
	/// Descriptions are written verbatim; embedded double quotes are not
	/// escaped.
	pub fn line(self, entry: &Entry<'_>) -> String {
		match self {
			Format::Table => format!("\t{{{}, \"{}\"}},\n", entry.code(), entry.description()),
			Format::Enum => format!("\t{} = {},\n", entry.identifier, entry.code()),
		}
	}

	/// Writes the line for `entry` to `out`.
	pub fn write_entry<W: Write + ?Sized>(self, entry: &Entry<'_>, out: &mut W) -> std::io::Result<()> {
		out.write_all(self.line(entry).as_bytes())
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Format::Table => "table",
			Format::Enum => "enum",
		})
	}
}

impl FromStr for Format {
	type Err = CatalogError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"table" => Ok(Format::Table),
			"enum" => Ok(Format::Enum),
			other => Err(CatalogError::UnknownFormat(other.to_string())),
		}
	}
}

/// Streams records to `out` as they are classified.
///
/// Returns the number of lines written. On a malformed record the lines
/// already written stay written; use [`render`] for all-or-nothing output.
pub fn emit<I, W>(records: I, table: &PrefixTable, format: Format, mut out: W) -> Result<usize>
where
	I: IntoIterator<Item = Result<Record>>,
	W: Write,
{
	let mut written = 0;
	for record in records {
		let record = record?;
		format.write_entry(&Entry::classify(&record, table), &mut out)?;
		written += 1;
	}
	out.flush()?;

	tracing::debug!(written, %format, "emitted catalog");
	Ok(written)
}

/// Parses `text` and renders the whole output in memory.
///
/// Nothing is returned unless every line parses.
pub fn render(text: &str, table: &PrefixTable, format: Format) -> Result<String> {
	let mut rendered = String::with_capacity(text.len() + text.len() / 2);
	for record in parse_records(text) {
		let record = record?;
		rendered.push_str(&format.line(&Entry::classify(&record, table)));
	}
	Ok(rendered)
}
