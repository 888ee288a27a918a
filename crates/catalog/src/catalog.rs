//! Parsed catalogs.

use std::path::Path;

use crate::emit::Format;
use crate::error::{CatalogError, Result};
use crate::ident::Entry;
use crate::parse::{Record, parse_records};
use crate::prefix::PrefixTable;

/// The SCPI standard error catalog, in catalog format.
pub const SCPI_CATALOG: &str = include_str!("../assets/scpi.tsv");

/// An ordered, fully parsed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	records: Vec<Record>,
}

impl Catalog {
	/// Parse catalog text, failing on the first malformed line.
	pub fn parse(text: &str) -> Result<Self> {
		let records = parse_records(text).collect::<Result<Vec<_>>>()?;
		tracing::debug!(records = records.len(), "parsed catalog");
		Ok(Self { records })
	}

	/// Load and parse a catalog file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&text)
	}

	/// The bundled SCPI standard error catalog.
	pub fn scpi() -> Result<Self> {
		Self::parse(SCPI_CATALOG)
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Record> {
		self.records.iter()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Classifies every record, in catalog order.
	pub fn entries<'a>(&'a self, table: &'a PrefixTable) -> impl Iterator<Item = Entry<'a>> + 'a {
		self.records.iter().map(move |record| Entry::classify(record, table))
	}

	/// Renders an already-parsed catalog. Cannot fail.
	pub fn render(&self, table: &PrefixTable, format: Format) -> String {
		self.entries(table).map(|entry| format.line(&entry)).collect()
	}

	/// Looks up the first record with exactly `code`.
	pub fn get(&self, code: i32) -> Option<&Record> {
		self.records.iter().find(|record| record.code == code)
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Record;
	type IntoIter = std::slice::Iter<'a, Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
