//! Symbolic identifiers derived from record descriptions.

use crate::parse::Record;
use crate::prefix::PrefixTable;

/// Marker that starts every generated identifier.
pub const MARKER: &str = "E_";

/// Uppercases `description` and maps every character outside `[A-Z0-9_]`
/// to `_`, one for one. Runs are not merged.
pub fn sanitize(description: &str) -> String {
	description
		.chars()
		.map(|c| c.to_ascii_uppercase())
		.map(|c| match c {
			'A'..='Z' | '0'..='9' | '_' => c,
			_ => '_',
		})
		.collect()
}

/// A record together with its derived namespace prefix and identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
	pub record: &'a Record,
	/// `TOKEN_` for codes inside a mapped section, otherwise empty.
	pub namespace_prefix: String,
	pub identifier: String,
}

impl<'a> Entry<'a> {
	/// Classifies `record` against `table`. Depends on nothing but the record
	/// itself, so identifiers may collide across a catalog.
	pub fn classify(record: &'a Record, table: &PrefixTable) -> Self {
		let namespace_prefix = table
			.prefix_for(record.code)
			.map(|token| format!("{token}_"))
			.unwrap_or_default();
		let identifier = format!("{MARKER}{namespace_prefix}{}", sanitize(&record.description));

		tracing::trace!(code = record.code, %identifier, "classified record");

		Self {
			record,
			namespace_prefix,
			identifier,
		}
	}

	pub fn code(&self) -> i32 {
		self.record.code
	}

	pub fn description(&self) -> &str {
		&self.record.description
	}
}

/// Convenience for [`Entry::classify`] when only the name is needed.
pub fn identifier(record: &Record, table: &PrefixTable) -> String {
	Entry::classify(record, table).identifier
}
