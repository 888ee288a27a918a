//! # Catalog parser
//!
//! Splits catalog text into [`Record`]s. The format is one record per line:
//!
//! ```text
//! line   = ws* code TAB description ws* NEWLINE
//! code   = ["-" | "+"] digit+
//! ```
//!
//! Lines that are empty after trimming act as section separators and are
//! skipped. Parsing is lazy and stops at the first malformed line.

use std::iter::{Enumerate, FusedIterator};
use std::str::Lines;

use crate::error::{CatalogError, MalformedReason, Result};


/// A single `(code, description)` pair from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
	/// Status code. Negative codes are standard errors, zero and positive
	/// codes are free for device-specific use.
	pub code: i32,
	/// Human-readable text, copied verbatim from the catalog.
	pub description: String,
}

impl Record {
	pub fn new(code: i32, description: impl Into<String>) -> Self {
		Self {
			code,
			description: description.into(),
		}
	}
}

/// Returns a lazy iterator over the records in `text`, in input order.
///
/// The iterator yields at most one `Err`; after a malformed line it is
/// exhausted.
pub fn parse_records(text: &str) -> Records<'_> {
	Records {
		lines: text.lines().enumerate(),
		record: 0,
		done: false,
	}
}

/// Iterator returned by [`parse_records`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
	lines: Enumerate<Lines<'a>>,
	/// Number of non-blank lines seen so far.
	record: usize,
	done: bool,
}

impl Iterator for Records<'_> {
	type Item = Result<Record>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		for (idx, raw) in self.lines.by_ref() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}
			self.record += 1;

			let parsed = parse_line(line).map_err(|reason| CatalogError::MalformedRecord {
				record: self.record,
				line: idx + 1,
				content: line.to_string(),
				reason,
			});
			if parsed.is_err() {
				self.done = true;
			}
			return Some(parsed);
		}

		self.done = true;
		None
	}
}

impl FusedIterator for Records<'_> {}

/// Parses one trimmed, non-blank line.
fn parse_line(line: &str) -> std::result::Result<Record, MalformedReason> {
	let (code, description) = line.split_once('\t').ok_or(MalformedReason::MissingTab)?;
	if description.contains('\t') {
		return Err(MalformedReason::ExtraTab);
	}
	let code = code.trim_end().parse::<i32>()?;
	Ok(Record::new(code, description))
}
