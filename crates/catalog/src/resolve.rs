//! Code lookup with group fallback.
//!
//! A host program rarely defines every fine-grained code. When a code is
//! missing, the nearest enclosing group is reported instead: first the tens
//! group, then the hundreds group, both rounded toward zero.

use crate::catalog::Catalog;
use crate::parse::Record;
use crate::prefix::base_of;

/// Description reported for code 0 when the catalog does not define it.
pub const NO_ERROR: &str = "No error";

/// Description reported for codes that resolve to nothing.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A code coerced to the closest defined catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
	pub code: i32,
	pub description: &'a str,
}

impl<'a> From<&'a Record> for Resolved<'a> {
	fn from(record: &'a Record) -> Self {
		Self {
			code: record.code,
			description: &record.description,
		}
	}
}

impl Resolved<'_> {
	/// `<code>,"<description>"`, with `; <extra>` appended inside the quotes.
	pub fn message(&self, extra: Option<&str>) -> String {
		match extra {
			Some(extra) => format!("{},\"{}; {}\"", self.code, self.description, extra),
			None => format!("{},\"{}\"", self.code, self.description),
		}
	}
}

impl Catalog {
	/// Resolves `code` to a catalog entry.
	///
	/// Positive codes only match exactly; negative codes fall back to their
	/// tens group and then their hundreds group.
	pub fn resolve(&self, code: i32) -> Option<Resolved<'_>> {
		if let Some(record) = self.get(code) {
			return Some(record.into());
		}
		if code == 0 {
			return Some(Resolved {
				code: 0,
				description: NO_ERROR,
			});
		}
		if code > 0 {
			return None;
		}

		let tens = code - code % 10;
		[tens, base_of(code)]
			.into_iter()
			.find_map(|group| self.get(group))
			.map(Resolved::from)
	}

	/// Formats the message for `code`, falling back to [`UNKNOWN_ERROR`] with
	/// the requested code.
	pub fn error_string(&self, code: i32, extra: Option<&str>) -> String {
		self.resolve(code)
			.unwrap_or(Resolved {
				code,
				description: UNKNOWN_ERROR,
			})
			.message(extra)
	}
}
