//! Range prefix table.
//!
//! Codes are grouped into sections of one hundred. Each section may carry a
//! short namespace token that is prepended to generated identifiers so that
//! equally-named codes from different sections stay distinct.
//!
//! Section arithmetic truncates toward zero, so `-221` belongs to the `-200`
//! section, not to `-300`.

use std::collections::BTreeMap;


/// Width of a code section.
pub const SECTION: i32 = 100;

/// Namespace tokens for the SCPI standard error ranges.
pub const SCPI_PREFIXES: &[(i32, &str)] = &[(-100, "CMD"), (-200, "EXE"), (-300, "DEV")];

/// Returns the section boundary of `code`, truncating toward zero.
pub const fn base_of(code: i32) -> i32 {
	code - code % SECTION
}

/// Returns the offset of `code` within its section, with the sign of `code`.
pub const fn section_offset(code: i32) -> i32 {
	code % SECTION
}

/// Returns `true` if `code` is a section header (an exact multiple of 100).
pub const fn is_section_header(code: i32) -> bool {
	section_offset(code) == 0
}

/// Mapping from section base to namespace token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
	tokens: BTreeMap<i32, String>,
}

impl PrefixTable {
	/// Creates an empty table. Every code classifies with an empty prefix.
	pub fn new() -> Self {
		Self::default()
	}

	/// The built-in table for SCPI standard errors.
	pub fn scpi() -> Self {
		Self::from_pairs(SCPI_PREFIXES.iter().copied())
	}

	/// Builds a table from `(base, token)` pairs. Later pairs override earlier
	/// ones; use [`GeneratorConfig`](crate::GeneratorConfig) for validated input.
	pub fn from_pairs<I, S>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (i32, S)>,
		S: Into<String>,
	{
		Self {
			tokens: pairs.into_iter().map(|(base, token)| (base, token.into())).collect(),
		}
	}

	/// Inserts or replaces the token for `base`, returning the previous one.
	pub fn insert(&mut self, base: i32, token: impl Into<String>) -> Option<String> {
		self.tokens.insert(base, token.into())
	}

	/// Token declared for exactly `base`.
	pub fn token(&self, base: i32) -> Option<&str> {
		self.tokens.get(&base).map(String::as_str)
	}

	/// Namespace token applying to `code`.
	///
	/// `None` if the code's section is unmapped or the code is the section
	/// header itself.
	pub fn prefix_for(&self, code: i32) -> Option<&str> {
		if is_section_header(code) {
			return None;
		}
		self.token(base_of(code))
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates `(base, token)` pairs in ascending base order.
	pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
		self.tokens.iter().map(|(base, token)| (*base, token.as_str()))
	}
}
