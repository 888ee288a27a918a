//! Generator configuration.
//!
//! Configuration is TOML:
//!
//! ```toml
//! format = "enum"
//!
//! [[prefix]]
//! base = -100
//! token = "CMD"
//! ```
//!
//! Without a file the SCPI prefix table and the table format are used.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::emit::Format;
use crate::error::{CatalogError, Result};
use crate::prefix::{PrefixTable, base_of};

/// Reference configuration shipped with the crate.
pub const REFERENCE_CONFIG: &str = include_str!("../assets/errtab.toml");

/// Validated generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	pub format: Format,
	pub prefixes: PrefixTable,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			format: Format::default(),
			prefixes: PrefixTable::scpi(),
		}
	}
}

/// On-disk shape before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
	#[serde(default)]
	format: Format,
	#[serde(default)]
	prefix: Vec<RawPrefix>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPrefix {
	base: i32,
	token: String,
}

impl GeneratorConfig {
	/// Parse and validate a TOML string.
	///
	/// An absent `[[prefix]]` list yields an empty table, not the SCPI one.
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;

		let mut seen = HashSet::new();
		let mut prefixes = PrefixTable::new();
		for RawPrefix { base, token } in raw.prefix {
			if base == 0 || base_of(base) != base {
				return Err(CatalogError::InvalidBase(base));
			}
			if token.is_empty() || !token.chars().all(|c| matches!(c, 'A'..='Z' | '0'..='9' | '_')) {
				return Err(CatalogError::InvalidToken { base, token });
			}
			if !seen.insert(base) {
				return Err(CatalogError::DuplicateBase(base));
			}
			prefixes.insert(base, token);
		}

		Ok(Self {
			format: raw.format,
			prefixes,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		tracing::debug!(
			path = %path.display(),
			prefixes = config.prefixes.len(),
			format = %config.format,
			"loaded generator config"
		);
		Ok(config)
	}
}
