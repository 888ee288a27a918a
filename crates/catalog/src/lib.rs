//! Status-code catalog to C table generator.
//!
//! A catalog is plain text with one `code<TAB>description` record per line
//! and blank lines between sections:
//!
//! ```text
//! -220	Parameter error
//! -221	Settings conflict
//!
//! -230	Data corrupt or stale
//! ```
//!
//! Generation runs in three stages with no shared state:
//!
//! 1. [`parse_records`] splits the text into [`Record`]s.
//! 2. [`Entry::classify`] derives a namespace prefix from the record's
//!    hundred section via a [`PrefixTable`] and builds its identifier.
//! 3. [`Format`] turns each entry into one output line, either a table row
//!    (`\t{-221, "Settings conflict"},`) or an enumerator
//!    (`\tE_EXE_SETTINGS_CONFLICT = -221,`).
//!
//! [`render`] runs the whole pipeline in memory, [`emit`] streams it.
//! [`Catalog::resolve`] performs the lookup a consumer of the generated table
//! would do, with fallback to the enclosing group.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod ident;
pub mod parse;
pub mod prefix;
pub mod resolve;

pub use catalog::{Catalog, SCPI_CATALOG};
pub use config::{GeneratorConfig, REFERENCE_CONFIG};
pub use emit::{Format, emit, render};
pub use error::{CatalogError, MalformedReason, Result};
pub use ident::{Entry, MARKER, identifier, sanitize};
pub use parse::{Record, Records, parse_records};
pub use prefix::{PrefixTable, SCPI_PREFIXES, base_of, is_section_header, section_offset};
pub use resolve::{NO_ERROR, Resolved, UNKNOWN_ERROR};
