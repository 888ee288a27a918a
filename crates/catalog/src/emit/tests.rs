use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

const SECTION_SAMPLE: &str = "\
-220\tParameter error
-221\tSettings conflict


-230\tData corrupt or stale
";

#[test]
fn table_line_shape() {
	let out = render("-221\tParameter error\n", &PrefixTable::scpi(), Format::Table).unwrap();
	assert_eq!(out, "\t{-221, \"Parameter error\"},\n");
}

#[test]
fn table_output_ignores_blank_gaps() {
	let out = render(SECTION_SAMPLE, &PrefixTable::scpi(), Format::Table).unwrap();
	assert_eq!(
		out,
		"\t{-220, \"Parameter error\"},\n\t{-221, \"Settings conflict\"},\n\t{-230, \"Data corrupt or stale\"},\n"
	);
}

#[test]
fn enum_output_uses_identifiers() {
	let out = render(SECTION_SAMPLE, &PrefixTable::scpi(), Format::Enum).unwrap();
	assert_eq!(
		out,
		"\tE_EXE_PARAMETER_ERROR = -220,\n\tE_EXE_SETTINGS_CONFLICT = -221,\n\tE_EXE_DATA_CORRUPT_OR_STALE = -230,\n"
	);
}

#[test]
fn quotes_are_not_escaped() {
	let out = render("5\tSays \"hi\"\n", &PrefixTable::new(), Format::Table).unwrap();
	assert_eq!(out, "\t{5, \"Says \"hi\"\"},\n");
}

#[test]
fn render_is_all_or_nothing() {
	let err = render("-100\tCommand error\nabc\tBad code\n", &PrefixTable::scpi(), Format::Table).unwrap_err();
	assert!(matches!(err, CatalogError::MalformedRecord { record: 2, .. }));
}

#[test]
fn emit_keeps_lines_before_failure() {
	let mut out = Vec::new();
	let err = emit(
		parse_records("-100\tCommand error\nabc\tBad code\n-101\tInvalid character\n"),
		&PrefixTable::scpi(),
		Format::Table,
		&mut out,
	)
	.unwrap_err();

	assert!(matches!(err, CatalogError::MalformedRecord { .. }));
	assert_eq!(String::from_utf8(out).unwrap(), "\t{-100, \"Command error\"},\n");
}

#[test]
fn emit_counts_lines() {
	let mut out = Vec::new();
	let written = emit(parse_records(SECTION_SAMPLE), &PrefixTable::scpi(), Format::Enum, &mut out).unwrap();
	assert_eq!(written, 3);
	assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
}

#[test]
fn format_names_round_trip() {
	assert_eq!("table".parse::<Format>().unwrap(), Format::Table);
	assert_eq!("enum".parse::<Format>().unwrap(), Format::Enum);
	assert_eq!(Format::Enum.to_string(), "enum");
	assert!(matches!("csv".parse::<Format>(), Err(CatalogError::UnknownFormat(name)) if name == "csv"));
}

fn catalog_text() -> impl Strategy<Value = (String, Vec<(i32, String)>)> {
	let record = (-999i32..999, "[A-Za-z]([A-Za-z0-9 /.()-]{0,24}[A-Za-z0-9])?", 0usize..3);
	prop::collection::vec(record, 0..40).prop_map(|rows| {
		let mut text = String::new();
		let mut records = Vec::new();
		for (code, description, gap) in rows {
			text.push_str(&"\n".repeat(gap));
			text.push_str(&format!("{code}\t{description}\n"));
			records.push((code, description));
		}
		(text, records)
	})
}

proptest! {
	#[test]
	fn one_line_per_record_in_order((text, records) in catalog_text()) {
		let out = render(&text, &PrefixTable::scpi(), Format::Table).unwrap();
		let lines: Vec<&str> = out.lines().collect();
		prop_assert_eq!(lines.len(), records.len());
		for (line, (code, description)) in lines.iter().zip(&records) {
			prop_assert_eq!(*line, format!("\t{{{code}, \"{description}\"}},"));
		}
	}

	#[test]
	fn rendering_is_idempotent((text, _records) in catalog_text()) {
		let table = PrefixTable::scpi();
		for format in [Format::Table, Format::Enum] {
			prop_assert_eq!(render(&text, &table, format).unwrap(), render(&text, &table, format).unwrap());
		}
	}

	#[test]
	fn streaming_matches_buffered((text, _records) in catalog_text()) {
		let table = PrefixTable::scpi();
		let mut streamed = Vec::new();
		emit(parse_records(&text), &table, Format::Enum, &mut streamed).unwrap();
		prop_assert_eq!(String::from_utf8(streamed).unwrap(), render(&text, &table, Format::Enum).unwrap());
	}
}
