// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// Module: output
// Purpose: Hex encoding and plain/JSON/XML serialization of digest results.

use crate::mdg::algorithm::DigestResult;
use crate::mdg::error::MultiDigestError;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use strum::EnumIter;

/// Letter case used for hex digits `a`-`f`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HexCase {
	#[default]
	Lower,
	Upper,
}

impl HexCase {
	pub fn from_uppercase(uppercase: bool) -> Self {
		if uppercase {
			Self::Upper
		} else {
			Self::Lower
		}
	}
}

pub fn to_hex(bytes: &[u8], case: HexCase) -> String {
	match case {
		HexCase::Lower => hex::encode(bytes),
		HexCase::Upper => hex::encode_upper(bytes),
	}
}

/// Output formats selectable on the command line.
#[derive(
	Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, EnumIter,
)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
	#[default]
	Plain,
	Json,
	Xml,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Plain => "plain",
			Self::Json => "json",
			Self::Xml => "xml",
		};
		write!(f, "{}", label)
	}
}

/// Algorithm name to hex digest, iterated in name order.
///
/// A later entry with the same name replaces the earlier one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResultSet {
	entries: BTreeMap<String, String>,
}

impl ResultSet {
	pub fn from_digests(
		digests: impl IntoIterator<Item = DigestResult>,
		case: HexCase,
	) -> Self {
		digests
			.into_iter()
			.map(|digest| {
				let hex = digest.to_hex(case);
				(digest.algorithm().to_string(), hex)
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, hex)| (name.as_str(), hex.as_str()))
	}
}

impl<N, H> FromIterator<(N, H)> for ResultSet
where
	N: Into<String>,
	H: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(name, hex)| (name.into(), hex.into()))
				.collect(),
		}
	}
}

#[derive(Serialize)]
struct JsonEntry<'a> {
	name: &'a str,
	digest: &'a str,
}

/// Render a result set in the requested format.
pub fn encode(
	results: &ResultSet,
	format: OutputFormat,
) -> Result<String, MultiDigestError> {
	match format {
		OutputFormat::Plain => Ok(encode_plain(results)),
		OutputFormat::Json => encode_json(results),
		OutputFormat::Xml => Ok(encode_xml(results)),
	}
}

fn encode_plain(results: &ResultSet) -> String {
	results
		.iter()
		.map(|(name, hex)| format!("{}:\t{}\n", name, hex))
		.collect()
}

fn encode_json(results: &ResultSet) -> Result<String, MultiDigestError> {
	let entries: Vec<JsonEntry<'_>> = results
		.iter()
		.map(|(name, digest)| JsonEntry { name, digest })
		.collect();
	Ok(serde_json::to_string(&entries)?)
}

fn encode_xml(results: &ResultSet) -> String {
	let mut out = String::from("<hashes>");
	for (name, hex) in results.iter() {
		out.push_str("<hash algorithm=\"");
		out.push_str(&escape_markup(name));
		out.push_str("\">");
		out.push_str(&escape_markup(hex));
		out.push_str("</hash>");
	}
	out.push_str("</hashes>");
	out
}

fn escape_markup(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&apos;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_is_zero_padded_without_separators() {
		let bytes = [0x00, 0x0f, 0xa0, 0xff];
		assert_eq!(to_hex(&bytes, HexCase::Lower), "000fa0ff");
		assert_eq!(to_hex(&bytes, HexCase::Upper), "000FA0FF");
		assert_eq!(to_hex(&[], HexCase::Upper), "");
	}

	#[test]
	fn uppercase_only_changes_letters() {
		let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
		let lower = to_hex(&bytes, HexCase::Lower);
		let upper = to_hex(&bytes, HexCase::Upper);
		assert_eq!(lower.len(), bytes.len() * 2);
		assert_eq!(upper, lower.to_ascii_uppercase());
		assert_eq!(hex::decode(&upper).expect("valid hex"), bytes);
	}

	#[test]
	fn duplicate_names_keep_the_last_value() {
		let set: ResultSet =
			[("md5", "first"), ("md5", "second")].into_iter().collect();
		assert_eq!(set.len(), 1);
		assert_eq!(set.get("md5"), Some("second"));
	}

	#[test]
	fn markup_escaping_covers_reserved_characters() {
		assert_eq!(
			escape_markup(r#"a&b<c>"d'"#),
			"a&amp;b&lt;c&gt;&quot;d&apos;"
		);
		assert_eq!(escape_markup("sha256"), "sha256");
	}

	#[test]
	fn empty_result_set_encodes_to_empty_containers() {
		let set = ResultSet::default();
		assert_eq!(encode(&set, OutputFormat::Plain).unwrap(), "");
		assert_eq!(encode(&set, OutputFormat::Json).unwrap(), "[]");
		assert_eq!(
			encode(&set, OutputFormat::Xml).unwrap(),
			"<hashes></hashes>"
		);
	}
}
