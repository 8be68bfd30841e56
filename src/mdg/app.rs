// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::mdg::algorithm::catalog;
use crate::mdg::config::RunConfig;
use crate::mdg::error::MultiDigestError;
use crate::mdg::output::{encode, HexCase, OutputFormat};
use crate::mdg::session::{digest_file, MAX_CHUNK_SIZE};
use clap::{ArgAction, CommandFactory, Parser};
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use strum::IntoEnumIterator;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "MULTIDIGEST_LOG";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const USAGE: &str = "multidigest <INPUT FILE> [-a:<NAME>]... [-U] [-JSON | -XML]";

#[derive(Parser, Debug)]
#[command(
	name = "multidigest",
	version,
	about = "Compute several digests of one file in a single pass",
	color = clap::ColorChoice::Never,
	help_template = HELP_TEMPLATE,
	override_usage = USAGE,
	disable_help_flag = true,
	disable_version_flag = true
)]
pub struct Cli {
	/// File to hash
	#[arg(value_name = "INPUT FILE")]
	pub input: Option<PathBuf>,

	/// Add a digest algorithm (also written -a:<NAME>)
	#[arg(short = 'a', long = "algorithm", value_name = "NAME")]
	pub algorithms: Vec<String>,

	/// Print digests as uppercase hex
	#[arg(short = 'U', long = "uppercase", overrides_with = "uppercase")]
	pub uppercase: bool,

	/// Output format (also -PLAIN, -JSON, -XML); the last one given wins
	#[arg(
		short = 'f',
		long = "format",
		value_enum,
		value_name = "FORMAT",
		overrides_with = "format"
	)]
	pub format: Option<OutputFormat>,

	/// Read the input in chunks of this many bytes, at most 64 MiB [default: 1048576]
	#[arg(
		long = "chunk-size",
		value_name = "BYTES",
		value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIZE as u64)
	)]
	pub chunk_size: Option<u64>,

	/// Print this information
	#[arg(short = 'h', long = "help", action = ArgAction::SetTrue, overrides_with = "help")]
	pub help: bool,

	/// Print version
	#[arg(short = 'v', long = "version", action = ArgAction::SetTrue, overrides_with = "version")]
	pub version: bool,
}

impl Cli {
	pub fn into_config(self) -> Result<RunConfig, MultiDigestError> {
		let input = self
			.input
			.ok_or_else(|| MultiDigestError::usage("Not enough arguments."))?;
		let mut config = RunConfig::new(input, self.algorithms)?
			.with_hex_case(HexCase::from_uppercase(self.uppercase))
			.with_format(self.format.unwrap_or_default());
		if let Some(chunk_size) = self.chunk_size {
			config = config.with_chunk_size(
				usize::try_from(chunk_size).unwrap_or(MAX_CHUNK_SIZE),
			);
		}
		Ok(config)
	}
}

/// Rewrite the single-dash spellings (`-a:<name>`, `-JSON`, `-XML`,
/// `-PLAIN`) into their long forms. A bare `-a:` names nothing and is
/// dropped. Tokens after `--` are left alone.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let mut positional_only = false;
	args.into_iter()
		.map(Into::into)
		.filter_map(|arg| {
			if positional_only {
				return Some(arg);
			}
			if arg == "--" {
				positional_only = true;
				return Some(arg);
			}
			if arg == "-a:" {
				log::debug!("ignoring -a: without an algorithm name");
				return None;
			}
			match arg.to_str().and_then(normalize_token) {
				Some(rewritten) => Some(OsString::from(rewritten)),
				None => Some(arg),
			}
		})
		.collect()
}

fn normalize_token(token: &str) -> Option<String> {
	if let Some(name) = token.strip_prefix("-a:") {
		return Some(format!("--algorithm={}", name));
	}
	let flag = token.strip_prefix('-')?;
	OutputFormat::iter()
		.find(|format| format.to_string().to_uppercase() == flag)
		.map(|format| format!("--format={}", format))
}

fn algorithm_listing() -> String {
	let mut listing =
		String::from("Algorithms (names are case-insensitive):\n");
	for spec in catalog() {
		listing.push_str("  ");
		listing.push_str(spec.identifier);
		if !spec.aliases.is_empty() {
			listing.push_str(&format!(
				" (aliases: {})",
				spec.aliases.join(", ")
			));
		}
		if spec.is_legacy() {
			listing.push_str(" [legacy]");
		}
		listing.push('\n');
	}
	listing
}

pub fn version_text() -> String {
	format!(
		"{} v{}\nWritten by {}\nCopyright (c) 2025 Volker Schwaberow",
		clap::crate_name!(),
		clap::crate_version!(),
		clap::crate_authors!(", ")
	)
}

/// Usage, options, the algorithm catalog and the version banner.
pub fn help_text() -> String {
	let mut cmd = Cli::command().after_help(algorithm_listing());
	format!("{}\n{}\n", cmd.render_help(), version_text())
}

fn init_logging() {
	let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
	let _ = env_logger::Builder::from_env(env)
		.format_timestamp(None)
		.try_init();
}

fn write_stdout(rendered: &str) -> Result<(), MultiDigestError> {
	let mut stdout = io::stdout().lock();
	stdout
		.write_all(rendered.as_bytes())
		.and_then(|()| stdout.flush())
		.map_err(|err| MultiDigestError::io("failed to write output", err))
}

fn execute<I, T>(args: I) -> Result<(), MultiDigestError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let cli = Cli::try_parse_from(normalize_legacy_args(args))
		.map_err(|err| {
			let rendered = err.to_string();
			let first_line = rendered.lines().next().unwrap_or_default();
			MultiDigestError::usage(
				first_line.trim_start_matches("error: ").to_string(),
			)
		})?;

	if cli.help {
		eprint!("{}", help_text());
		return Ok(());
	}
	if cli.version {
		eprintln!("{}", version_text());
		return Ok(());
	}

	let config = cli.into_config()?;
	log::debug!("run configuration: {:?}", config);
	let results = digest_file(&config)?;
	let rendered = encode(&results, config.format())?;
	write_stdout(&rendered)
}

fn report(err: &MultiDigestError) -> ExitCode {
	eprintln!("{}", err.to_string().red());
	if let Some(source) = std::error::Error::source(err) {
		log::debug!("caused by: {}", source);
	}
	if err.wants_help() {
		eprint!("{}", help_text());
	}
	ExitCode::from(err.exit_code())
}

pub fn run_from<I, T>(args: I) -> ExitCode
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	init_logging();
	match execute(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => report(&err),
	}
}

pub fn run() -> ExitCode {
	run_from(std::env::args_os())
}
