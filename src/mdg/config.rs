// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: config.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::mdg::error::MultiDigestError;
use crate::mdg::output::{HexCase, OutputFormat};
use crate::mdg::session::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use std::path::{Path, PathBuf};

/// Everything a run needs, fixed once the arguments are parsed.
#[derive(Clone, Debug)]
pub struct RunConfig {
	input: PathBuf,
	algorithms: Vec<String>,
	hex_case: HexCase,
	format: OutputFormat,
	chunk_size: usize,
}

impl RunConfig {
	pub fn new(
		input: impl Into<PathBuf>,
		algorithms: Vec<String>,
	) -> Result<Self, MultiDigestError> {
		if algorithms.is_empty() {
			return Err(MultiDigestError::usage(
				"Not enough arguments: at least one algorithm is required.",
			));
		}
		Ok(Self {
			input: input.into(),
			algorithms,
			hex_case: HexCase::default(),
			format: OutputFormat::default(),
			chunk_size: DEFAULT_CHUNK_SIZE,
		})
	}

	pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
		self.hex_case = hex_case;
		self
	}

	pub fn with_format(mut self, format: OutputFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
		self
	}

	pub fn input(&self) -> &Path {
		&self.input
	}

	pub fn algorithms(&self) -> &[String] {
		&self.algorithms
	}

	pub fn hex_case(&self) -> HexCase {
		self.hex_case
	}

	pub fn format(&self) -> OutputFormat {
		self.format
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}
}
