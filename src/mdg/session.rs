// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: session.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Single-pass driver that broadcasts every chunk of the input to all
//! requested digest accumulators.

use crate::mdg::algorithm::{DigestAccumulator, DigestResult};
use crate::mdg::config::RunConfig;
use crate::mdg::error::MultiDigestError;
use crate::mdg::output::ResultSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
/// Largest read buffer a session will allocate.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

pub struct DigestSession {
	accumulators: Vec<DigestAccumulator>,
	chunk_size: usize,
}

impl DigestSession {
	pub fn new(accumulators: Vec<DigestAccumulator>) -> Self {
		Self {
			accumulators,
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}

	/// Resolve every name up front; nothing is read if one of them is
	/// unknown.
	pub fn from_names<S: AsRef<str>>(
		names: &[S],
	) -> Result<Self, MultiDigestError> {
		let accumulators = names
			.iter()
			.map(|name| DigestAccumulator::create(name.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(accumulators))
	}

	/// Clamped to `1..=MAX_CHUNK_SIZE`.
	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
		self
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}

	pub fn algorithms(&self) -> impl Iterator<Item = &str> {
		self.accumulators.iter().map(DigestAccumulator::name)
	}

	/// Hash a regular file. Digests are returned in the order the
	/// accumulators were supplied.
	pub fn run(
		self,
		path: &Path,
	) -> Result<Vec<DigestResult>, MultiDigestError> {
		let metadata = std::fs::metadata(path)
			.map_err(|err| MultiDigestError::unreadable_file(path, err))?;
		if !metadata.is_file() {
			return Err(MultiDigestError::not_a_file(path));
		}
		let file = File::open(path)
			.map_err(|err| MultiDigestError::unreadable_file(path, err))?;
		log::debug!(
			"hashing {} ({} bytes) with {} algorithm(s), chunk size {}",
			path.display(),
			metadata.len(),
			self.accumulators.len(),
			self.chunk_size
		);
		self.run_reader(file).map_err(|err| {
			MultiDigestError::io(
				format!("failed to read {}", path.display()),
				err,
			)
		})
	}

	/// Drive the accumulators from any reader until end of input.
	pub fn run_reader<R: Read>(
		mut self,
		mut reader: R,
	) -> io::Result<Vec<DigestResult>> {
		let mut buffer = vec![0u8; self.chunk_size];
		let mut total: u64 = 0;
		let mut chunks: u64 = 0;
		loop {
			let count = match reader.read(&mut buffer) {
				Ok(0) => break,
				Ok(count) => count,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {
					continue
				}
				Err(err) => return Err(err),
			};
			let chunk = &buffer[..count];
			for accumulator in &mut self.accumulators {
				accumulator.update(chunk);
			}
			total += count as u64;
			chunks += 1;
		}
		log::debug!("read {} bytes in {} chunk(s)", total, chunks);
		Ok(self
			.accumulators
			.into_iter()
			.map(DigestAccumulator::finish)
			.collect())
	}
}

impl std::fmt::Debug for DigestSession {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("DigestSession")
			.field("accumulators", &self.accumulators)
			.field("chunk_size", &self.chunk_size)
			.finish()
	}
}

/// Resolve the configured algorithms, hash the input file and hex-encode
/// the digests.
pub fn digest_file(
	config: &RunConfig,
) -> Result<ResultSet, MultiDigestError> {
	let session = DigestSession::from_names(config.algorithms())?
		.with_chunk_size(config.chunk_size());
	let digests = session.run(config.input())?;
	Ok(ResultSet::from_digests(digests, config.hex_case()))
}
