// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Error kinds surfaced by the digest pipeline and the CLI layer.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit code for usage mistakes.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for every other fatal error.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum MultiDigestError {
	#[error("unknown digest algorithm \"{name}\"")]
	UnknownAlgorithm { name: String },

	#[error("{} does not exist or is not a regular file", .path.display())]
	File {
		path: PathBuf,
		#[source]
		source: Option<io::Error>,
	},

	#[error("{message}")]
	Usage { message: String },

	#[error("{context}: {source}")]
	Io {
		context: String,
		#[source]
		source: io::Error,
	},

	#[error("failed to serialize digests: {0}")]
	Serialize(#[from] serde_json::Error),
}

impl MultiDigestError {
	pub fn unknown_algorithm(name: impl Into<String>) -> Self {
		Self::UnknownAlgorithm { name: name.into() }
	}

	pub fn not_a_file(path: &Path) -> Self {
		Self::File {
			path: path.to_path_buf(),
			source: None,
		}
	}

	pub fn unreadable_file(path: &Path, source: io::Error) -> Self {
		Self::File {
			path: path.to_path_buf(),
			source: Some(source),
		}
	}

	pub fn usage(message: impl Into<String>) -> Self {
		Self::Usage {
			message: message.into(),
		}
	}

	pub fn io(context: impl Into<String>, source: io::Error) -> Self {
		Self::Io {
			context: context.into(),
			source,
		}
	}

	/// Usage errors are followed by the help text; everything else prints
	/// only the message.
	pub fn wants_help(&self) -> bool {
		matches!(self, Self::Usage { .. })
	}

	pub fn exit_code(&self) -> u8 {
		match self {
			Self::Usage { .. } => EXIT_USAGE,
			_ => EXIT_FAILURE,
		}
	}
}
