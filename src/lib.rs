// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod mdg {
	pub mod algorithm;
	pub mod app;
	pub mod config;
	pub mod error;
	pub mod output;
	pub mod session;
}

pub use mdg::algorithm::{DigestAccumulator, DigestResult};
pub use mdg::error::MultiDigestError;
pub use mdg::output::{encode, to_hex, HexCase, OutputFormat, ResultSet};
pub use mdg::session::{digest_file, DigestSession};
