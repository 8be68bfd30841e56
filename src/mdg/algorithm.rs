// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: multidigest
// File: algorithm.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Digest algorithm catalog and the per-algorithm accumulator driven by a
//! [`DigestSession`](crate::mdg::session::DigestSession).

use crate::mdg::error::MultiDigestError;
use crate::mdg::output::{to_hex, HexCase};
use digest::DynDigest;
use skein::{consts::U32, Skein1024, Skein256, Skein512};

pub type DigestFactory = fn() -> Box<dyn DynDigest>;

fn boxed<D>() -> Box<dyn DynDigest>
where
	D: DynDigest + Default + 'static,
{
	Box::new(D::default())
}

/// Static description of a supported digest algorithm.
#[derive(Clone, Copy)]
pub struct AlgorithmSpec {
	pub identifier: &'static str,
	pub aliases: &'static [&'static str],
	legacy: bool,
	factory: DigestFactory,
}

impl AlgorithmSpec {
	const fn new(
		identifier: &'static str,
		aliases: &'static [&'static str],
		factory: DigestFactory,
	) -> Self {
		Self {
			identifier,
			aliases,
			legacy: false,
			factory,
		}
	}

	const fn legacy(
		identifier: &'static str,
		aliases: &'static [&'static str],
		factory: DigestFactory,
	) -> Self {
		Self {
			identifier,
			aliases,
			legacy: true,
			factory,
		}
	}

	/// Collision attacks are practical for this algorithm.
	pub fn is_legacy(&self) -> bool {
		self.legacy
	}

	/// Digest length in bytes.
	pub fn output_len(&self) -> usize {
		(self.factory)().output_size()
	}

	pub fn matches(&self, name: &str) -> bool {
		self.identifier.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}

	fn instantiate(&self) -> Box<dyn DynDigest> {
		(self.factory)()
	}
}

impl std::fmt::Debug for AlgorithmSpec {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("AlgorithmSpec")
			.field("identifier", &self.identifier)
			.field("aliases", &self.aliases)
			.field("legacy", &self.legacy)
			.finish()
	}
}

const CATALOG: &[AlgorithmSpec] = &[
	AlgorithmSpec::new(
		"belthash",
		&["belt-hash", "belt"],
		boxed::<belt_hash::BeltHash>,
	),
	AlgorithmSpec::new(
		"blake2b",
		&["blake2b512", "blake2b-512"],
		boxed::<blake2::Blake2b512>,
	),
	AlgorithmSpec::new(
		"blake2s",
		&["blake2s256", "blake2s-256"],
		boxed::<blake2::Blake2s256>,
	),
	AlgorithmSpec::new("blake3", &[], boxed::<blake3::Hasher>),
	AlgorithmSpec::new("fsb160", &["fsb-160"], boxed::<fsb::Fsb160>),
	AlgorithmSpec::new("fsb224", &["fsb-224"], boxed::<fsb::Fsb224>),
	AlgorithmSpec::new("fsb256", &["fsb-256"], boxed::<fsb::Fsb256>),
	AlgorithmSpec::new("fsb384", &["fsb-384"], boxed::<fsb::Fsb384>),
	AlgorithmSpec::new("fsb512", &["fsb-512"], boxed::<fsb::Fsb512>),
	AlgorithmSpec::new(
		"gost94",
		&["gost94-test"],
		boxed::<gost94::Gost94Test>,
	),
	AlgorithmSpec::new(
		"gost94cryptopro",
		&["gost94-cryptopro", "md_gost94"],
		boxed::<gost94::Gost94CryptoPro>,
	),
	AlgorithmSpec::new(
		"gost94ua",
		&["gost94-ua"],
		boxed::<gost94::Gost94UA>,
	),
	AlgorithmSpec::new(
		"groestl",
		&["groestl256", "groestl-256"],
		boxed::<groestl::Groestl256>,
	),
	AlgorithmSpec::new("jh224", &["jh-224"], boxed::<jh::Jh224>),
	AlgorithmSpec::new("jh256", &["jh-256"], boxed::<jh::Jh256>),
	AlgorithmSpec::new("jh384", &["jh-384"], boxed::<jh::Jh384>),
	AlgorithmSpec::new("jh512", &["jh-512"], boxed::<jh::Jh512>),
	AlgorithmSpec::legacy("md2", &[], boxed::<md2::Md2>),
	AlgorithmSpec::legacy("md4", &[], boxed::<md4::Md4>),
	AlgorithmSpec::legacy("md5", &[], boxed::<md5::Md5>),
	AlgorithmSpec::new(
		"ripemd160",
		&["ripemd-160", "rmd160", "ripemd"],
		boxed::<ripemd::Ripemd160>,
	),
	AlgorithmSpec::new(
		"ripemd320",
		&["ripemd-320", "rmd320"],
		boxed::<ripemd::Ripemd320>,
	),
	AlgorithmSpec::legacy("sha1", &["sha-1"], boxed::<sha1::Sha1>),
	AlgorithmSpec::new(
		"sha224",
		&["sha-224", "sha2-224"],
		boxed::<sha2::Sha224>,
	),
	AlgorithmSpec::new(
		"sha256",
		&["sha-256", "sha2-256"],
		boxed::<sha2::Sha256>,
	),
	AlgorithmSpec::new(
		"sha3-224",
		&["sha3_224"],
		boxed::<sha3::Sha3_224>,
	),
	AlgorithmSpec::new(
		"sha3-256",
		&["sha3_256"],
		boxed::<sha3::Sha3_256>,
	),
	AlgorithmSpec::new(
		"sha3-384",
		&["sha3_384"],
		boxed::<sha3::Sha3_384>,
	),
	AlgorithmSpec::new(
		"sha3-512",
		&["sha3_512"],
		boxed::<sha3::Sha3_512>,
	),
	AlgorithmSpec::new(
		"sha384",
		&["sha-384", "sha2-384"],
		boxed::<sha2::Sha384>,
	),
	AlgorithmSpec::new(
		"sha512",
		&["sha-512", "sha2-512"],
		boxed::<sha2::Sha512>,
	),
	AlgorithmSpec::new(
		"sha512-224",
		&["sha512_224", "sha2-512/224"],
		boxed::<sha2::Sha512_224>,
	),
	AlgorithmSpec::new(
		"sha512-256",
		&["sha512_256", "sha2-512/256"],
		boxed::<sha2::Sha512_256>,
	),
	AlgorithmSpec::new(
		"shabal192",
		&["shabal-192"],
		boxed::<shabal::Shabal192>,
	),
	AlgorithmSpec::new(
		"shabal224",
		&["shabal-224"],
		boxed::<shabal::Shabal224>,
	),
	AlgorithmSpec::new(
		"shabal256",
		&["shabal-256"],
		boxed::<shabal::Shabal256>,
	),
	AlgorithmSpec::new(
		"shabal384",
		&["shabal-384"],
		boxed::<shabal::Shabal384>,
	),
	AlgorithmSpec::new(
		"shabal512",
		&["shabal-512"],
		boxed::<shabal::Shabal512>,
	),
	AlgorithmSpec::new(
		"skein1024",
		&["skein-1024"],
		boxed::<Skein1024<U32>>,
	),
	AlgorithmSpec::new(
		"skein256",
		&["skein-256"],
		boxed::<Skein256<U32>>,
	),
	AlgorithmSpec::new(
		"skein512",
		&["skein-512"],
		boxed::<Skein512<U32>>,
	),
	AlgorithmSpec::new("sm3", &[], boxed::<sm3::Sm3>),
	AlgorithmSpec::new(
		"streebog256",
		&["streebog-256", "md_gost12_256"],
		boxed::<streebog::Streebog256>,
	),
	AlgorithmSpec::new(
		"streebog512",
		&["streebog-512", "md_gost12_512"],
		boxed::<streebog::Streebog512>,
	),
	AlgorithmSpec::new("tiger", &[], boxed::<tiger::Tiger>),
	AlgorithmSpec::new("whirlpool", &[], boxed::<whirlpool::Whirlpool>),
];

/// Every supported algorithm, sorted by identifier.
pub fn catalog() -> &'static [AlgorithmSpec] {
	CATALOG
}

/// Resolve a user supplied name. Matching ignores ASCII case.
pub fn lookup(name: &str) -> Option<&'static AlgorithmSpec> {
	CATALOG.iter().find(|spec| spec.matches(name))
}

/// Finalized digest bytes tagged with the name the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestResult {
	algorithm: String,
	bytes: Box<[u8]>,
}

impl DigestResult {
	pub fn algorithm(&self) -> &str {
		&self.algorithm
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn to_hex(&self, case: HexCase) -> String {
		to_hex(&self.bytes, case)
	}
}

/// Running hash state for one algorithm.
///
/// [`finish`](Self::finish) takes the accumulator by value, so it can be
/// finalized exactly once and never updated afterwards.
pub struct DigestAccumulator {
	name: String,
	spec: &'static AlgorithmSpec,
	state: Box<dyn DynDigest>,
}

impl DigestAccumulator {
	pub fn create(name: &str) -> Result<Self, MultiDigestError> {
		let spec = lookup(name)
			.ok_or_else(|| MultiDigestError::unknown_algorithm(name))?;
		log::debug!(
			"resolved algorithm {:?} to {}",
			name,
			spec.identifier
		);
		if spec.is_legacy() {
			log::info!(
				"{} is a legacy algorithm with known collisions",
				spec.identifier
			);
		}
		Ok(Self {
			name: name.to_string(),
			spec,
			state: spec.instantiate(),
		})
	}

	/// Name as supplied by the caller, not the canonical identifier.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn spec(&self) -> &'static AlgorithmSpec {
		self.spec
	}

	pub fn update(&mut self, data: &[u8]) {
		self.state.update(data);
	}

	pub fn finish(self) -> DigestResult {
		DigestResult {
			algorithm: self.name,
			bytes: self.state.finalize(),
		}
	}
}

impl std::fmt::Debug for DigestAccumulator {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("DigestAccumulator")
			.field("name", &self.name)
			.field("algorithm", &self.spec.identifier)
			.finish_non_exhaustive()
	}
}
