// SPDX-License-Identifier: MIT OR Apache-2.0
use hex_literal::hex;
use multidigest::mdg::algorithm::{catalog, DigestAccumulator};

const PHRASE: &str =
	"Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

fn digest_of(algorithm: &str, data: &[u8]) -> Vec<u8> {
	let mut acc =
		DigestAccumulator::create(algorithm).expect("known algorithm");
	acc.update(data);
	acc.finish().bytes().to_vec()
}

fn digest_chunked(algorithm: &str, data: &[u8], chunk: usize) -> Vec<u8> {
	let mut acc =
		DigestAccumulator::create(algorithm).expect("known algorithm");
	for piece in data.chunks(chunk) {
		acc.update(piece);
	}
	acc.finish().bytes().to_vec()
}

#[test]
fn empty_input_matches_published_vectors() {
	let vectors: &[(&str, &[u8])] = &[
		("md4", &hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
		("md5", &hex!("d41d8cd98f00b204e9800998ecf8427e")),
		("sha1", &hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")),
		(
			"ripemd160",
			&hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31"),
		),
		(
			"sha224",
			&hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
		),
		(
			"sha256",
			&hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
		),
		(
			"sha384",
			&hex!("38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"),
		),
		(
			"sha512",
			&hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"),
		),
		(
			"sha3-256",
			&hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
		),
		(
			"blake2b",
			&hex!("786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"),
		),
		(
			"blake2s",
			&hex!("69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9"),
		),
		(
			"blake3",
			&hex!("af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"),
		),
	];
	for &(algorithm, expected) in vectors {
		assert_eq!(
			digest_of(algorithm, b""),
			expected,
			"empty digest for {algorithm}"
		);
		let untouched = DigestAccumulator::create(algorithm)
			.expect("known algorithm")
			.finish();
		assert_eq!(untouched.bytes(), expected, "no update for {algorithm}");
	}
}

#[test]
fn abc_matches_published_vectors() {
	assert_eq!(
		digest_of("md5", b"abc"),
		hex!("900150983cd24fb0d6963f7d28e17f72")
	);
	assert_eq!(
		digest_of("sha1", b"abc"),
		hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
	);
	assert_eq!(
		digest_of("sha256", b"abc"),
		hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
	);
}

#[test]
fn phrase_digests() {
	let data = PHRASE.as_bytes();
	assert_eq!(
		digest_of("blake2b", data),
		hex!("95b7ecb0d7de59820205a0a94fe3ca5ee36fd296b1a9ecaa4e01634aed9fa9505d70182c12f900b9dd95f1d5c04fe57dbc5b1e48acdf3a8bae2996f5d8f4578a")
	);
	assert_eq!(
		digest_of("blake2s", data),
		hex!("dbfd3f2c835adcc9fc955d812384bb3bf569de0b9613ffca0e723254c05cf497")
	);
	assert_eq!(
		digest_of("gost94", data),
		hex!("1845acc06577ead1f5b671e7e452fc6064e90ab1bbb536df36a91327e40e1872")
	);
	assert_eq!(
		digest_of("groestl", data),
		hex!("f65cae36b7a0cb51e8ee732f4090ffacaa8f910a793596046073b8457bc4a356")
	);
	assert_eq!(
		digest_of("SHA1", data),
		hex!("1C90817FE5067AB226A331D4E7454858F6DD966A")
	);
}

#[test]
fn chunk_boundaries_do_not_change_digests() {
	let data: Vec<u8> = (0..5000u32).map(|i| (i * 31 % 251) as u8).collect();
	for spec in catalog() {
		let whole = digest_of(spec.identifier, &data);
		assert_eq!(whole.len(), spec.output_len(), "{}", spec.identifier);
		for chunk in [1, 7, 64, 1000, 4999, 5000, 8192] {
			assert_eq!(
				digest_chunked(spec.identifier, &data, chunk),
				whole,
				"{} with {}-byte chunks",
				spec.identifier,
				chunk
			);
		}
	}
}

#[test]
fn update_order_matters() {
	let mut forward =
		DigestAccumulator::create("sha256").expect("sha256");
	forward.update(b"first");
	forward.update(b"second");
	let mut reversed =
		DigestAccumulator::create("sha256").expect("sha256");
	reversed.update(b"second");
	reversed.update(b"first");
	assert_ne!(forward.finish(), reversed.finish());
}

#[test]
fn aliases_resolve_to_the_same_algorithm() {
	let data = PHRASE.as_bytes();
	assert_eq!(digest_of("sha3-256", data), digest_of("SHA3_256", data));
	assert_eq!(digest_of("blake2b", data), digest_of("BLAKE2b512", data));
	assert_eq!(digest_of("ripemd160", data), digest_of("rmd160", data));
}
