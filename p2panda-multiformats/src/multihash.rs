// SPDX-License-Identifier: MIT OR Apache-2.0

//! Self-describing hash digests in the [multihash] format.
//!
//! A multihash is encoded as `varint(code) || varint(digest length) || digest`.
//!
//! [multihash]: https://github.com/multiformats/multihash
use std::fmt;

use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

use crate::varint::{self, VarintError};

/// Maximum digest length accepted by the codec.
pub const MAX_DIGEST_LEN: usize = 127;

/// Hash functions with a registered multihash code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Identity,
    Sha1,
    Sha2_256,
    Sha2_512,
    Sha3_256,
    Keccak256,
    Blake3,
    Blake2b256,
}

impl HashFunction {
    pub const fn code(self) -> u64 {
        match self {
            HashFunction::Identity => 0x00,
            HashFunction::Sha1 => 0x11,
            HashFunction::Sha2_256 => 0x12,
            HashFunction::Sha2_512 => 0x13,
            HashFunction::Sha3_256 => 0x16,
            HashFunction::Keccak256 => 0x1b,
            HashFunction::Blake3 => 0x1e,
            HashFunction::Blake2b256 => 0xb220,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        let function = match code {
            0x00 => HashFunction::Identity,
            0x11 => HashFunction::Sha1,
            0x12 => HashFunction::Sha2_256,
            0x13 => HashFunction::Sha2_512,
            0x16 => HashFunction::Sha3_256,
            0x1b => HashFunction::Keccak256,
            0x1e => HashFunction::Blake3,
            0xb220 => HashFunction::Blake2b256,
            _ => return None,
        };
        Some(function)
    }

    /// Output size in bytes, `None` for functions with variable output.
    pub const fn digest_len(self) -> Option<usize> {
        match self {
            HashFunction::Identity | HashFunction::Blake3 => None,
            HashFunction::Sha1 => Some(20),
            HashFunction::Sha2_256
            | HashFunction::Sha3_256
            | HashFunction::Keccak256
            | HashFunction::Blake2b256 => Some(32),
            HashFunction::Sha2_512 => Some(64),
        }
    }
}

/// Hash digest tagged with the code of the function which produced it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wraps an already computed digest.
    ///
    /// Fails when the function with this code is known to produce digests of another length.
    /// Unknown codes are accepted with any digest length up to [`MAX_DIGEST_LEN`].
    pub fn wrap(code: u64, digest: impl Into<Vec<u8>>) -> Result<Self, MultihashError> {
        let digest = digest.into();

        if digest.len() > MAX_DIGEST_LEN {
            return Err(MultihashError::DigestTooLong(digest.len(), MAX_DIGEST_LEN));
        }

        if let Some(expected) = HashFunction::from_code(code).and_then(HashFunction::digest_len) {
            if digest.len() != expected {
                return Err(MultihashError::InvalidDigestLength {
                    code,
                    expected,
                    actual: digest.len(),
                });
            }
        }

        Ok(Self { code, digest })
    }

    /// Hashes `data` with the given function.
    pub fn digest(function: HashFunction, data: &[u8]) -> Result<Self, MultihashError> {
        let digest = match function {
            HashFunction::Identity => data.to_vec(),
            HashFunction::Sha2_256 => Sha256::digest(data).to_vec(),
            HashFunction::Sha2_512 => Sha512::digest(data).to_vec(),
            HashFunction::Blake3 => blake3::hash(data).as_bytes().to_vec(),
            _ => return Err(MultihashError::UnsupportedHashFunction(function.code())),
        };
        Self::wrap(function.code(), digest)
    }

    /// Identity multihash of `data`, callers make sure it does not exceed [`MAX_DIGEST_LEN`].
    pub(crate) fn identity(data: &[u8]) -> Self {
        debug_assert!(data.len() <= MAX_DIGEST_LEN);
        Self {
            code: HashFunction::Identity.code(),
            digest: data.to_vec(),
        }
    }

    /// SHA-256 multihash of `data`.
    pub fn sha2_256(data: &[u8]) -> Self {
        Self {
            code: HashFunction::Sha2_256.code(),
            digest: Sha256::digest(data).to_vec(),
        }
    }

    /// Reads a multihash from the front of `bytes`.
    ///
    /// Returns the multihash and the number of bytes it occupied, so callers can continue parsing
    /// whatever follows it.
    pub fn read(bytes: &[u8]) -> Result<(Self, usize), MultihashError> {
        let (code, rest) = varint::decode(bytes).map_err(|err| varint_error(err, bytes))?;
        let (len, rest) = varint::decode_len(rest).map_err(|err| varint_error(err, rest))?;

        if rest.len() < len {
            return Err(MultihashError::TruncatedInput {
                expected: len,
                actual: rest.len(),
            });
        }

        let multihash = Self::wrap(code, &rest[..len])?;
        let consumed = bytes.len() - rest.len() + len;
        Ok((multihash, consumed))
    }

    /// Decodes a buffer which contains exactly one multihash.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MultihashError> {
        let (multihash, consumed) = Self::read(bytes)?;
        if consumed != bytes.len() {
            return Err(MultihashError::TrailingData(bytes.len() - consumed));
        }
        Ok(multihash)
    }

    /// Appends the binary encoding to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        varint::encode_into(self.code, buf);
        varint::encode_into(self.digest.len() as u64, buf);
        buf.extend_from_slice(&self.digest);
    }

    /// Binary encoding of the multihash.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    /// Length of the binary encoding in bytes.
    pub fn encoded_len(&self) -> usize {
        varint::encode(self.code).len()
            + varint::encode(self.digest.len() as u64).len()
            + self.digest.len()
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    /// The hash function, if the code is a known one.
    pub fn function(&self) -> Option<HashFunction> {
        HashFunction::from_code(self.code)
    }

    pub fn digest_bytes(&self) -> &[u8] {
        &self.digest
    }

    /// Convert the binary encoding to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = MultihashError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(value: Multihash) -> Self {
        value.to_bytes()
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multihash")
            .field("code", &format_args!("{:#x}", self.code))
            .field("digest", &hex::encode(&self.digest))
            .finish()
    }
}

/// Error types for `Multihash` struct.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MultihashError {
    /// Digest length does not match the fixed output size of the hash function.
    #[error("invalid digest length {actual} for hash function {code:#x}, expected {expected}")]
    InvalidDigestLength {
        code: u64,
        expected: usize,
        actual: usize,
    },

    /// Digest exceeds the maximum supported length.
    #[error("digest of {0} bytes exceeds maximum length of {1} bytes")]
    DigestTooLong(usize, usize),

    /// Input ends inside the code or length varint, or the declared digest length is larger
    /// than the remaining input.
    ///
    /// Inside a varint `expected` is a lower bound: one byte more than what is left.
    #[error("truncated multihash, expected {expected} bytes but only {actual} remain")]
    TruncatedInput { expected: usize, actual: usize },

    /// Bytes remain after the multihash.
    #[error("{0} unexpected bytes after multihash")]
    TrailingData(usize),

    /// Code or length prefix is not a valid varint.
    #[error("invalid varint in multihash: {0}")]
    InvalidVarint(VarintError),

    /// Digest can not be computed by this crate.
    #[error("unsupported hash function {0:#x}")]
    UnsupportedHashFunction(u64),
}

/// Maps a varint error found in `input`, running out of bytes counts as truncated input.
fn varint_error(err: VarintError, input: &[u8]) -> MultihashError {
    match err {
        VarintError::Insufficient => MultihashError::TruncatedInput {
            expected: input.len() + 1,
            actual: input.len(),
        },
        err => MultihashError::InvalidVarint(err),
    }
}
