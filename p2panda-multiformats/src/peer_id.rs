// SPDX-License-Identifier: MIT OR Apache-2.0

//! Node identifiers derived from public keys.
//!
//! A `PeerId` is a multihash over the encoding of a node's public key. Short encodings (like
//! Ed25519 keys) are embedded directly using the identity hash, which allows recovering the key
//! from the identifier. Longer encodings are hashed with SHA-256.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::identity::PublicKey;
use crate::multihash::{HashFunction, Multihash, MultihashError};
use crate::traits::EncodePublicKey;

/// Key encodings up to this many bytes are embedded with the identity hash.
pub const IDENTITY_THRESHOLD: usize = 42;

/// Identifier of a node in the network.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId {
    multihash: Multihash,
}

impl PeerId {
    /// Derives the identifier from a public key encoding.
    pub fn from_public_key_encoding(encoded_key: &[u8]) -> Self {
        let multihash = if encoded_key.len() <= IDENTITY_THRESHOLD {
            Multihash::identity(encoded_key)
        } else {
            Multihash::sha2_256(encoded_key)
        };

        Self { multihash }
    }

    /// Derives the identifier of a public key.
    pub fn from_public_key(public_key: &impl EncodePublicKey) -> Self {
        Self::from_public_key_encoding(&public_key.encode_public_key())
    }

    /// Wraps a multihash, checking that it is an identity or SHA-256 multihash.
    pub fn from_multihash(multihash: Multihash) -> Result<Self, PeerIdError> {
        match multihash.function() {
            Some(HashFunction::Sha2_256) => Ok(Self { multihash }),
            Some(HashFunction::Identity)
                if multihash.digest_bytes().len() <= IDENTITY_THRESHOLD =>
            {
                Ok(Self { multihash })
            }
            _ => Err(PeerIdError::UnsupportedHash(
                multihash.code(),
                multihash.digest_bytes().len(),
            )),
        }
    }

    /// Decodes the binary multihash form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PeerIdError> {
        Self::from_multihash(Multihash::from_bytes(bytes)?)
    }

    /// Decodes the base58 text form.
    pub fn from_base58(text: &str) -> Result<Self, PeerIdError> {
        let bytes = bs58::decode(text).into_vec()?;
        Self::from_bytes(&bytes)
    }

    /// Binary multihash form.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.multihash.to_bytes()
    }

    /// Base58 (Bitcoin alphabet) encoding of the binary form.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    pub fn as_multihash(&self) -> &Multihash {
        &self.multihash
    }

    /// Recovers the Ed25519 public key from an identity-hashed identifier.
    ///
    /// Returns `None` for SHA-256 identifiers or when the embedded encoding is not an Ed25519 key.
    pub fn to_public_key(&self) -> Option<PublicKey> {
        if self.multihash.function() != Some(HashFunction::Identity) {
            return None;
        }

        PublicKey::from_protobuf_encoding(self.multihash.digest_bytes()).ok()
    }

    /// Returns true if this identifier was derived from the given public key.
    pub fn is_public_key(&self, public_key: &impl EncodePublicKey) -> bool {
        *self == Self::from_public_key(public_key)
    }
}

impl From<PublicKey> for PeerId {
    fn from(value: PublicKey) -> Self {
        Self::from_public_key(&value)
    }
}

impl From<&PublicKey> for PeerId {
    fn from(value: &PublicKey) -> Self {
        Self::from_public_key(value)
    }
}

impl From<PeerId> for Multihash {
    fn from(value: PeerId) -> Self {
        value.multihash
    }
}

impl TryFrom<Multihash> for PeerId {
    type Error = PeerIdError;

    fn try_from(value: Multihash) -> Result<Self, Self::Error> {
        Self::from_multihash(value)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = PeerIdError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl FromStr for PeerId {
    type Err = PeerIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_base58(value)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeerId").field(&self.to_base58()).finish()
    }
}

/// Error types for `PeerId` struct.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PeerIdError {
    /// Text is not valid base58.
    #[error("invalid base58 encoding in peer id: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// Bytes are not a well-formed multihash.
    #[error("invalid multihash in peer id: {0}")]
    InvalidMultihash(#[from] MultihashError),

    /// Multihash is neither SHA-256 nor a small enough identity hash.
    #[error("unsupported multihash {0:#x} with {1} digest bytes for peer id")]
    UnsupportedHash(u64, usize),
}
