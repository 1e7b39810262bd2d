// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ed25519 public keys and their protobuf-framed encoding.
//!
//! The encoding is the `PublicKey` message shared by libp2p implementations:
//!
//! ```text
//! message PublicKey {
//!   required KeyType Type = 1;
//!   required bytes Data = 2;
//! }
//! ```
//!
//! An Ed25519 key always encodes to 36 bytes: `08 01 12 20 || key`.
use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{PUBLIC_KEY_LENGTH, VerifyingKey};
use thiserror::Error;

use crate::traits::EncodePublicKey;
use crate::varint;

/// Protobuf tag of the `Type` field (field 1, varint).
const TYPE_TAG: u8 = 0x08;

/// Protobuf tag of the `Data` field (field 2, length-delimited).
const DATA_TAG: u8 = 0x12;

/// `KeyType` enum value for Ed25519 keys.
const KEY_TYPE_ED25519: u64 = 1;

/// Size of a protobuf-encoded Ed25519 public key.
pub const ENCODED_PUBLIC_KEY_LEN: usize = 4 + PUBLIC_KEY_LENGTH;

/// Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Create a `PublicKey` from its raw bytes representation.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self, IdentityError> {
        Ok(Self(VerifyingKey::from_bytes(bytes)?))
    }

    /// Bytes of the public key.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }

    /// Convert the public key to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Protobuf-framed encoding of the key.
    pub fn to_protobuf_encoding(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ENCODED_PUBLIC_KEY_LEN);
        buf.push(TYPE_TAG);
        varint::encode_into(KEY_TYPE_ED25519, &mut buf);
        buf.push(DATA_TAG);
        varint::encode_into(PUBLIC_KEY_LENGTH as u64, &mut buf);
        buf.extend_from_slice(self.as_bytes());
        buf
    }

    /// Decodes a protobuf-framed public key. Only Ed25519 keys are supported.
    pub fn from_protobuf_encoding(bytes: &[u8]) -> Result<Self, IdentityError> {
        let mut key_type = None;
        let mut data = None;
        let mut rest = bytes;

        while let Some((tag, tail)) = rest.split_first() {
            match *tag {
                TYPE_TAG => {
                    let (value, tail) = varint::decode(tail)
                        .map_err(|err| IdentityError::InvalidEncoding(err.to_string()))?;
                    key_type = Some(value);
                    rest = tail;
                }
                DATA_TAG => {
                    let (len, tail) = varint::decode_len(tail)
                        .map_err(|err| IdentityError::InvalidEncoding(err.to_string()))?;
                    if tail.len() < len {
                        return Err(IdentityError::InvalidEncoding(
                            "key data is truncated".into(),
                        ));
                    }
                    data = Some(&tail[..len]);
                    rest = &tail[len..];
                }
                other => {
                    return Err(IdentityError::InvalidEncoding(format!(
                        "unexpected field tag {other:#x}"
                    )));
                }
            }
        }

        match (key_type, data) {
            (Some(KEY_TYPE_ED25519), Some(data)) => Self::try_from(data),
            (Some(key_type), Some(_)) => Err(IdentityError::UnsupportedKeyType(key_type)),
            _ => Err(IdentityError::InvalidEncoding(
                "missing key type or key data".into(),
            )),
        }
    }
}

impl EncodePublicKey for PublicKey {
    fn encode_public_key(&self) -> Vec<u8> {
        self.to_protobuf_encoding()
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(value: VerifyingKey) -> Self {
        Self(value)
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(value: PublicKey) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = IdentityError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let value_len = value.len();

        let checked_value: [u8; PUBLIC_KEY_LENGTH] = value
            .try_into()
            .map_err(|_| IdentityError::InvalidLength(value_len, PUBLIC_KEY_LENGTH))?;

        Self::from_bytes(&checked_value)
    }
}

impl FromStr for PublicKey {
    type Err = IdentityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(hex::decode(value)?.as_slice())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_hex()).finish()
    }
}

/// Error types for public keys.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Invalid number of bytes.
    #[error("invalid key length {0} bytes, expected {1} bytes")]
    InvalidLength(usize, usize),

    /// String contains invalid hexadecimal characters.
    #[error("invalid hex encoding in public key string")]
    InvalidHexEncoding(#[from] hex::FromHexError),

    /// Protobuf framing of the key is malformed.
    #[error("invalid public key encoding: {0}")]
    InvalidEncoding(String),

    /// Key type other than Ed25519.
    #[error("unsupported key type {0}")]
    UnsupportedKeyType(u64),

    /// Handle errors from `ed25519` crate.
    #[error(transparent)]
    Ed25519(#[from] ed25519_dalek::SignatureError),
}
