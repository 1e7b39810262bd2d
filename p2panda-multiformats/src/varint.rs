// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unsigned LEB128 variable-length integers as used by all multiformats.
//!
//! Decoding is strict: a value has to be encoded with the minimal number of bytes and may not
//! exceed 64 bits.
use thiserror::Error;
use unsigned_varint::{decode, encode};

/// Appends the varint encoding of `value` to `buf`.
pub fn encode_into(value: u64, buf: &mut Vec<u8>) {
    let mut scratch = encode::u64_buffer();
    buf.extend_from_slice(encode::u64(value, &mut scratch));
}

/// Returns the varint encoding of `value`.
pub fn encode(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    encode_into(value, &mut buf);
    buf
}

/// Reads one varint from the front of `buf` and returns it together with the remaining bytes.
pub fn decode(buf: &[u8]) -> Result<(u64, &[u8]), VarintError> {
    decode::u64(buf).map_err(Into::into)
}

/// Reads a varint used as a length prefix.
pub fn decode_len(buf: &[u8]) -> Result<(usize, &[u8]), VarintError> {
    let (value, rest) = decode(buf)?;
    let len = usize::try_from(value).map_err(|_| VarintError::Overflow)?;
    Ok((len, rest))
}

/// Error types for decoding varints.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum VarintError {
    /// Input ended before the last byte of the varint.
    #[error("not enough input bytes to decode varint")]
    Insufficient,

    /// Value does not fit into 64 bits.
    #[error("varint overflows 64 bits")]
    Overflow,

    /// Value was not encoded with the minimal number of bytes.
    #[error("varint is not minimally encoded")]
    NotMinimal,
}

impl From<decode::Error> for VarintError {
    fn from(value: decode::Error) -> Self {
        match value {
            decode::Error::Insufficient => VarintError::Insufficient,
            decode::Error::NotMinimal => VarintError::NotMinimal,
            _ => VarintError::Overflow,
        }
    }
}
