// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::multicodec::Protocol;
use crate::peer_id::PeerIdError;
use crate::varint::VarintError;

/// Error types for parsing and decoding multiaddrs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MultiaddrError {
    /// Protocol name is not registered.
    #[error("unknown protocol '{0}'")]
    UnknownProtocol(String),

    /// Protocol code is not registered.
    #[error("unknown protocol code {0}")]
    UnknownProtocolCode(u64),

    /// Text does not divide into protocol and value tokens.
    #[error("malformed multiaddr: {0}")]
    MalformedAddress(String),

    /// Value of an `ip4` segment is not a dotted-decimal address.
    #[error("invalid ipv4 address '{0}'")]
    InvalidIpv4(String),

    /// Value of an `ip6` segment is not a valid IPv6 address.
    #[error("invalid ipv6 address '{0}'")]
    InvalidIpv6(String),

    /// Port is not a decimal number between 0 and 65535.
    #[error("invalid port '{0}'")]
    InvalidPort(String),

    /// Value of a `p2p` segment is not a valid peer id.
    #[error("invalid peer id: {0}")]
    InvalidPeerId(#[from] PeerIdError),

    /// Value is not acceptable for the protocol.
    #[error("invalid value for protocol {0}: {1}")]
    InvalidValue(Protocol, String),

    /// Value has the wrong number of bytes for a fixed-size protocol.
    #[error("invalid value length {actual} for protocol {protocol}, expected {expected}")]
    InvalidValueLength {
        protocol: Protocol,
        expected: usize,
        actual: usize,
    },

    /// Binary input ended in the middle of a segment.
    #[error("truncated multiaddr")]
    TruncatedInput,

    /// Protocol code or length prefix is not a valid varint.
    #[error("invalid varint in multiaddr: {0}")]
    InvalidVarint(VarintError),

    /// Protocol appears in a position where it can not be stacked.
    #[error("protocol {protocol} can not follow {}", .previous.map_or("the start of the address", |protocol| protocol.name()))]
    InvalidLayering {
        protocol: Protocol,
        previous: Option<Protocol>,
    },
}

impl From<VarintError> for MultiaddrError {
    fn from(value: VarintError) -> Self {
        match value {
            VarintError::Insufficient => MultiaddrError::TruncatedInput,
            err => MultiaddrError::InvalidVarint(err),
        }
    }
}
