// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of the multiaddr protocols known to this crate.
//!
//! Every protocol is identified by a [multicodec] code (used in the binary form) and a name (used
//! in the textual form). The table is static and never changes at runtime.
//!
//! [multicodec]: https://github.com/multiformats/multicodec
use std::fmt;

use crate::multiaddr::MultiaddrError;

/// Size of the value which follows a protocol code in a binary multiaddr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Value has exactly this many bytes.
    Fixed(usize),

    /// Value is prefixed with its length as a varint.
    Variable,

    /// Protocol does not carry a value.
    NoValue,
}

/// Closed set of supported protocols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    Ip4,
    Tcp,
    Dccp,
    Ip6,
    Ip6zone,
    Dns,
    Dns4,
    Dns6,
    Dnsaddr,
    Sctp,
    Udp,
    P2pWebRtcDirect,
    P2pCircuit,
    Unix,
    P2p,
    Https,
    Tls,
    Noise,
    Quic,
    QuicV1,
    WebTransport,
    Ws,
    Wss,
    Http,
    Memory,
}

/// Static description of a protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProtocolDescriptor {
    pub protocol: Protocol,
    pub code: u64,
    pub name: &'static str,
    pub size: SizeClass,
}

impl fmt::Display for ProtocolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

macro_rules! descriptor {
    ($protocol:ident, $code:expr, $name:expr, $size:expr) => {
        ProtocolDescriptor {
            protocol: Protocol::$protocol,
            code: $code,
            name: $name,
            size: $size,
        }
    };
}

/// All registered protocols, ordered by code.
pub static PROTOCOLS: &[ProtocolDescriptor] = &[
    descriptor!(Ip4, 4, "ip4", SizeClass::Fixed(4)),
    descriptor!(Tcp, 6, "tcp", SizeClass::Fixed(2)),
    descriptor!(Dccp, 33, "dccp", SizeClass::Fixed(2)),
    descriptor!(Ip6, 41, "ip6", SizeClass::Fixed(16)),
    descriptor!(Ip6zone, 42, "ip6zone", SizeClass::Variable),
    descriptor!(Dns, 53, "dns", SizeClass::Variable),
    descriptor!(Dns4, 54, "dns4", SizeClass::Variable),
    descriptor!(Dns6, 55, "dns6", SizeClass::Variable),
    descriptor!(Dnsaddr, 56, "dnsaddr", SizeClass::Variable),
    descriptor!(Sctp, 132, "sctp", SizeClass::Fixed(2)),
    descriptor!(Udp, 273, "udp", SizeClass::Fixed(2)),
    descriptor!(P2pWebRtcDirect, 276, "p2p-webrtc-direct", SizeClass::NoValue),
    descriptor!(P2pCircuit, 290, "p2p-circuit", SizeClass::NoValue),
    descriptor!(Unix, 400, "unix", SizeClass::Variable),
    descriptor!(P2p, 421, "p2p", SizeClass::Variable),
    descriptor!(Https, 443, "https", SizeClass::NoValue),
    descriptor!(Tls, 448, "tls", SizeClass::NoValue),
    descriptor!(Noise, 454, "noise", SizeClass::NoValue),
    descriptor!(Quic, 460, "quic", SizeClass::NoValue),
    descriptor!(QuicV1, 461, "quic-v1", SizeClass::NoValue),
    descriptor!(WebTransport, 465, "webtransport", SizeClass::NoValue),
    descriptor!(Ws, 477, "ws", SizeClass::NoValue),
    descriptor!(Wss, 478, "wss", SizeClass::NoValue),
    descriptor!(Http, 480, "http", SizeClass::NoValue),
    descriptor!(Memory, 777, "memory", SizeClass::Fixed(8)),
];

/// Legacy names which resolve to a registered protocol.
const ALIASES: &[(&str, Protocol)] = &[("ipfs", Protocol::P2p)];

/// Looks up a protocol by its multicodec code.
pub fn lookup_by_code(code: u64) -> Result<&'static ProtocolDescriptor, MultiaddrError> {
    PROTOCOLS
        .iter()
        .find(|descriptor| descriptor.code == code)
        .ok_or(MultiaddrError::UnknownProtocolCode(code))
}

/// Looks up a protocol by its name (or a known alias). Names are case-sensitive.
pub fn lookup_by_name(name: &str) -> Result<&'static ProtocolDescriptor, MultiaddrError> {
    if let Some(descriptor) = PROTOCOLS.iter().find(|descriptor| descriptor.name == name) {
        return Ok(descriptor);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, protocol)| protocol.descriptor())
        .ok_or_else(|| MultiaddrError::UnknownProtocol(name.to_string()))
}

impl Protocol {
    /// Registry entry of this protocol.
    pub fn descriptor(self) -> &'static ProtocolDescriptor {
        // The table holds exactly one entry per variant, in declaration order.
        &PROTOCOLS[self as usize]
    }

    pub fn code(self) -> u64 {
        self.descriptor().code
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn size(self) -> SizeClass {
        self.descriptor().size
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
