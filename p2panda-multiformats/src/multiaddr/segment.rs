// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single protocol/value pair of a multiaddr and the value codecs of every protocol.
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::multiaddr::MultiaddrError;
use crate::multicodec::{Protocol, ProtocolDescriptor, SizeClass, lookup_by_code};
use crate::peer_id::PeerId;
use crate::varint;

/// Protocol together with its binary value.
///
/// The value is always valid for the protocol: fixed-size values have the right length, text
/// values are non-empty UTF-8 and `p2p` values are valid peer ids.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    protocol: Protocol,
    value: Vec<u8>,
}

impl Segment {
    /// Creates a segment from a binary value, validating it against the protocol.
    pub fn new(protocol: Protocol, value: impl Into<Vec<u8>>) -> Result<Self, MultiaddrError> {
        let value = value.into();
        validate_value(protocol, &value)?;
        Ok(Self { protocol, value })
    }

    pub fn ip4(addr: Ipv4Addr) -> Self {
        Self {
            protocol: Protocol::Ip4,
            value: addr.octets().to_vec(),
        }
    }

    pub fn ip6(addr: Ipv6Addr) -> Self {
        Self {
            protocol: Protocol::Ip6,
            value: addr.octets().to_vec(),
        }
    }

    pub fn ip(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => Self::ip4(addr),
            IpAddr::V6(addr) => Self::ip6(addr),
        }
    }

    pub fn tcp(port: u16) -> Self {
        Self {
            protocol: Protocol::Tcp,
            value: port.to_be_bytes().to_vec(),
        }
    }

    pub fn udp(port: u16) -> Self {
        Self {
            protocol: Protocol::Udp,
            value: port.to_be_bytes().to_vec(),
        }
    }

    pub fn dns(hostname: &str) -> Result<Self, MultiaddrError> {
        Self::new(Protocol::Dns, hostname)
    }

    pub fn dns4(hostname: &str) -> Result<Self, MultiaddrError> {
        Self::new(Protocol::Dns4, hostname)
    }

    pub fn dns6(hostname: &str) -> Result<Self, MultiaddrError> {
        Self::new(Protocol::Dns6, hostname)
    }

    pub fn p2p(peer_id: &PeerId) -> Self {
        Self {
            protocol: Protocol::P2p,
            value: peer_id.to_bytes(),
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn descriptor(&self) -> &'static ProtocolDescriptor {
        self.protocol.descriptor()
    }

    /// Binary value without any length prefix.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Textual form of the value, `None` for protocols without a value.
    pub fn to_value_string(&self) -> Option<String> {
        render_value(self.protocol, &self.value)
    }

    /// IP address of `ip4` and `ip6` segments.
    pub fn as_ip(&self) -> Option<IpAddr> {
        match self.protocol {
            Protocol::Ip4 => <[u8; 4]>::try_from(self.value.as_slice())
                .ok()
                .map(IpAddr::from),
            Protocol::Ip6 => <[u8; 16]>::try_from(self.value.as_slice())
                .ok()
                .map(IpAddr::from),
            _ => None,
        }
    }

    /// Port of `tcp`, `udp`, `dccp` and `sctp` segments.
    pub fn as_port(&self) -> Option<u16> {
        match self.protocol {
            Protocol::Tcp | Protocol::Udp | Protocol::Dccp | Protocol::Sctp => {
                <[u8; 2]>::try_from(self.value.as_slice())
                    .ok()
                    .map(u16::from_be_bytes)
            }
            _ => None,
        }
    }

    /// Peer id of `p2p` segments.
    pub fn as_peer_id(&self) -> Option<PeerId> {
        match self.protocol {
            Protocol::P2p => PeerId::from_bytes(&self.value).ok(),
            _ => None,
        }
    }

    /// Parses the textual value of a protocol.
    pub(crate) fn parse(protocol: Protocol, text: &str) -> Result<Self, MultiaddrError> {
        let value = parse_value(protocol, text)?;
        Ok(Self { protocol, value })
    }

    /// Reads one segment from the front of `bytes` and returns it with the number of bytes read.
    pub(crate) fn read(bytes: &[u8]) -> Result<(Self, usize), MultiaddrError> {
        let (code, rest) = varint::decode(bytes)?;
        let descriptor = lookup_by_code(code)?;

        let (value, rest) = match descriptor.size {
            SizeClass::Fixed(len) => {
                if rest.len() < len {
                    return Err(MultiaddrError::TruncatedInput);
                }
                rest.split_at(len)
            }
            SizeClass::Variable => {
                let (len, rest) = varint::decode_len(rest)?;
                if rest.len() < len {
                    return Err(MultiaddrError::TruncatedInput);
                }
                rest.split_at(len)
            }
            SizeClass::NoValue => (&rest[..0], rest),
        };

        let segment = Self::new(descriptor.protocol, value)?;
        Ok((segment, bytes.len() - rest.len()))
    }

    /// Appends the binary form `varint(code) || [varint(len)] || value` to `buf`.
    pub(crate) fn encode_into(&self, buf: &mut Vec<u8>) {
        varint::encode_into(self.protocol.code(), buf);
        if self.protocol.size() == SizeClass::Variable {
            varint::encode_into(self.value.len() as u64, buf);
        }
        buf.extend_from_slice(&self.value);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.protocol.name())?;
        match self.to_value_string() {
            // Paths already start with a slash.
            Some(path) if self.protocol == Protocol::Unix => write!(f, "{path}"),
            Some(value) => write!(f, "/{value}"),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({self})")
    }
}

fn parse_port(text: &str) -> Result<[u8; 2], MultiaddrError> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(MultiaddrError::InvalidPort(text.to_string()));
    }

    text.parse::<u16>()
        .map(u16::to_be_bytes)
        .map_err(|_| MultiaddrError::InvalidPort(text.to_string()))
}

fn parse_value(protocol: Protocol, text: &str) -> Result<Vec<u8>, MultiaddrError> {
    let value = match protocol {
        Protocol::Ip4 => text
            .parse::<Ipv4Addr>()
            .map_err(|_| MultiaddrError::InvalidIpv4(text.to_string()))?
            .octets()
            .to_vec(),
        Protocol::Ip6 => text
            .parse::<Ipv6Addr>()
            .map_err(|_| MultiaddrError::InvalidIpv6(text.to_string()))?
            .octets()
            .to_vec(),
        Protocol::Tcp | Protocol::Udp | Protocol::Dccp | Protocol::Sctp => {
            parse_port(text)?.to_vec()
        }
        Protocol::P2p => PeerId::from_base58(text)?.to_bytes(),
        Protocol::Memory => {
            if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(MultiaddrError::InvalidValue(
                    protocol,
                    format!("'{text}' is not a decimal number"),
                ));
            }
            text.parse::<u64>()
                .map_err(|err| MultiaddrError::InvalidValue(protocol, err.to_string()))?
                .to_be_bytes()
                .to_vec()
        }
        _ => {
            let value = text.as_bytes().to_vec();
            validate_value(protocol, &value)?;
            value
        }
    };

    Ok(value)
}

fn validate_text(protocol: Protocol, value: &[u8]) -> Result<(), MultiaddrError> {
    let text = std::str::from_utf8(value)
        .map_err(|err| MultiaddrError::InvalidValue(protocol, err.to_string()))?;

    if text.is_empty() {
        return Err(MultiaddrError::InvalidValue(protocol, "value is empty".into()));
    }

    if protocol == Protocol::Unix {
        if !text.starts_with('/') {
            return Err(MultiaddrError::InvalidValue(
                protocol,
                "path must be absolute".into(),
            ));
        }

        // The textual form drops a trailing slash, such paths could not be parsed back.
        if text.ends_with('/') {
            return Err(MultiaddrError::InvalidValue(
                protocol,
                "path must not end with '/'".into(),
            ));
        }
    } else if text.contains('/') {
        return Err(MultiaddrError::InvalidValue(
            protocol,
            "value contains '/'".into(),
        ));
    }

    Ok(())
}

fn validate_value(protocol: Protocol, value: &[u8]) -> Result<(), MultiaddrError> {
    match protocol.size() {
        SizeClass::Fixed(expected) if value.len() != expected => {
            return Err(MultiaddrError::InvalidValueLength {
                protocol,
                expected,
                actual: value.len(),
            });
        }
        SizeClass::NoValue if !value.is_empty() => {
            return Err(MultiaddrError::InvalidValueLength {
                protocol,
                expected: 0,
                actual: value.len(),
            });
        }
        _ => (),
    }

    match protocol {
        Protocol::P2p => {
            PeerId::from_bytes(value)?;
        }
        Protocol::Dns
        | Protocol::Dns4
        | Protocol::Dns6
        | Protocol::Dnsaddr
        | Protocol::Ip6zone
        | Protocol::Unix => validate_text(protocol, value)?,
        _ => (),
    }

    Ok(())
}

/// Renders a value which already passed validation.
fn render_value(protocol: Protocol, value: &[u8]) -> Option<String> {
    let text = match protocol {
        _ if protocol.size() == SizeClass::NoValue => return None,
        Protocol::Ip4 => Ipv4Addr::from(<[u8; 4]>::try_from(value).ok()?).to_string(),
        Protocol::Ip6 => Ipv6Addr::from(<[u8; 16]>::try_from(value).ok()?).to_string(),
        Protocol::Tcp | Protocol::Udp | Protocol::Dccp | Protocol::Sctp => {
            u16::from_be_bytes(<[u8; 2]>::try_from(value).ok()?).to_string()
        }
        Protocol::Memory => u64::from_be_bytes(<[u8; 8]>::try_from(value).ok()?).to_string(),
        Protocol::P2p => PeerId::from_bytes(value).ok()?.to_base58(),
        _ => String::from_utf8_lossy(value).into_owned(),
    };

    Some(text)
}
