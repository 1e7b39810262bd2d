// SPDX-License-Identifier: MIT OR Apache-2.0

//! Self-describing, composable network addresses in the [multiaddr] format.
//!
//! A multiaddr is an ordered list of protocol segments, for example `/ip4/127.0.0.1/tcp/8000`
//! describes TCP port 8000 on top of the IPv4 loopback address. The textual form is always
//! regenerated from the segments, so parsing and printing an address yields its canonical form:
//!
//! ```
//! use p2panda_multiformats::Multiaddr;
//!
//! let addr: Multiaddr = "/ip6/0:0:0:0:0:0:0:1/tcp/5001".parse().unwrap();
//! assert_eq!(addr.to_string(), "/ip6/::1/tcp/5001");
//! ```
//!
//! [multiaddr]: https://github.com/multiformats/multiaddr
mod error;
mod segment;

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::trace;

use crate::multicodec::{Protocol, ProtocolDescriptor, SizeClass, lookup_by_name};
use crate::peer_id::PeerId;

pub use error::MultiaddrError;
pub use segment::Segment;

/// Network address made of protocol segments.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiaddr {
    segments: Vec<Segment>,
}

impl Multiaddr {
    /// Address without any segments, printed as `/`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the textual form, for example `/dns4/example.com/tcp/443`.
    pub fn parse(text: &str) -> Result<Self, MultiaddrError> {
        parse_segments(text)
            .map(|segments| Self { segments })
            .inspect_err(|err| trace!(%text, %err, "rejected multiaddr text"))
    }

    /// Decodes the binary form.
    ///
    /// A `unix` path extends to the end of the textual form, so no segment may follow it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MultiaddrError> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut rest = bytes;

        while !rest.is_empty() {
            if segments.last().map(Segment::protocol) == Some(Protocol::Unix) {
                trace!(offset = bytes.len() - rest.len(), "segment after unix path");
                return Err(MultiaddrError::MalformedAddress(
                    "unix path must be the last segment".into(),
                ));
            }

            let (segment, consumed) = Segment::read(rest).inspect_err(|err| {
                trace!(offset = bytes.len() - rest.len(), %err, "rejected multiaddr bytes")
            })?;
            segments.push(segment);
            rest = &rest[consumed..];
        }

        Ok(Self { segments })
    }

    /// Binary form: the concatenation of all encoded segments.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for segment in &self.segments {
            segment.encode_into(&mut buf);
        }
        buf
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Protocols of all segments, in order.
    pub fn protocols(&self) -> Vec<&'static ProtocolDescriptor> {
        self.segments.iter().map(Segment::descriptor).collect()
    }

    /// Protocols of all segments together with their textual values.
    pub fn protocols_with_values(&self) -> Vec<(&'static ProtocolDescriptor, Option<String>)> {
        self.segments
            .iter()
            .map(|segment| (segment.descriptor(), segment.to_value_string()))
            .collect()
    }

    pub fn has_protocol(&self, protocol: Protocol) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.protocol() == protocol)
    }

    /// Textual values of all segments with the given protocol.
    pub fn values_for_protocol(&self, protocol: Protocol) -> Vec<String> {
        self.segments
            .iter()
            .filter(|segment| segment.protocol() == protocol)
            .filter_map(Segment::to_value_string)
            .collect()
    }

    pub fn first_value_for_protocol(&self, protocol: Protocol) -> Option<String> {
        self.segments
            .iter()
            .find(|segment| segment.protocol() == protocol)
            .and_then(Segment::to_value_string)
    }

    /// Peer id of the last `p2p` segment.
    pub fn peer_id(&self) -> Option<PeerId> {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.protocol() == Protocol::P2p)
            .and_then(Segment::as_peer_id)
    }

    /// Returns the address with one more segment appended.
    pub fn with(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Returns the address with a trailing `/p2p/<peer id>` segment.
    pub fn with_p2p(self, peer_id: &PeerId) -> Self {
        self.with(Segment::p2p(peer_id))
    }

    /// Returns a new address with the segments of `other` appended.
    pub fn encapsulate(&self, other: &Multiaddr) -> Self {
        let mut segments = self.segments.clone();
        segments.extend_from_slice(&other.segments);
        Self { segments }
    }

    /// Removes the last occurrence of `suffix` and everything after it.
    ///
    /// Returns `None` if `suffix` does not occur in this address.
    pub fn decapsulate(&self, suffix: &Multiaddr) -> Option<Self> {
        if suffix.is_empty() {
            return Some(self.clone());
        }

        self.segments
            .windows(suffix.len())
            .rposition(|window| window == suffix.segments.as_slice())
            .map(|index| Self {
                segments: self.segments[..index].to_vec(),
            })
    }

    /// Removes the last segment with the given protocol and everything after it.
    ///
    /// Returns `None` if the protocol does not occur in this address.
    pub fn decapsulate_protocol(&self, protocol: Protocol) -> Option<Self> {
        self.segments
            .iter()
            .rposition(|segment| segment.protocol() == protocol)
            .map(|index| Self {
                segments: self.segments[..index].to_vec(),
            })
    }

    /// Splits off the first segment.
    pub fn split_first(&self) -> Option<(Segment, Multiaddr)> {
        self.segments.split_first().map(|(first, rest)| {
            (
                first.clone(),
                Self {
                    segments: rest.to_vec(),
                },
            )
        })
    }

    /// Socket address of addresses starting with `ip4` or `ip6` followed by `tcp` or `udp`.
    pub fn to_socket_addr(&self) -> Option<SocketAddr> {
        match self.segments.as_slice() {
            [ip, transport, ..]
                if matches!(transport.protocol(), Protocol::Tcp | Protocol::Udp) =>
            {
                Some(SocketAddr::new(ip.as_ip()?, transport.as_port()?))
            }
            _ => None,
        }
    }

    /// Checks that protocols are stacked in a meaningful order.
    ///
    /// Parsing and decoding only validate single segments, this optionally enforces that
    /// transports sit on top of a network protocol (`/tcp/80/ip4/1.2.3.4` is rejected), that
    /// `quic` runs over `udp`, that an `ip6zone` is followed by `ip6` and that nothing follows a
    /// `unix` path.
    pub fn validate_layering(&self) -> Result<(), MultiaddrError> {
        let mut previous: Option<Protocol> = None;

        for segment in &self.segments {
            let protocol = segment.protocol();

            // Paths extend to the end of the address.
            if previous == Some(Protocol::Unix) {
                return Err(MultiaddrError::InvalidLayering { protocol, previous });
            }

            let valid = match protocol {
                Protocol::Tcp | Protocol::Udp | Protocol::Dccp | Protocol::Sctp => matches!(
                    previous,
                    Some(
                        Protocol::Ip4
                            | Protocol::Ip6
                            | Protocol::Dns
                            | Protocol::Dns4
                            | Protocol::Dns6
                    )
                ),
                Protocol::Quic | Protocol::QuicV1 => previous == Some(Protocol::Udp),
                Protocol::WebTransport => previous == Some(Protocol::QuicV1),
                Protocol::Ip6 => true,
                _ => previous != Some(Protocol::Ip6zone),
            };

            if !valid {
                return Err(MultiaddrError::InvalidLayering { protocol, previous });
            }

            previous = Some(protocol);
        }

        if previous == Some(Protocol::Ip6zone) {
            return Err(MultiaddrError::MalformedAddress(
                "ip6zone must be followed by ip6".into(),
            ));
        }

        Ok(())
    }
}

fn parse_segments(text: &str) -> Result<Vec<Segment>, MultiaddrError> {
    let Some(body) = text.strip_prefix('/') else {
        return Err(MultiaddrError::MalformedAddress(
            "address must start with '/'".into(),
        ));
    };

    if body.is_empty() {
        return Ok(Vec::new());
    }

    // A single trailing slash is tolerated.
    let body = body.strip_suffix('/').unwrap_or(body);

    let mut segments = Vec::new();
    let mut tokens = body.split('/');

    while let Some(name) = tokens.next() {
        if name.is_empty() {
            return Err(MultiaddrError::MalformedAddress("empty protocol name".into()));
        }

        let descriptor = lookup_by_name(name)?;
        let segment = match (descriptor.protocol, descriptor.size) {
            (_, SizeClass::NoValue) => Segment::new(descriptor.protocol, Vec::new())?,
            // Paths consume all remaining tokens.
            (Protocol::Unix, _) => {
                let path = tokens.by_ref().collect::<Vec<_>>().join("/");
                if path.is_empty() {
                    return Err(MultiaddrError::MalformedAddress(
                        "missing path for protocol unix".into(),
                    ));
                }
                Segment::parse(Protocol::Unix, &format!("/{path}"))?
            }
            (protocol, _) => match tokens.next() {
                Some(value) if !value.is_empty() => Segment::parse(protocol, value)?,
                _ => {
                    return Err(MultiaddrError::MalformedAddress(format!(
                        "missing value for protocol {protocol}"
                    )));
                }
            },
        };

        segments.push(segment);
    }

    Ok(segments)
}

impl fmt::Display for Multiaddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            write!(f, "{segment}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Multiaddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Multiaddr").field(&self.to_string()).finish()
    }
}

impl FromStr for Multiaddr {
    type Err = MultiaddrError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Multiaddr {
    type Error = MultiaddrError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Multiaddr {
    type Error = MultiaddrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&[u8]> for Multiaddr {
    type Error = MultiaddrError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl TryFrom<Vec<u8>> for Multiaddr {
    type Error = MultiaddrError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&value)
    }
}

impl From<Multiaddr> for Vec<u8> {
    fn from(value: Multiaddr) -> Self {
        value.to_bytes()
    }
}

impl From<Segment> for Multiaddr {
    fn from(value: Segment) -> Self {
        Self {
            segments: vec![value],
        }
    }
}

/// Converts a socket address into an `ip4|ip6` + `tcp` address.
impl From<SocketAddr> for Multiaddr {
    fn from(value: SocketAddr) -> Self {
        Self {
            segments: vec![Segment::ip(value.ip()), Segment::tcp(value.port())],
        }
    }
}

impl FromIterator<Segment> for Multiaddr {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Multiaddr {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for Multiaddr {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};

    use assert_matches::assert_matches;
    use rstest::rstest;

    use crate::multicodec::Protocol;
    use crate::peer_id::PeerIdError;
    use crate::test_utils::{peer_id_from_seed, setup_logging};

    use super::{Multiaddr, MultiaddrError, Segment};

    #[rstest]
    #[case("/ip4/127.0.0.1/tcp/8000")]
    #[case("/ip4/192.168.1.1/tcp/1234")]
    #[case("/ip6/::1/tcp/5001")]
    #[case("/dns4/example.com/tcp/443")]
    #[case("/dns6/example.com/udp/53/quic-v1")]
    #[case("/ip6zone/eth0/ip6/fe80::1/udp/4001/quic-v1/webtransport")]
    #[case("/ip4/1.2.3.4/tcp/443/tls/ws")]
    #[case("/dnsaddr/bootstrap.libp2p.io/p2p/12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL")]
    #[case("/unix/tmp/p2panda.sock")]
    #[case("/memory/42")]
    #[case("/")]
    fn canonical_text_round_trip(#[case] text: &str) {
        let addr: Multiaddr = text.parse().unwrap();
        assert_eq!(addr.to_string(), text);
        assert_eq!(Multiaddr::from_bytes(&addr.to_bytes()).unwrap(), addr);
        assert_eq!(addr.to_string().parse::<Multiaddr>().unwrap(), addr);
    }

    #[rstest]
    #[case("/ip6/0:0:0:0:0:0:0:1/tcp/5001", "/ip6/::1/tcp/5001")]
    #[case("/ipfs/12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL", "/p2p/12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL")]
    #[case("/ip4/127.0.0.1/tcp/8000/", "/ip4/127.0.0.1/tcp/8000")]
    #[case("/tcp/0080", "/tcp/80")]
    fn canonicalizes(#[case] text: &str, #[case] canonical: &str) {
        let addr: Multiaddr = text.parse().unwrap();
        assert_eq!(addr.to_string(), canonical);
    }

    #[test]
    fn binary_form() {
        let addr: Multiaddr = "/ip4/127.0.0.1/tcp/8000".parse().unwrap();
        assert_eq!(addr.to_bytes(), vec![0x04, 127, 0, 0, 1, 0x06, 0x1f, 0x40]);

        let addr: Multiaddr = "/ip4/1.2.3.4/udp/4001/quic-v1".parse().unwrap();
        assert_eq!(
            addr.to_bytes(),
            vec![0x04, 1, 2, 3, 4, 0x91, 0x02, 0x0f, 0xa1, 0xcd, 0x03]
        );
    }

    #[test]
    fn ip6_loopback() {
        let addr: Multiaddr = "/ip6/::1/tcp/5001".parse().unwrap();
        let ip6 = &addr.segments()[0];
        assert_eq!(ip6.protocol(), Protocol::Ip6);
        assert_eq!(ip6.value().len(), 16);
        assert!(ip6.value()[..15].iter().all(|byte| *byte == 0));
        assert_eq!(ip6.value()[15], 1);
    }

    #[test]
    fn protocols() {
        let addr: Multiaddr = "/dns4/example.com/tcp/443".parse().unwrap();
        let names: Vec<&str> = addr.protocols().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["dns4", "tcp"]);

        let codes: Vec<u64> = addr.protocols().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![54, 6]);

        let with_values = addr.protocols_with_values();
        assert_eq!(with_values[0].1.as_deref(), Some("example.com"));
        assert_eq!(with_values[1].1.as_deref(), Some("443"));
    }

    #[rstest]
    #[case("/foo/bar")]
    #[case("/ip4/127.0.0.1/TCP/80")]
    fn unknown_protocol(#[case] text: &str) {
        setup_logging();
        assert_matches!(
            text.parse::<Multiaddr>(),
            Err(MultiaddrError::UnknownProtocol(_))
        );
    }

    #[rstest]
    #[case("ip4/127.0.0.1")]
    #[case("")]
    #[case("/ip4")]
    #[case("/ip4/127.0.0.1/tcp")]
    #[case("/ip4//tcp/80")]
    #[case("//")]
    #[case("/unix")]
    fn malformed(#[case] text: &str) {
        assert_matches!(
            text.parse::<Multiaddr>(),
            Err(MultiaddrError::MalformedAddress(_))
        );
    }

    #[rstest]
    #[case("/tmp/dir/")]
    #[case("/")]
    #[case("//")]
    fn rejects_unix_paths_ending_in_slash(#[case] path: &str) {
        // Such paths would not survive the textual form.
        assert_matches!(
            Segment::new(Protocol::Unix, path),
            Err(MultiaddrError::InvalidValue(Protocol::Unix, _))
        );

        let mut bytes = vec![0x90, 0x03, path.len() as u8];
        bytes.extend_from_slice(path.as_bytes());
        assert_matches!(
            Multiaddr::from_bytes(&bytes),
            Err(MultiaddrError::InvalidValue(Protocol::Unix, _))
        );
    }

    #[rstest]
    #[case("/unix/tmp/dir/", "/unix/tmp/dir")]
    #[case("/unix/tmp//dir", "/unix/tmp//dir")]
    #[case("/ip4/127.0.0.1/tcp/80/unix/a/b.sock", "/ip4/127.0.0.1/tcp/80/unix/a/b.sock")]
    fn unix_text_round_trip(#[case] text: &str, #[case] canonical: &str) {
        let addr: Multiaddr = text.parse().unwrap();
        assert_eq!(addr.to_string(), canonical);
        assert_eq!(canonical.parse::<Multiaddr>().unwrap(), addr);
        assert_eq!(Multiaddr::from_bytes(&addr.to_bytes()).unwrap(), addr);
    }

    #[test]
    fn nothing_follows_unix_path() {
        let addr = Multiaddr::from(Segment::new(Protocol::Unix, "/tmp/p2panda.sock").unwrap())
            .with(Segment::tcp(80));

        assert_matches!(
            Multiaddr::from_bytes(&addr.to_bytes()),
            Err(MultiaddrError::MalformedAddress(_))
        );
        assert_matches!(
            addr.validate_layering(),
            Err(MultiaddrError::InvalidLayering {
                protocol: Protocol::Tcp,
                previous: Some(Protocol::Unix)
            })
        );
    }

    #[test]
    fn invalid_values() {
        assert_matches!(
            "/ip4/300.0.0.1/tcp/80".parse::<Multiaddr>(),
            Err(MultiaddrError::InvalidIpv4(value)) if value == "300.0.0.1"
        );
        assert_matches!(
            "/ip6/::g/tcp/80".parse::<Multiaddr>(),
            Err(MultiaddrError::InvalidIpv6(_))
        );
        assert_matches!(
            "/ip4/127.0.0.1/tcp/99999".parse::<Multiaddr>(),
            Err(MultiaddrError::InvalidPort(value)) if value == "99999"
        );
        assert_matches!(
            "/p2p/not-base58!".parse::<Multiaddr>(),
            Err(MultiaddrError::InvalidPeerId(PeerIdError::InvalidBase58(_)))
        );
        assert_matches!(
            "/p2p/StV1DL6CwTryKyV".parse::<Multiaddr>(),
            Err(MultiaddrError::InvalidPeerId(PeerIdError::InvalidMultihash(_)))
        );
    }

    #[test]
    fn invalid_bytes() {
        assert_matches!(
            Multiaddr::from_bytes(&[0x04, 127, 0, 0]),
            Err(MultiaddrError::TruncatedInput)
        );
        assert_matches!(
            Multiaddr::from_bytes(&[0x04, 127, 0, 0, 1, 0x06]),
            Err(MultiaddrError::TruncatedInput)
        );
        assert_matches!(
            Multiaddr::from_bytes(&[0x63, 0x00]),
            Err(MultiaddrError::UnknownProtocolCode(0x63))
        );
        assert_matches!(
            Multiaddr::from_bytes(&[0x36, 0x00]),
            Err(MultiaddrError::InvalidValue(Protocol::Dns4, _))
        );

        // Embedded peer id followed by a stray byte inside its length prefix.
        let peer_id = peer_id_from_seed(1).to_bytes();
        let mut bytes = vec![0xa5, 0x03, peer_id.len() as u8 + 1];
        bytes.extend_from_slice(&peer_id);
        bytes.push(0x00);
        assert_matches!(
            Multiaddr::from_bytes(&bytes),
            Err(MultiaddrError::InvalidPeerId(PeerIdError::InvalidMultihash(_)))
        );
    }

    #[test]
    fn peer_id() {
        let peer_id = peer_id_from_seed(2);
        let addr: Multiaddr = "/ip4/10.0.0.1/tcp/2022".parse().unwrap();
        assert_eq!(addr.peer_id(), None);

        let addr = addr.with_p2p(&peer_id);
        assert_eq!(addr.peer_id(), Some(peer_id.clone()));
        assert_eq!(
            addr.to_string(),
            format!("/ip4/10.0.0.1/tcp/2022/p2p/{peer_id}")
        );
        assert_eq!(
            addr.first_value_for_protocol(Protocol::P2p),
            Some(peer_id.to_base58())
        );
    }

    #[test]
    fn encapsulation() {
        let base: Multiaddr = "/ip4/127.0.0.1/tcp/4001".parse().unwrap();
        let ws: Multiaddr = "/ws".parse().unwrap();

        let stacked = base.encapsulate(&ws);
        assert_eq!(stacked.to_string(), "/ip4/127.0.0.1/tcp/4001/ws");
        assert_eq!(stacked.decapsulate(&ws), Some(base.clone()));
        assert_eq!(
            stacked.decapsulate_protocol(Protocol::Tcp).unwrap().to_string(),
            "/ip4/127.0.0.1"
        );
        assert_eq!(stacked.decapsulate(&"/udp/1".parse().unwrap()), None);
        assert_eq!(stacked.decapsulate_protocol(Protocol::Udp), None);

        // Strips from the last occurrence.
        let relayed: Multiaddr = "/ip4/1.1.1.1/tcp/1/p2p-circuit/ip4/2.2.2.2/tcp/1"
            .parse()
            .unwrap();
        assert_eq!(
            relayed
                .decapsulate(&"/tcp/1".parse().unwrap())
                .unwrap()
                .to_string(),
            "/ip4/1.1.1.1/tcp/1/p2p-circuit/ip4/2.2.2.2"
        );
        assert_eq!(
            relayed.values_for_protocol(Protocol::Ip4),
            vec!["1.1.1.1".to_string(), "2.2.2.2".to_string()]
        );

        let (first, rest) = relayed.split_first().unwrap();
        assert_eq!(first, Segment::ip4(Ipv4Addr::new(1, 1, 1, 1)));
        assert_eq!(rest.len(), relayed.len() - 1);
        assert!(Multiaddr::empty().split_first().is_none());
    }

    #[test]
    fn socket_addresses() {
        let socket: SocketAddr = "127.0.0.1:8000".parse().unwrap();
        let addr = Multiaddr::from(socket);
        assert_eq!(addr.to_string(), "/ip4/127.0.0.1/tcp/8000");
        assert_eq!(addr.to_socket_addr(), Some(socket));

        let socket: SocketAddr = "[::1]:5001".parse().unwrap();
        assert_eq!(Multiaddr::from(socket).to_string(), "/ip6/::1/tcp/5001");

        let dns: Multiaddr = "/dns4/example.com/tcp/443".parse().unwrap();
        assert_eq!(dns.to_socket_addr(), None);
    }

    #[rstest]
    #[case("/ip4/1.2.3.4/tcp/80", true)]
    #[case("/dns4/example.com/udp/443/quic-v1/webtransport", true)]
    #[case("/ip6zone/eth0/ip6/fe80::1/tcp/80", true)]
    #[case("/ip4/1.2.3.4/tcp/80/p2p-circuit/ip4/5.6.7.8/tcp/90", true)]
    #[case("/tcp/80/ip4/1.2.3.4", false)]
    #[case("/ip4/1.2.3.4/tcp/80/quic-v1", false)]
    #[case("/ip6zone/eth0/tcp/80", false)]
    #[case("/ip6zone/eth0", false)]
    fn layering(#[case] text: &str, #[case] valid: bool) {
        let addr: Multiaddr = text.parse().unwrap();
        assert_eq!(addr.validate_layering().is_ok(), valid);
    }
}
