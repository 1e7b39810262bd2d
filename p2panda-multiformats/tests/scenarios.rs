// SPDX-License-Identifier: MIT OR Apache-2.0

use std::net::{Ipv6Addr, SocketAddr};

use assert_matches::assert_matches;
use p2panda_multiformats::test_utils::{peer_id_from_seed, setup_logging};
use p2panda_multiformats::{
    HashFunction, IDENTITY_THRESHOLD, Multiaddr, MultiaddrError, Multihash, MultihashError,
    PeerId, Protocol, Segment,
};

const SAMPLE_PEER_ID: &str = "12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL";

#[test]
fn sample_peer_id_round_trip() {
    setup_logging();

    let peer_id = PeerId::from_base58(SAMPLE_PEER_ID).unwrap();
    assert_eq!(peer_id.to_base58(), SAMPLE_PEER_ID);
    assert_eq!(PeerId::from_bytes(&peer_id.to_bytes()).unwrap(), peer_id);

    // The key encoding is embedded as-is, framed as an Ed25519 key.
    assert_eq!(
        peer_id.as_multihash().function(),
        Some(HashFunction::Identity)
    );
    assert_eq!(
        &peer_id.as_multihash().digest_bytes()[..4],
        &[0x08, 0x01, 0x12, 0x20]
    );
}

#[test]
fn identity_threshold() {
    let short = vec![7; IDENTITY_THRESHOLD];
    let long = vec![7; IDENTITY_THRESHOLD + 1];

    let peer_id = PeerId::from_public_key_encoding(&short);
    assert_eq!(peer_id.as_multihash().code(), 0x00);
    assert_eq!(peer_id.as_multihash().digest_bytes(), &short[..]);

    let peer_id = PeerId::from_public_key_encoding(&long);
    assert_eq!(peer_id.as_multihash().code(), 0x12);
    assert_eq!(peer_id.as_multihash().digest_bytes().len(), 32);

    // Same key, same identifier.
    assert_eq!(
        PeerId::from_public_key_encoding(&long),
        PeerId::from_public_key_encoding(&long)
    );
}

#[test]
fn ip4_tcp_address() {
    let addr = Multiaddr::parse("/ip4/127.0.0.1/tcp/8000").unwrap();
    assert_eq!(
        addr.segments(),
        &[
            Segment::ip4([127, 0, 0, 1].into()),
            Segment::tcp(8000)
        ]
    );
    assert_eq!(addr.to_string(), "/ip4/127.0.0.1/tcp/8000");

    let protocols: Vec<(&str, u64)> = addr
        .protocols()
        .into_iter()
        .map(|descriptor| (descriptor.name, descriptor.code))
        .collect();
    assert_eq!(protocols, vec![("ip4", 4), ("tcp", 6)]);
}

#[test]
fn ip6_loopback_address() {
    let addr = Multiaddr::parse("/ip6/::1/tcp/5001").unwrap();
    let ip6 = &addr.segments()[0];
    assert_eq!(ip6.protocol(), Protocol::Ip6);
    assert_eq!(ip6.value(), &Ipv6Addr::LOCALHOST.octets());
    assert_eq!(ip6.value().len(), 16);
    assert_eq!(ip6.value()[15], 0x01);

    assert_eq!(
        addr.to_socket_addr(),
        Some(SocketAddr::from((Ipv6Addr::LOCALHOST, 5001)))
    );
}

#[test]
fn dns4_address() {
    let addr = Multiaddr::parse("/dns4/example.com/tcp/443").unwrap();
    assert_eq!(addr.protocols()[0].protocol, Protocol::Dns4);
    assert_eq!(addr.protocols()[1].protocol, Protocol::Tcp);
    assert_eq!(addr.to_string(), "/dns4/example.com/tcp/443");
    assert_eq!(Multiaddr::from_bytes(&addr.to_bytes()).unwrap(), addr);
}

#[test]
fn unknown_protocol() {
    setup_logging();

    assert_matches!(
        Multiaddr::parse("/foo/bar"),
        Err(MultiaddrError::UnknownProtocol(name)) if name == "foo"
    );
}

#[test]
fn truncated_multihash() {
    // sha2-256 declares 32 bytes of digest but only 3 follow.
    let bytes = [0x12, 0x20, 0xaa, 0xbb, 0xcc];
    assert_matches!(
        Multihash::from_bytes(&bytes),
        Err(MultihashError::TruncatedInput {
            expected: 32,
            actual: 3
        })
    );

    // Input ends before the length prefix.
    assert_matches!(
        Multihash::from_bytes(&[0x12]),
        Err(MultihashError::TruncatedInput { .. })
    );
}

#[test]
fn multihash_round_trip() {
    let multihash = Multihash::digest(HashFunction::Blake3, b"panda").unwrap();
    let bytes = multihash.to_bytes();
    let decoded = Multihash::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, multihash);
    assert_eq!(Multihash::from_bytes(&decoded.to_bytes()).unwrap(), decoded);
}

#[test]
fn dial_address_of_peer() {
    let peer_id = peer_id_from_seed(9);
    let addr: Multiaddr = "/ip4/192.168.1.1/udp/4001/quic-v1".parse().unwrap();
    let dial = addr.clone().with_p2p(&peer_id);

    assert_eq!(
        dial.to_string(),
        format!("/ip4/192.168.1.1/udp/4001/quic-v1/p2p/{peer_id}")
    );
    assert_eq!(dial.peer_id(), Some(peer_id));
    assert!(dial.validate_layering().is_ok());

    // Round trip through both encodings.
    assert_eq!(Multiaddr::from_bytes(&dial.to_bytes()).unwrap(), dial);
    assert_eq!(Multiaddr::parse(&dial.to_string()).unwrap(), dial);

    assert_eq!(dial.decapsulate_protocol(Protocol::P2p), Some(addr));
}
