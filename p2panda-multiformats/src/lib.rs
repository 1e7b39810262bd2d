// SPDX-License-Identifier: MIT OR Apache-2.0

//! `p2panda-multiformats` provides the self-describing identifiers and addresses peers use to find
//! and name each other in a p2p network.
//!
//! ## Peer identifiers
//!
//! A [`PeerId`] is a [multihash](https://github.com/multiformats/multihash) of a node's public
//! key. Short key encodings (like Ed25519 keys) are embedded directly with the "identity" hash
//! function, which makes the key recoverable from the identifier itself, longer encodings are
//! hashed with SHA2-256. The textual form is Base58 (Bitcoin alphabet):
//!
//! ```
//! use p2panda_multiformats::PeerId;
//!
//! let peer_id: PeerId = "12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL".parse().unwrap();
//! assert_eq!(peer_id.to_bytes().len(), 38);
//! assert_eq!(
//!     peer_id.to_string(),
//!     "12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL"
//! );
//! ```
//!
//! ## Multiaddresses
//!
//! A [`Multiaddr`] describes how to reach a peer as a stack of protocol segments, for example
//! `/ip4/127.0.0.1/tcp/8000/p2p/12D3KooW...`. Every protocol is registered in a static table
//! (see [`multicodec`]) which assigns it a name, a numeric code and the size of its value, used to
//! convert between the textual and the compact binary form:
//!
//! ```
//! use p2panda_multiformats::{Multiaddr, Protocol};
//!
//! let addr: Multiaddr = "/dns4/example.com/tcp/443".parse().unwrap();
//! assert!(addr.has_protocol(Protocol::Dns4));
//! assert_eq!(addr.first_value_for_protocol(Protocol::Tcp).as_deref(), Some("443"));
//!
//! let bytes = addr.to_bytes();
//! assert_eq!(Multiaddr::from_bytes(&bytes).unwrap(), addr);
//! ```
//!
//! All types implement `serde` traits, using their textual form in human-readable encodings (like
//! JSON) and their binary form otherwise (like CBOR).
pub mod identity;
pub mod multiaddr;
pub mod multicodec;
pub mod multihash;
pub mod peer_id;
mod serde;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;
pub mod varint;

pub use identity::{IdentityError, PublicKey};
pub use multiaddr::{Multiaddr, MultiaddrError, Segment};
pub use multicodec::{Protocol, ProtocolDescriptor, SizeClass, lookup_by_code, lookup_by_name};
pub use multihash::{HashFunction, MAX_DIGEST_LEN, Multihash, MultihashError};
pub use peer_id::{IDENTITY_THRESHOLD, PeerId, PeerIdError};
pub use traits::EncodePublicKey;
