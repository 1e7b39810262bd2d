// SPDX-License-Identifier: MIT OR Apache-2.0

/// Produces the canonical byte encoding of a public key from which a `PeerId` is derived.
///
/// The encoding is treated as opaque; implementations decide on the framing (the built-in
/// Ed25519 key uses the protobuf-style framing shared with other libp2p implementations).
pub trait EncodePublicKey {
    fn encode_public_key(&self) -> Vec<u8>;
}
