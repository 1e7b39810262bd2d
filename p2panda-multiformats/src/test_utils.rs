// SPDX-License-Identifier: MIT OR Apache-2.0

use ed25519_dalek::SigningKey;

use crate::identity::PublicKey;
use crate::peer_id::PeerId;

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Deterministic Ed25519 public key derived from a single seed byte.
pub fn public_key_from_seed(seed: u8) -> PublicKey {
    SigningKey::from_bytes(&[seed; 32]).verifying_key().into()
}

/// Deterministic peer id derived from a single seed byte.
pub fn peer_id_from_seed(seed: u8) -> PeerId {
    PeerId::from(public_key_from_seed(seed))
}
