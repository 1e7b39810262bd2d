// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use p2panda_multiformats::PeerId;

fuzz_target!(|bytes: &[u8]| {
    if let Ok(peer_id) = PeerId::from_bytes(bytes) {
        assert_eq!(peer_id.to_bytes(), bytes);
        assert_eq!(PeerId::from_base58(&peer_id.to_base58()), Ok(peer_id));
    }
});
