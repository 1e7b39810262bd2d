// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use p2panda_multiformats::Multiaddr;

// Decode arbitrary bytes, every accepted address must survive both encodings unchanged.
fuzz_target!(|bytes: &[u8]| {
    if let Ok(addr) = Multiaddr::from_bytes(bytes) {
        assert_eq!(addr.to_bytes(), bytes);

        let addr_again = Multiaddr::parse(&addr.to_string()).expect("canonical text parses");
        assert_eq!(addr, addr_again);
    }
});
