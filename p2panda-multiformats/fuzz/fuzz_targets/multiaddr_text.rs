// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use p2panda_multiformats::Multiaddr;

// Parse arbitrary text, accepted addresses must survive printing and the binary encoding.
fuzz_target!(|text: &str| {
    if let Ok(addr) = Multiaddr::parse(text) {
        assert_eq!(Multiaddr::from_bytes(&addr.to_bytes()), Ok(addr.clone()));

        let canonical = addr.to_string();
        let addr_again = Multiaddr::parse(&canonical).expect("canonical text parses");
        assert_eq!(addr_again, addr);
        assert_eq!(addr_again.to_string(), canonical);
    }
});
