// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decodes a peer id and a list of multiaddrs and prints what they are made of.
//!
//! ```bash
//! cargo run --example inspect -- --peer-id 12D3KooW... /ip4/127.0.0.1/tcp/8000
//! ```
//!
//! Without arguments a sample peer id and a handful of sample addresses are inspected. Set
//! `RUST_LOG=trace` to see why an input was rejected.
use anyhow::Result;
use clap::Parser;
use p2panda_multiformats::{Multiaddr, PeerId};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const SAMPLE_PEER_ID: &str = "12D3KooWBhKNKkL6qTTvKXivnX2JgKPFnHZRNmXqnJQv1F1rSDvL";

const SAMPLE_ADDRESSES: [&str; 4] = [
    "/ip4/127.0.0.1/tcp/8000",
    "/ip4/192.168.1.1/tcp/1234",
    "/ip6/::1/tcp/5001",
    "/dns4/example.com/tcp/443",
];

pub fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

#[derive(Parser)]
struct Args {
    /// Base58 encoded peer id.
    #[arg(short = 'p', long, value_name = "PEER_ID", default_value = SAMPLE_PEER_ID)]
    peer_id: String,

    /// Multiaddrs in their textual form.
    #[arg(value_name = "ADDRESS")]
    addresses: Vec<String>,
}

fn inspect_peer_id(text: &str) {
    match PeerId::from_base58(text) {
        Ok(peer_id) => {
            let encoded = peer_id.to_base58();
            println!("peer id: {encoded}");
            println!("  length: {} characters", encoded.len());
            println!("  multihash: {}", peer_id.as_multihash());
            match peer_id.to_public_key() {
                Some(public_key) => println!("  public key: {public_key}"),
                None => println!("  public key: none"),
            }
        }
        Err(err) => {
            warn!(%text, %err, "invalid peer id");
            println!("peer id: {text} is invalid ({err})");
        }
    }
}

fn inspect_address(text: &str) {
    match Multiaddr::parse(text) {
        Ok(addr) => {
            println!("{text} -> {addr}");
            println!("  bytes: {}", hex::encode(addr.to_bytes()));
            println!("  protocols: {}", addr.len());
            for (descriptor, value) in addr.protocols_with_values() {
                match value {
                    Some(value) => println!(
                        "    - {} (code {}): {value}",
                        descriptor.name, descriptor.code
                    ),
                    None => println!("    - {} (code {})", descriptor.name, descriptor.code),
                }
            }
        }
        Err(err) => {
            warn!(%text, %err, "invalid multiaddr");
            println!("{text} is invalid ({err})");
        }
    }
}

fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();

    inspect_peer_id(&args.peer_id);
    println!();

    let addresses = if args.addresses.is_empty() {
        SAMPLE_ADDRESSES.iter().map(ToString::to_string).collect()
    } else {
        args.addresses
    };

    for text in &addresses {
        inspect_address(text);
    }

    Ok(())
}
