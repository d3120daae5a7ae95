#![no_std]
#![no_main]

// build with: cargo build -p fixtures --features binaries --target x86_64-unknown-none --release

use fixtures::block;
use rt0::entrypoint;

entrypoint!(block::run);
