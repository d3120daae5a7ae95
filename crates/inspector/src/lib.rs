//! Host-side harness for freestanding fixture binaries.
//!
//! The fixtures exist to be consumed by binary-analysis tooling; this crate
//! is the workspace's own consumer. It parses a built fixture ELF, checks
//! that the entry point lands in an executable segment, scans the loadable
//! code for the sentinel patterns, and can execute the binary to confirm it
//! exits cleanly.

pub mod elf;
pub mod report;
pub mod runner;
pub mod scan;
