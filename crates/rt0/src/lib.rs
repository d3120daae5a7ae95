#![no_std]
//! Support runtime for freestanding fixture binaries.
//!
//! Fixtures link no libc and no startup objects, so this crate supplies the
//! two things the platform does not: the `_start` entry stub (via
//! [`entrypoint!`]) and the raw process-exit boundary ([`syscall`]).

pub mod syscall;
#[macro_use]
pub mod entrypoint;
