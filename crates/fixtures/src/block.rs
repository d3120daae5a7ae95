//! Branch-and-store fixture.
//!
//! Straight-line logic with two two-way branches and a final store that is
//! never read back. The inputs are fixed constants, so every run takes the
//! same path: the comparison fails and [`second`] writes its pattern. The
//! point of the fixture is that an external tool looking at the binary (or
//! at its memory under a debugger) finds exactly this shape.

/// Pattern stored by [`first`].
pub const FIRST_PATTERN: u32 = 0xdead_beef;

/// Pattern stored by [`second`].
pub const SECOND_PATTERN: u32 = 0xbeef_dead;

/// Strict less-than ordering on two signed words.
pub fn compare(a: i32, b: i32) -> bool {
    a < b
}

/// Stores [`FIRST_PATTERN`] through `c`.
pub fn first(c: &mut i32) {
    *c = FIRST_PATTERN as i32;
}

/// Stores [`SECOND_PATTERN`] through `c`.
pub fn second(c: &mut i32) {
    *c = SECOND_PATTERN as i32;
}

/// First branch of the fixture: `15` below the threshold, `5` at or above
/// it. With the fixture's fixed input the `15` arm never runs.
pub fn select_bound(a: i32) -> i32 {
    if a < 5 { 15 } else { 5 }
}

/// The fixture body. Returns nothing; the final store is deliberately dead
/// and is kept in the emitted code only for external tooling to observe.
pub fn run() {
    let a = 10;
    let b = select_bound(a);

    let mut c = 0;
    if compare(a, b) {
        first(&mut c);
    } else {
        second(&mut c);
    }

    // No reader exists inside the program. Keep the store anyway.
    core::hint::black_box(c);
}
