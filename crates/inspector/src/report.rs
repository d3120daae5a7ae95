//! Report rendering for inspected fixtures.
//!
//! Text output goes through a `fmt::Write` sink so tests can capture it;
//! JSON goes through serde for tooling that wants to consume the result.

use core::fmt::Write;

use serde::Serialize;

use crate::scan::PatternHit;

#[derive(Debug, Serialize)]
pub struct FixtureReport {
    pub path: String,
    pub entry: u64,
    pub machine_ok: bool,
    pub entry_mapped: bool,
    pub start_symbol: Option<u64>,
    pub stripped: bool,
    pub hits: Vec<PatternHit>,
    pub exit_status: Option<i32>,
}

impl FixtureReport {
    /// Structural verdict: right machine, entry inside executable code, at
    /// least one sentinel surviving, and a clean exit when the fixture ran.
    pub fn healthy(&self) -> bool {
        self.machine_ok
            && self.entry_mapped
            && !self.hits.is_empty()
            && matches!(self.exit_status, None | Some(0))
    }

    pub fn render_text(&self, out: &mut dyn Write) -> core::fmt::Result {
        writeln!(out, "fixture: {}", self.path)?;
        writeln!(
            out,
            "  entry: {:#x} ({})",
            self.entry,
            if self.entry_mapped {
                "inside an executable segment"
            } else {
                "NOT mapped executable"
            }
        )?;
        writeln!(
            out,
            "  machine: {}",
            if self.machine_ok {
                "x86-64 executable"
            } else {
                "UNEXPECTED"
            }
        )?;

        match self.start_symbol {
            Some(addr) => writeln!(out, "  _start: {addr:#x}")?,
            None if self.stripped => writeln!(out, "  _start: stripped (no symbol table)")?,
            None => writeln!(out, "  _start: MISSING from symbol table")?,
        }

        if self.hits.is_empty() {
            writeln!(out, "  sentinels: none found")?;
        } else {
            writeln!(out, "  sentinels:")?;
            for hit in &self.hits {
                writeln!(
                    out,
                    "    {:#010x} at {:#x} (bytes {})",
                    hit.pattern,
                    hit.vaddr,
                    hex::encode(hit.pattern.to_le_bytes())
                )?;
            }
        }

        if let Some(status) = self.exit_status {
            writeln!(out, "  exit status: {status}")?;
        }

        Ok(())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
