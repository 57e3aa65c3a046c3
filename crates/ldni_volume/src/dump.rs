//! Debug dump hook: line-oriented text listing of a volume's runs.
//!
//! A tooling escape hatch for the embedding application; the exact layout is
//! not part of the volume's contract.

use std::io::{self, Write};

use crate::volume::Volume;

/// Write a human-readable listing of every non-empty column's runs.
pub fn write_text<W: Write>(volume: &Volume, out: &mut W) -> io::Result<()> {
  writeln!(
    out,
    "volume {}x{}x{} origin {} origin_f {}",
    volume.width(),
    volume.height(),
    volume.depth(),
    volume.origin(),
    volume.origin_f(),
  )?;

  for y in 0..volume.height() {
    for x in 0..volume.width() {
      let Some(column) = volume.column(x, y) else {
        continue;
      };
      if column.is_empty() {
        continue;
      }
      write!(out, "({x},{y}):")?;
      for run in column.iter() {
        write!(out, " [{},{})", run.start, run.end)?;
      }
      writeln!(out)?;
    }
  }

  Ok(())
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod dump_test;
