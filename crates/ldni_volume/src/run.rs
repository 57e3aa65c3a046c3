//! Run - a single filled-depth interval within one column.
//!
//! A run covers the half-open depth range `[start, end)` and optionally
//! carries provenance metadata on each boundary, tracking which original
//! surface produced that boundary through set operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundary metadata: which source primitive produced a run boundary.
///
/// Survives boolean combination so downstream consumers (e.g. attribute
/// transfer during reconstruction) can map a boundary back to the geometry
/// that authored it. A boundary with no single originating surface carries
/// no provenance (`Option::None` at the run level).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Provenance {
  /// Index of the originating triangle/source primitive.
  pub source: i32,

  /// Opaque attribute value carried alongside the source index.
  pub attribute: i32,
}

impl Provenance {
  pub fn new(source: i32, attribute: i32) -> Self {
    Self { source, attribute }
  }
}

/// A maximal contiguous filled interval `[start, end)` along a column's
/// depth axis, in the owning volume's local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
  /// First filled depth (inclusive).
  pub start: i32,

  /// First unfilled depth past the run (exclusive).
  pub end: i32,

  /// Provenance of the start boundary, if any.
  pub start_provenance: Option<Provenance>,

  /// Provenance of the end boundary, if any.
  pub end_provenance: Option<Provenance>,
}

impl Run {
  /// Create a run with no boundary provenance.
  ///
  /// Debug-asserts `start < end`; zero- or negative-length runs are never
  /// representable.
  pub fn new(start: i32, end: i32) -> Self {
    debug_assert!(start < end, "run must cover at least one depth sample");
    Self {
      start,
      end,
      start_provenance: None,
      end_provenance: None,
    }
  }

  /// Create a run carrying provenance on both boundaries.
  pub fn with_provenance(
    start: i32,
    end: i32,
    start_provenance: Option<Provenance>,
    end_provenance: Option<Provenance>,
  ) -> Self {
    debug_assert!(start < end, "run must cover at least one depth sample");
    Self {
      start,
      end,
      start_provenance,
      end_provenance,
    }
  }

  /// Copy of this run with both depth bounds shifted by `offset`.
  #[inline]
  pub fn shifted(&self, offset: i32) -> Self {
    Self {
      start: self.start + offset,
      end: self.end + offset,
      ..*self
    }
  }

  /// True iff `z` falls within `[start, end)`.
  #[inline]
  pub fn contains(&self, z: i32) -> bool {
    self.start <= z && z < self.end
  }

  /// Number of depth samples covered.
  #[inline]
  pub fn span(&self) -> i32 {
    self.end - self.start
  }

  /// Reset the start boundary's provenance to none.
  pub fn clear_start_provenance(&mut self) {
    self.start_provenance = None;
  }

  /// Reset the end boundary's provenance to none.
  pub fn clear_end_provenance(&mut self) {
    self.end_provenance = None;
  }

  /// Inherit the start boundary's provenance from another run.
  pub fn copy_start_provenance_from(&mut self, rhs: &Run) {
    self.start_provenance = rhs.start_provenance;
  }

  /// Inherit the end boundary's provenance from another run.
  pub fn copy_end_provenance_from(&mut self, rhs: &Run) {
    self.end_provenance = rhs.end_provenance;
  }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;
