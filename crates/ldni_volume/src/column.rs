//! Column - the sorted run arena for one (x, y) grid position.
//!
//! The original linked chain of runs is flattened into a small inline arena:
//! runs stay sorted by `start` and mutually non-overlapping, and iteration is
//! forward-only. Touching runs may exist after a raw replacement; the boolean
//! engine never produces them.

use smallvec::SmallVec;

use crate::run::Run;

/// Inline capacity before a column spills to the heap. Columns hold few runs
/// relative to depth (one per surface crossing pair).
const INLINE_RUNS: usize = 4;

/// Sorted, non-overlapping run arena for a single column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
  runs: SmallVec<[Run; INLINE_RUNS]>,
}

impl Column {
  /// Create an empty column.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a column from runs already sorted by `start` and non-overlapping.
  ///
  /// Debug-asserts the invariant; supplying unsorted or overlapping runs is
  /// a caller bug.
  pub fn from_runs<I: IntoIterator<Item = Run>>(runs: I) -> Self {
    let column = Self {
      runs: runs.into_iter().collect(),
    };
    debug_assert!(
      column.check_invariant(),
      "column runs must be sorted and non-overlapping"
    );
    column
  }

  /// Number of runs.
  pub fn len(&self) -> usize {
    self.runs.len()
  }

  /// True iff the column holds no filled depth at all.
  pub fn is_empty(&self) -> bool {
    self.runs.is_empty()
  }

  /// The runs, sorted by `start`.
  pub fn runs(&self) -> &[Run] {
    &self.runs
  }

  /// Forward iteration over the runs.
  pub fn iter(&self) -> impl Iterator<Item = &Run> {
    self.runs.iter()
  }

  /// Drop every run.
  pub fn clear(&mut self) {
    self.runs.clear();
  }

  /// True iff some run covers depth `z`.
  #[inline]
  pub fn contains(&self, z: i32) -> bool {
    self.runs.iter().any(|r| r.contains(z))
  }

  /// Insert a run, keeping the arena sorted.
  ///
  /// A run overlapping or touching existing runs is coalesced with them:
  /// the fused run keeps the outermost surviving boundaries (existing runs
  /// win provenance on an exact boundary tie) and the swallowed interior
  /// boundaries are discarded.
  pub fn insert(&mut self, run: Run) {
    let lo = self.runs.partition_point(|r| r.end < run.start);
    let mut hi = lo;
    while hi < self.runs.len() && self.runs[hi].start <= run.end {
      hi += 1;
    }

    if lo == hi {
      // Disjoint from every existing run.
      self.runs.insert(lo, run);
      return;
    }

    let mut fused = run;
    let first = self.runs[lo];
    if first.start <= fused.start {
      fused.start = first.start;
      fused.start_provenance = first.start_provenance;
    }
    let last = self.runs[hi - 1];
    if last.end >= fused.end {
      fused.end = last.end;
      fused.end_provenance = last.end_provenance;
    }
    self.runs.drain(lo..hi);
    self.runs.insert(lo, fused);
  }

  /// Verify the sorted/non-overlapping invariant.
  pub fn check_invariant(&self) -> bool {
    self.runs.iter().all(|r| r.start < r.end)
      && self.runs.windows(2).all(|w| w[0].end <= w[1].start)
  }

  /// Append a run known to start at or after the current last run's end.
  pub(crate) fn push(&mut self, run: Run) {
    debug_assert!(
      self.runs.last().map_or(true, |last| last.end <= run.start),
      "pushed run must not precede or overlap the arena tail"
    );
    self.runs.push(run);
  }

  /// Mutable access to the last run, for sweep coalescing.
  pub(crate) fn last_mut(&mut self) -> Option<&mut Run> {
    self.runs.last_mut()
  }
}

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;
