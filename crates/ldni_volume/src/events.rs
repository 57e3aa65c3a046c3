//! Per-depth-slice event tables derived from a volume's runs.
//!
//! For every depth value the tables answer "at which (x, y) columns does a
//! filled region begin or end exactly here" - the access pattern of
//! sweep-style consumers that walk the volume one slice at a time instead of
//! rescanning every column per slice.

use crate::volume::Volume;

/// Depth-indexed start/end tables.
///
/// Indexed by local depth; sized `depth + 1` so an exclusive run end at the
/// depth bound has a slot. Boundaries falling outside `[0, depth]` are
/// skipped, they cannot intersect a slice sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTables {
  starts: Vec<Vec<(i32, i32)>>,
  ends: Vec<Vec<(i32, i32)>>,
}

impl EventTables {
  /// Scan every column once and record each run's boundaries.
  pub fn build(volume: &Volume) -> Self {
    let slots = volume.depth().max(0) as usize + 1;
    let mut starts = vec![Vec::new(); slots];
    let mut ends = vec![Vec::new(); slots];

    for y in 0..volume.height() {
      for x in 0..volume.width() {
        let Some(column) = volume.column(x, y) else {
          continue;
        };
        for run in column.iter() {
          if (0..slots as i32).contains(&run.start) {
            starts[run.start as usize].push((x, y));
          }
          if (0..slots as i32).contains(&run.end) {
            ends[run.end as usize].push((x, y));
          }
        }
      }
    }

    Self { starts, ends }
  }

  /// Columns whose run starts at exactly depth `z`.
  pub fn starts(&self, z: i32) -> &[(i32, i32)] {
    usize::try_from(z)
      .ok()
      .and_then(|z| self.starts.get(z))
      .map_or(&[], Vec::as_slice)
  }

  /// Columns whose run ends at exactly depth `z`.
  pub fn ends(&self, z: i32) -> &[(i32, i32)] {
    usize::try_from(z)
      .ok()
      .and_then(|z| self.ends.get(z))
      .map_or(&[], Vec::as_slice)
  }

  /// Number of depth slots covered by the tables.
  pub fn slots(&self) -> usize {
    self.starts.len()
  }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
