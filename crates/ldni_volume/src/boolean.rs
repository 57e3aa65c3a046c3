//! Boolean combination of two volumes: union (merge) and difference
//! (subtract).
//!
//! Both operations reconcile the inputs' frames first (columns and depths are
//! translated through the integer origins), then run a per-column sweep that
//! is linear in the total run count of the two columns. Columns are mutually
//! independent, so the sweeps run in parallel across the grid.

use rayon::prelude::*;
use smallvec::SmallVec;

use crate::column::Column;
use crate::run::Run;
use crate::volume::Volume;

/// Which input a sweep boundary came from. Boundary ties at the same depth
/// prefer the receiver.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
  Receiver,
  Other,
}

impl Volume {
  /// Boolean union of `self` and `other`, mutating `self` in place.
  ///
  /// The result covers the global bounding box of both placed extents, with
  /// the integer origin moved to the box's minimum corner - a
  /// placed-but-empty input still grows the box. The fractional origin of
  /// the receiver is kept. Merging an uninitialized `other` is a no-op;
  /// merging into an uninitialized `self` adopts `other` wholesale.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "volume::merge")
  )]
  pub fn merge(&mut self, other: &Volume) {
    if !other.is_valid() {
      return;
    }
    if !self.is_valid() {
      *self = other.clone();
      return;
    }
    debug_assert!(self.columns().iter().all(Column::check_invariant));
    debug_assert!(other.columns().iter().all(Column::check_invariant));

    let min = self.origin().min(other.origin());
    let max = (self.origin() + self.extents()).max(other.origin() + other.extents());
    let size = max - min;

    let columns: Vec<Column> = {
      let this: &Volume = self;
      (0..size.x * size.y)
        .into_par_iter()
        .map(|index| {
          let gx = min.x + index % size.x;
          let gy = min.y + index / size.x;
          let a = column_in_frame(this, gx, gy, min.z);
          let b = column_in_frame(other, gx, gy, min.z);
          union_runs(&a, &b)
        })
        .collect()
    };

    self.adopt_frame(size, min, columns);
  }

  /// Boolean difference `self` minus `other`, mutating `self` in place.
  ///
  /// Extents and origin of `self` never change; parts of `other` outside
  /// `self`'s placed extent are irrelevant. Subtracting an uninitialized
  /// `other` is a no-op.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "volume::subtract")
  )]
  pub fn subtract(&mut self, other: &Volume) {
    if !self.is_valid() || !other.is_valid() {
      return;
    }
    debug_assert!(self.columns().iter().all(Column::check_invariant));
    debug_assert!(other.columns().iter().all(Column::check_invariant));

    let origin = self.origin();
    let width = self.width();

    self
      .columns_mut()
      .par_iter_mut()
      .enumerate()
      .for_each(|(index, column)| {
        if column.is_empty() {
          return;
        }
        let gx = origin.x + index as i32 % width;
        let gy = origin.y + index as i32 / width;
        let b = column_in_frame(other, gx, gy, origin.z);
        if b.is_empty() {
          return;
        }
        *column = difference_runs(column.runs(), &b);
      });
  }
}

/// A volume's runs at global column (gx, gy), translated into the frame
/// whose integer depth origin is `origin_z`. Empty when the column falls
/// outside the volume's extent.
fn column_in_frame(volume: &Volume, gx: i32, gy: i32, origin_z: i32) -> SmallVec<[Run; 4]> {
  let x = gx - volume.origin().x;
  let y = gy - volume.origin().y;
  let dz = volume.origin().z - origin_z;
  match volume.column(x, y) {
    Some(column) => column.iter().map(|run| run.shifted(dz)).collect(),
    None => SmallVec::new(),
  }
}

/// Union sweep over two sorted, non-overlapping run lists in a shared frame.
///
/// Runs are consumed in ascending start order (ties take the receiver
/// first). A consumed run that overlaps or touches the open output run is
/// fused into it, so the output never contains touching runs and the
/// swallowed interior boundaries vanish along with their provenance. The
/// boundary that actually opens or closes a covered interval donates its
/// provenance; on an exact closing tie the receiver wins.
fn union_runs(a: &[Run], b: &[Run]) -> Column {
  let mut out = Column::new();
  let mut last_side = Side::Receiver;
  let (mut i, mut j) = (0, 0);

  while i < a.len() || j < b.len() {
    let take_a = match (a.get(i), b.get(j)) {
      (Some(ra), Some(rb)) => ra.start <= rb.start,
      (Some(_), None) => true,
      _ => false,
    };
    let (run, side) = if take_a {
      i += 1;
      (a[i - 1], Side::Receiver)
    } else {
      j += 1;
      (b[j - 1], Side::Other)
    };

    match out.last_mut() {
      Some(open) if run.start <= open.end => {
        if run.end > open.end {
          open.end = run.end;
          open.copy_end_provenance_from(&run);
          last_side = side;
        } else if run.end == open.end && side == Side::Receiver && last_side == Side::Other {
          open.copy_end_provenance_from(&run);
          last_side = Side::Receiver;
        }
      }
      _ => {
        out.push(run);
        last_side = side;
      }
    }
  }

  out
}

/// Difference sweep: `a`'s covered ranges with `b`'s coverage removed.
///
/// Boundaries introduced by clipping against `b` carry no provenance -
/// removed material authors no surface. Boundaries inherited unchanged from
/// `a` keep `a`'s provenance.
fn difference_runs(a: &[Run], b: &[Run]) -> Column {
  let mut out = Column::new();
  let mut j = 0;

  for ra in a {
    while j < b.len() && b[j].end <= ra.start {
      j += 1;
    }

    let mut cursor = ra.start;
    let mut start_provenance = ra.start_provenance;
    let mut k = j;

    while cursor < ra.end {
      match b.get(k) {
        Some(rb) if rb.start < ra.end => {
          if rb.start > cursor {
            out.push(Run::with_provenance(cursor, rb.start, start_provenance, None));
          }
          if rb.end >= ra.end {
            cursor = ra.end;
          } else {
            cursor = rb.end;
            start_provenance = None;
            k += 1;
          }
        }
        _ => {
          out.push(Run::with_provenance(
            cursor,
            ra.end,
            start_provenance,
            ra.end_provenance,
          ));
          cursor = ra.end;
        }
      }
    }
  }

  out
}

#[cfg(test)]
#[path = "boolean_test.rs"]
mod boolean_test;
