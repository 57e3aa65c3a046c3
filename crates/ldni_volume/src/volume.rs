//! Volume - the width x height grid of run columns.
//!
//! A volume owns every run reachable from its column grid. Depth coordinates
//! inside runs are local to the volume's own frame; the integer origin places
//! that frame in a shared global space, and the fractional origin carries
//! sub-voxel placement for consumers that reconstruct geometry. Set algebra
//! operates on the integer frame only.

use glam::{DVec3, IVec3};

use crate::column::Column;
use crate::error::VolumeError;
use crate::events::EventTables;
use crate::run::Run;

/// Run-length encoded boolean occupancy volume.
///
/// `Clone` produces a fully independent deep copy: the arena-backed columns
/// own their runs directly, so no run is ever shared between two volumes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume {
  width: i32,
  height: i32,
  depth: i32,
  origin: IVec3,
  origin_f: DVec3,
  columns: Vec<Column>,
  events: Option<EventTables>,
}

impl Volume {
  /// Create an uninitialized volume; `is_valid` is false until `init`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an initialized volume with the given extents.
  pub fn with_extents(width: i32, height: i32, depth: i32) -> Result<Self, VolumeError> {
    let mut volume = Self::default();
    volume.init(width, height, depth)?;
    Ok(volume)
  }

  /// (Re)initialize: allocate `width * height` empty columns, reset the
  /// origin to zero and drop any event tables. Prior runs are discarded.
  ///
  /// Fails with `InvalidDimension` if any extent is non-positive, leaving
  /// the volume untouched. Safe to call on an already-initialized volume.
  pub fn init(&mut self, width: i32, height: i32, depth: i32) -> Result<(), VolumeError> {
    if width <= 0 || height <= 0 || depth <= 0 {
      return Err(VolumeError::InvalidDimension {
        width,
        height,
        depth,
      });
    }
    self.width = width;
    self.height = height;
    self.depth = depth;
    self.origin = IVec3::ZERO;
    self.origin_f = DVec3::ZERO;
    self.columns.clear();
    self.columns.resize((width * height) as usize, Column::new());
    self.events = None;
    Ok(())
  }

  /// Drop every run and the event tables; extents and origin are untouched.
  pub fn clear(&mut self) {
    self.clear_elements();
    self.clear_events();
  }

  /// Drop every column's runs; extents, origin and event tables untouched.
  pub fn clear_elements(&mut self) {
    for column in &mut self.columns {
      column.clear();
    }
  }

  /// True iff extents are positive and the column grid matches them.
  pub fn is_valid(&self) -> bool {
    self.width > 0
      && self.height > 0
      && self.depth > 0
      && self.columns.len() == (self.width * self.height) as usize
  }

  pub fn width(&self) -> i32 {
    self.width
  }

  pub fn height(&self) -> i32 {
    self.height
  }

  pub fn depth(&self) -> i32 {
    self.depth
  }

  /// Override the depth bound without touching runs.
  pub fn set_depth(&mut self, depth: i32) {
    self.depth = depth;
  }

  /// Extents as a vector (width, height, depth).
  pub fn extents(&self) -> IVec3 {
    IVec3::new(self.width, self.height, self.depth)
  }

  /// Integer placement of the local frame in global space.
  pub fn origin(&self) -> IVec3 {
    self.origin
  }

  /// Sub-voxel placement of the local frame in global space.
  pub fn origin_f(&self) -> DVec3 {
    self.origin_f
  }

  /// Set the integer origin. A pure frame transform: existing runs are not
  /// touched, the origin only applies during cross-volume operations.
  pub fn set_origin(&mut self, origin: IVec3) {
    self.origin = origin;
  }

  /// Set the fractional origin.
  pub fn set_origin_f(&mut self, origin: DVec3) {
    self.origin_f = origin;
  }

  /// Set only the fractional origin's depth component.
  pub fn set_origin_zf(&mut self, z: f64) {
    self.origin_f.z = z;
  }

  /// The column at (x, y), or `None` when out of bounds.
  pub fn column(&self, x: i32, y: i32) -> Option<&Column> {
    self.column_index(x, y).map(|i| &self.columns[i])
  }

  /// Mutable column access. Callers mutating runs directly must preserve
  /// the sorted/non-overlap invariant themselves.
  pub fn column_mut(&mut self, x: i32, y: i32) -> Option<&mut Column> {
    self.column_index(x, y).map(move |i| &mut self.columns[i])
  }

  /// Raw column grid, row-major (y * width + x).
  pub fn columns(&self) -> &[Column] {
    &self.columns
  }

  /// Insert a shifted copy of `run` into column (x, y), keeping the column
  /// sorted. The caller keeps ownership of `run`; the volume stores its own
  /// copy with both depth bounds offset by `depth_offset`.
  ///
  /// A copy overlapping or touching existing runs coalesces with them (see
  /// [`Column::insert`]). Fails with `OutOfBounds` for coordinates outside
  /// the grid, leaving the volume unchanged.
  pub fn add_element(
    &mut self,
    x: i32,
    y: i32,
    run: &Run,
    depth_offset: i32,
  ) -> Result<(), VolumeError> {
    let index = self
      .column_index(x, y)
      .ok_or(VolumeError::OutOfBounds { x, y })?;
    self.columns[index].insert(run.shifted(depth_offset));
    Ok(())
  }

  /// Replace column (x, y)'s entire run arena, consuming the passed column
  /// and dropping the previous one. The passed arena must already satisfy
  /// the sorted/non-overlap invariant (debug-asserted).
  pub fn replace_element(&mut self, x: i32, y: i32, column: Column) -> Result<(), VolumeError> {
    let index = self
      .column_index(x, y)
      .ok_or(VolumeError::OutOfBounds { x, y })?;
    debug_assert!(
      column.check_invariant(),
      "replacement column must be sorted and non-overlapping"
    );
    self.columns[index] = column;
    Ok(())
  }

  /// True iff (x, y) is in bounds and some run covers local depth `z`.
  pub fn is_set(&self, x: i32, y: i32, z: i32) -> bool {
    self
      .column(x, y)
      .map_or(false, |column| column.contains(z))
  }

  /// Derive the per-depth-slice event tables from the current runs.
  ///
  /// Tables become stale after any mutation; the volume does not
  /// auto-invalidate, callers regenerate when needed.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "volume::generate_events")
  )]
  pub fn generate_events(&mut self) {
    let tables = EventTables::build(self);
    self.events = Some(tables);
  }

  /// Drop the event tables.
  pub fn clear_events(&mut self) {
    self.events = None;
  }

  /// The generated event tables, if present.
  pub fn events(&self) -> Option<&EventTables> {
    self.events.as_ref()
  }

  /// Columns whose run starts at exactly depth `z`. Empty when no tables
  /// have been generated or `z` is out of range.
  pub fn start_events(&self, z: i32) -> &[(i32, i32)] {
    self.events.as_ref().map_or(&[], |tables| tables.starts(z))
  }

  /// Columns whose run ends at exactly depth `z`.
  pub fn end_events(&self, z: i32) -> &[(i32, i32)] {
    self.events.as_ref().map_or(&[], |tables| tables.ends(z))
  }

  #[inline]
  fn column_index(&self, x: i32, y: i32) -> Option<usize> {
    if x < 0 || x >= self.width || y < 0 || y >= self.height {
      return None;
    }
    Some((y * self.width + x) as usize)
  }

  /// Swap in a freshly built frame: new extents, integer origin and column
  /// grid. The fractional origin is deliberately kept. Event tables are
  /// dropped along with the old frame.
  pub(crate) fn adopt_frame(&mut self, size: IVec3, origin: IVec3, columns: Vec<Column>) {
    debug_assert_eq!(columns.len(), (size.x * size.y) as usize);
    self.width = size.x;
    self.height = size.y;
    self.depth = size.z;
    self.origin = origin;
    self.columns = columns;
    self.events = None;
  }

  /// Row-major mutable access for the boolean engine's in-place sweeps.
  pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
    &mut self.columns
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
