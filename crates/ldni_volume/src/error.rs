//! Error taxonomy for volume construction and mutation.

use thiserror::Error;

/// Recoverable errors reported to the immediate caller.
///
/// Both variants leave the volume untouched: a failed `init` keeps the prior
/// state, and an out-of-bounds mutation is a no-op. Internal invariant
/// violations (an unsorted or overlapping column entering the boolean
/// engine) are debug assertions rather than variants here; the sweep
/// algorithms have no safe degraded behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum VolumeError {
  /// Non-positive extent passed to initialization.
  #[error("invalid volume dimensions {width}x{height}x{depth}")]
  InvalidDimension { width: i32, height: i32, depth: i32 },

  /// Column coordinates outside `[0, width) x [0, height)`.
  #[error("column ({x}, {y}) out of bounds")]
  OutOfBounds { x: i32, y: i32 },
}
