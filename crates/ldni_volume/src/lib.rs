//! ldni_volume - run-length boolean occupancy volumes with set algebra.
//!
//! A volume is a width x height grid of columns, each holding a sorted list
//! of filled-depth runs along the third axis (a layered-depth encoding).
//! Storage stays proportional to the number of surface crossings instead of
//! the voxel count, at the cost of more involved set operations:
//!
//! - **Merge**: boolean union of two volumes that may have different extents
//!   and origins; the receiver grows to the covering bounding box.
//! - **Subtract**: boolean difference; the receiver's extent and origin are
//!   preserved.
//!
//! Run boundaries carry optional provenance (which source primitive authored
//! the surface), propagated through both operations. Consumers either query
//! point membership via [`Volume::is_set`] or derive per-depth-slice event
//! tables for sweep-style processing.
//!
//! # Example
//!
//! ```
//! use ldni_volume::{Run, Volume};
//!
//! let mut a = Volume::with_extents(4, 4, 8)?;
//! a.add_element(1, 1, &Run::new(0, 3), 0)?;
//!
//! let mut b = Volume::with_extents(4, 4, 8)?;
//! b.add_element(1, 1, &Run::new(2, 6), 0)?;
//!
//! a.merge(&b);
//! assert!(a.is_set(1, 1, 5));
//!
//! a.subtract(&b);
//! assert!(a.is_set(1, 1, 1));
//! assert!(!a.is_set(1, 1, 4));
//! # Ok::<(), ldni_volume::VolumeError>(())
//! ```

pub mod column;
pub mod dump;
pub mod error;
pub mod events;
pub mod run;
pub mod volume;

// Boolean engine: merge/subtract impls on Volume plus the per-column sweeps.
mod boolean;

pub use column::Column;
pub use error::VolumeError;
pub use events::EventTables;
pub use run::{Provenance, Run};
pub use volume::Volume;
