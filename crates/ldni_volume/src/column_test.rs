use crate::run::Provenance;

use super::*;

#[test]
fn test_insert_keeps_sorted_order() {
  let mut column = Column::new();
  column.insert(Run::new(10, 12));
  column.insert(Run::new(0, 2));
  column.insert(Run::new(5, 7));

  let starts: Vec<i32> = column.iter().map(|r| r.start).collect();
  assert_eq!(starts, vec![0, 5, 10]);
  assert!(column.check_invariant());
}

#[test]
fn test_insert_coalesces_overlap() {
  let mut column = Column::new();
  column.insert(Run::new(0, 4));
  column.insert(Run::new(3, 8));

  assert_eq!(column.len(), 1);
  assert_eq!(column.runs()[0].start, 0);
  assert_eq!(column.runs()[0].end, 8);
}

#[test]
fn test_insert_coalesces_touching_bridge() {
  let mut column = Column::new();
  column.insert(Run::new(0, 2));
  column.insert(Run::new(4, 6));
  // Touches both neighbors: all three fuse into one run.
  column.insert(Run::new(2, 4));

  assert_eq!(column.len(), 1);
  assert_eq!(column.runs()[0].start, 0);
  assert_eq!(column.runs()[0].end, 6);
}

#[test]
fn test_coalesce_keeps_outer_provenance() {
  let mut column = Column::new();
  column.insert(Run::with_provenance(
    0,
    2,
    Some(Provenance::new(1, 10)),
    Some(Provenance::new(2, 20)),
  ));
  column.insert(Run::with_provenance(
    4,
    6,
    Some(Provenance::new(3, 30)),
    Some(Provenance::new(4, 40)),
  ));
  column.insert(Run::new(1, 5));

  let fused = column.runs()[0];
  assert_eq!((fused.start, fused.end), (0, 6));
  // Outer boundaries survive from the original runs; the interior
  // boundaries at 2 and 4 are gone entirely.
  assert_eq!(fused.start_provenance, Some(Provenance::new(1, 10)));
  assert_eq!(fused.end_provenance, Some(Provenance::new(4, 40)));
}

#[test]
fn test_coalesce_tie_prefers_existing_provenance() {
  let mut column = Column::new();
  column.insert(Run::with_provenance(0, 4, Some(Provenance::new(7, 0)), None));
  column.insert(Run::with_provenance(0, 4, Some(Provenance::new(9, 0)), None));

  assert_eq!(column.len(), 1);
  assert_eq!(
    column.runs()[0].start_provenance,
    Some(Provenance::new(7, 0))
  );
}

#[test]
fn test_contains() {
  let mut column = Column::new();
  column.insert(Run::new(0, 2));
  column.insert(Run::new(5, 7));

  assert!(column.contains(0));
  assert!(column.contains(1));
  assert!(!column.contains(2));
  assert!(!column.contains(4));
  assert!(column.contains(6));
  assert!(!column.contains(7));
}

#[test]
fn test_clear() {
  let mut column = Column::new();
  column.insert(Run::new(0, 2));
  column.clear();

  assert!(column.is_empty());
  assert!(!column.contains(0));
}

#[test]
fn test_from_runs() {
  let column = Column::from_runs([Run::new(0, 2), Run::new(4, 6)]);
  assert_eq!(column.len(), 2);
  assert!(column.check_invariant());
}

#[test]
fn test_check_invariant_rejects_overlap() {
  let column = Column {
    runs: [Run::new(0, 4), Run::new(2, 6)].into_iter().collect(),
  };
  assert!(!column.check_invariant());
}

#[test]
fn test_check_invariant_allows_touching() {
  let column = Column {
    runs: [Run::new(0, 2), Run::new(2, 4)].into_iter().collect(),
  };
  assert!(column.check_invariant());
}
