use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::disk::{Disk, DiskMove, Peg, PegTriple};

/// First pair of adjacent disks (by stacking order) that share a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorClash {
  /// Index of the upper (smaller) disk; the other one is at `index + 1`.
  pub index: usize,
  pub color: String,
}

impl fmt::Display for ColorClash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "disks {} and {} are adjacent and both {}", self.index, self.index + 1, self.color)
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
  #[error("unsolvable configuration: {0}")]
  UnsolvableConfiguration(ColorClash),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
  Moves(Vec<DiskMove>),
  Unsolvable(ColorClash),
}

impl Plan {
  pub fn is_unsolvable(&self) -> bool {
    matches!(self, Plan::Unsolvable(_))
  }

  /// Moves in execution order; empty for an unsolvable plan.
  pub fn moves(&self) -> &[DiskMove] {
    match self {
      Plan::Moves(moves) => moves,
      Plan::Unsolvable(_) => &[],
    }
  }

  /// Zero for both an empty stack and an unsolvable one; check `is_unsolvable` to tell
  /// them apart.
  pub fn move_count(&self) -> usize {
    self.moves().len()
  }

  pub fn into_result(self) -> Result<Vec<DiskMove>, PlanError> {
    match self {
      Plan::Moves(moves) => Ok(moves),
      Plan::Unsolvable(clash) => Err(PlanError::UnsolvableConfiguration(clash)),
    }
  }
}

pub fn find_color_clash(disks: &[Disk]) -> Option<ColorClash> {
  disks
      .windows(2)
      .position(|pair| pair[0].color == pair[1].color)
      .map(|index| ColorClash { index, color: disks[index].color.clone() })
}

/// True if no two adjacent disks share a color.  Only neighbours in the given order are
/// compared, so the first and third disk may match.
pub fn validate(disks: &[Disk]) -> bool {
  find_color_clash(disks).is_none()
}

pub fn plan(disks: &[Disk], pegs: &PegTriple) -> Plan {
  if let Some(clash) = find_color_clash(disks) {
    debug!("Rejecting stack of {}: {:?}", disks.len(), clash);
    return Plan::Unsolvable(clash);
  }

  let moves = move_top(disks, disks.len(), &pegs.source, &pegs.destination, &pegs.auxiliary);
  debug!("Planned {} moves for {} disks", moves.len(), disks.len());
  Plan::Moves(moves)
}

/// Moves the top `count` disks from `from` to `to`.  The largest of them is `disks[count - 1]`.
fn move_top(disks: &[Disk], count: usize, from: &Peg, to: &Peg, via: &Peg) -> Vec<DiskMove> {
  if count == 0 {
    return Vec::new();
  }

  let mut moves = move_top(disks, count - 1, from, via, to);
  let largest = &disks[count - 1];
  trace!("{} {} -> {}", largest, from, to);
  moves.push(DiskMove::new(largest.clone(), from.clone(), to.clone()));
  moves.append(&mut move_top(disks, count - 1, via, to, from));
  return moves;
}
