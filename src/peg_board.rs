use log::trace;
use thiserror::Error;

use crate::disk::{Disk, DiskMove, Peg, PegTriple};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
  #[error("peg label {0} is used more than once")]
  DuplicatePeg(Peg),
  #[error("unknown peg {0}")]
  UnknownPeg(Peg),
  #[error("move #{index}: peg {peg} is empty")]
  EmptyPeg { index: usize, peg: Peg },
  #[error("move #{index}: expected to move {expected} but the top of the peg is {actual}")]
  WrongDisk { index: usize, expected: Disk, actual: Disk },
  #[error("move #{index}: cannot place {disk} on top of {below}")]
  LargerOnSmaller { index: usize, disk: Disk, below: Disk },
}

pub type SimulationResult<T> = Result<T, SimulationError>;

/// Three physical stacks of disks.  The last element of each stack is its top.
#[derive(Debug, Clone)]
pub struct PegBoard {
  pegs: PegTriple,
  stacks: [Vec<Disk>; 3],
  initial: Vec<Disk>,
  applied: usize,
}

impl PegBoard {
  /// Loads `disks` onto the source peg with `disks[0]` on top.
  pub fn new(disks: &[Disk], pegs: &PegTriple) -> SimulationResult<Self> {
    if pegs.source == pegs.destination || pegs.source == pegs.auxiliary {
      return Err(SimulationError::DuplicatePeg(pegs.source.clone()));
    }
    if pegs.destination == pegs.auxiliary {
      return Err(SimulationError::DuplicatePeg(pegs.destination.clone()));
    }

    let source_stack: Vec<Disk> = disks.iter().rev().cloned().collect();
    Ok(Self {
      pegs: pegs.clone(),
      stacks: [source_stack, Vec::new(), Vec::new()],
      initial: disks.to_vec(),
      applied: 0,
    })
  }

  pub fn replay(disks: &[Disk], pegs: &PegTriple, moves: &[DiskMove]) -> SimulationResult<Self> {
    let mut board = Self::new(disks, pegs)?;
    for disk_move in moves {
      board.apply(disk_move)?;
    }
    Ok(board)
  }

  pub fn apply(&mut self, disk_move: &DiskMove) -> SimulationResult<()> {
    let index = self.applied;
    let src = self.stack_index(&disk_move.from)?;
    let dst = self.stack_index(&disk_move.to)?;

    let top = match self.stacks[src].last() {
      Some(top) => top,
      None => return Err(SimulationError::EmptyPeg { index, peg: disk_move.from.clone() }),
    };
    if *top != disk_move.disk {
      return Err(SimulationError::WrongDisk {
        index,
        expected: disk_move.disk.clone(),
        actual: top.clone(),
      });
    }
    if let Some(below) = self.stacks[dst].last() {
      if below.size < top.size {
        return Err(SimulationError::LargerOnSmaller {
          index,
          disk: top.clone(),
          below: below.clone(),
        });
      }
    }

    trace!("#{index}: {disk_move}");
    if let Some(disk) = self.stacks[src].pop() {
      self.stacks[dst].push(disk);
    }
    self.applied += 1;
    Ok(())
  }

  /// Disks on `peg`, bottom first.
  pub fn stack(&self, peg: &Peg) -> SimulationResult<&[Disk]> {
    Ok(&self.stacks[self.stack_index(peg)?])
  }

  pub fn moves_applied(&self) -> usize {
    self.applied
  }

  /// True once every disk sits on the destination peg in its original order.
  pub fn is_transferred(&self) -> bool {
    let expected: Vec<Disk> = self.initial.iter().rev().cloned().collect();
    self.stacks[0].is_empty() && self.stacks[2].is_empty() && self.stacks[1] == expected
  }

  fn stack_index(&self, peg: &Peg) -> SimulationResult<usize> {
    if *peg == self.pegs.source {
      Ok(0)
    } else if *peg == self.pegs.destination {
      Ok(1)
    } else if *peg == self.pegs.auxiliary {
      Ok(2)
    } else {
      Err(SimulationError::UnknownPeg(peg.clone()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn disks() -> Vec<Disk> {
    vec![
      Disk::new(1, "red".to_string()),
      Disk::new(2, "blue".to_string()),
      Disk::new(3, "red".to_string()),
    ]
  }

  fn mv(disk: &Disk, from: &str, to: &str) -> DiskMove {
    DiskMove::new(disk.clone(), from.into(), to.into())
  }

  #[test]
  fn test_initial_stack_has_smallest_on_top() {
    let disks = disks();
    let board = PegBoard::new(&disks, &PegTriple::default()).unwrap();
    let source = board.stack(&"A".into()).unwrap();
    assert_eq!(source.last(), Some(&disks[0]));
    assert_eq!(source.first(), Some(&disks[2]));
    assert!(!board.is_transferred());
  }

  #[test]
  fn test_rejects_larger_on_smaller() {
    let disks = disks();
    let mut board = PegBoard::new(&disks, &PegTriple::default()).unwrap();
    board.apply(&mv(&disks[0], "A", "C")).unwrap();
    let err = board.apply(&mv(&disks[1], "A", "C")).unwrap_err();
    assert_eq!(
      err,
      SimulationError::LargerOnSmaller { index: 1, disk: disks[1].clone(), below: disks[0].clone() });
    assert_eq!(board.moves_applied(), 1);
  }

  #[test]
  fn test_rejects_move_from_empty_peg() {
    let disks = disks();
    let mut board = PegBoard::new(&disks, &PegTriple::default()).unwrap();
    let err = board.apply(&mv(&disks[0], "B", "C")).unwrap_err();
    assert!(matches!(err, SimulationError::EmptyPeg { index: 0, .. }));
  }

  #[test]
  fn test_rejects_disk_not_on_top() {
    let disks = disks();
    let mut board = PegBoard::new(&disks, &PegTriple::default()).unwrap();
    let err = board.apply(&mv(&disks[2], "A", "C")).unwrap_err();
    assert!(matches!(err, SimulationError::WrongDisk { .. }));
  }

  #[test]
  fn test_rejects_unknown_and_duplicate_pegs() {
    let disks = disks();
    let mut board = PegBoard::new(&disks, &PegTriple::default()).unwrap();
    assert_eq!(
      board.apply(&mv(&disks[0], "A", "Q")),
      Err(SimulationError::UnknownPeg("Q".into())));

    let same = PegTriple::new("A".into(), "A".into(), "B".into());
    assert!(matches!(PegBoard::new(&disks, &same), Err(SimulationError::DuplicatePeg(_))));
  }

  #[test]
  fn test_single_disk_transfer() {
    let disks = vec![Disk::new(1, "red".to_string())];
    let board = PegBoard::replay(&disks, &PegTriple::default(), &[mv(&disks[0], "A", "C")]).unwrap();
    assert!(board.is_transferred());
    assert_eq!(board.stack(&"C".into()).unwrap(), &disks[..]);
  }
}
