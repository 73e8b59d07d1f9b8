use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::disk::Disk;

pub const DEFAULT_PALETTE: [&str; 5] = ["red", "blue", "green", "yellow", "white"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
  #[error("need at least {needed} distinct colors to stack {num_disks} disks, palette has {distinct}")]
  PaletteTooSmall { needed: usize, num_disks: usize, distinct: usize },
  #[error("no color left for disk {0} that differs from the one above it")]
  NoColorAvailable(u32),
}

/// Builds disks of sizes `1..=num_disks` whose adjacent colors always differ, so the result
/// is always plannable.  Repeated palette entries count once.
pub fn random_stack<R: Rng + ?Sized>(
    num_disks: usize,
    palette: &[&str],
    rng: &mut R,
) -> Result<Vec<Disk>, GeneratorError> {
  let mut seen = HashSet::new();
  let colors: Vec<&str> = palette.iter().copied().filter(|c| seen.insert(*c)).collect();

  let needed = num_disks.min(2);
  if colors.len() < needed {
    return Err(GeneratorError::PaletteTooSmall { needed, num_disks, distinct: colors.len() });
  }

  let mut disks: Vec<Disk> = Vec::with_capacity(num_disks);
  for size in 1..=num_disks as u32 {
    let previous = disks.last().map(|d| d.color.as_str());
    let candidates: Vec<&str> = colors.iter().copied().filter(|&c| Some(c) != previous).collect();
    let color = candidates.choose(rng).ok_or(GeneratorError::NoColorAvailable(size))?;
    disks.push(Disk::new(size, color.to_string()));
  }
  Ok(disks)
}
