use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE: &str = "A";
pub const DEFAULT_DESTINATION: &str = "C";
pub const DEFAULT_AUXILIARY: &str = "B";

/// A single puzzle disk.  Size rank 1 is the smallest disk.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
  pub size: u32,
  pub color: String,
}

impl fmt::Display for Disk {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.size, self.color)
  }
}

/// Opaque peg label, e.g. "A".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Peg(String);

impl Peg {
  pub fn new(label: impl Into<String>) -> Self {
    Self(label.into())
  }

  pub fn label(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Peg {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Peg {
  fn from(label: &str) -> Self {
    Peg::new(label)
  }
}

#[derive(new, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegTriple {
  pub source: Peg,
  pub destination: Peg,
  pub auxiliary: Peg,
}

impl Default for PegTriple {
  fn default() -> Self {
    Self {
      source: Peg::new(DEFAULT_SOURCE),
      destination: Peg::new(DEFAULT_DESTINATION),
      auxiliary: Peg::new(DEFAULT_AUXILIARY),
    }
  }
}

#[derive(new, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskMove {
  pub disk: Disk,
  pub from: Peg,
  pub to: Peg,
}

impl fmt::Display for DiskMove {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} -> {}", self.disk, self.from, self.to)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_pegs() {
    let pegs = PegTriple::default();
    assert_eq!(pegs.source.label(), "A");
    assert_eq!(pegs.destination.label(), "C");
    assert_eq!(pegs.auxiliary.label(), "B");
  }

  #[test]
  fn test_move_display() {
    let m = DiskMove::new(Disk::new(3, "red".to_string()), "A".into(), "C".into());
    assert_eq!(m.to_string(), "(3, red) A -> C");
  }

  #[test]
  fn test_peg_serializes_as_plain_string() {
    let json = serde_json::to_string(&Peg::new("left")).unwrap();
    assert_eq!(json, "\"left\"");
  }
}
