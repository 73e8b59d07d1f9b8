//! Collects a disk stack from the outside world: `SIZE:COLOR` arguments, a JSON document or
//! interactive prompts.  Everything here is checked before it reaches the planner.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::disk::{Disk, Peg, PegTriple};

pub const MIN_DISKS: usize = 1;
pub const MAX_DISKS: usize = 8;

#[derive(Error, Debug)]
pub enum InputError {
  #[error("expected SIZE:COLOR, got {0:?}")]
  MalformedDisk(String),
  #[error("disk size must be a positive integer, got {0:?}")]
  InvalidSize(String),
  #[error("disk color must not be empty")]
  EmptyColor,
  #[error("number of disks must be an integer, got {0:?}")]
  InvalidCount(String),
  #[error("number of disks must be between {} and {}, got {0}", MIN_DISKS, MAX_DISKS)]
  DiskCountOutOfRange(usize),
  #[error("{0}")]
  Io(#[from] io::Error),
  #[error("invalid disk file: {0}")]
  Json(#[from] serde_json::Error),
}

pub type InputResult<T> = Result<T, InputError>;

/// Disk stack as read from a JSON file.  Peg labels fall back to the defaults.
#[derive(Deserialize, Debug)]
pub struct DiskFile {
  pub disks: Vec<Disk>,
  pub source: Option<Peg>,
  pub destination: Option<Peg>,
  pub auxiliary: Option<Peg>,
}

impl DiskFile {
  pub fn pegs(&self) -> PegTriple {
    let defaults = PegTriple::default();
    PegTriple {
      source: self.source.clone().unwrap_or(defaults.source),
      destination: self.destination.clone().unwrap_or(defaults.destination),
      auxiliary: self.auxiliary.clone().unwrap_or(defaults.auxiliary),
    }
  }
}

pub fn check_disk_count(count: usize) -> InputResult<usize> {
  if (MIN_DISKS..=MAX_DISKS).contains(&count) {
    Ok(count)
  } else {
    Err(InputError::DiskCountOutOfRange(count))
  }
}

pub fn parse_size(raw: &str) -> InputResult<u32> {
  match raw.trim().parse::<u32>() {
    Ok(size) if size > 0 => Ok(size),
    _ => Err(InputError::InvalidSize(raw.trim().to_string())),
  }
}

pub fn parse_color(raw: &str) -> InputResult<String> {
  let color = raw.trim();
  if color.is_empty() {
    return Err(InputError::EmptyColor);
  }
  Ok(color.to_string())
}

/// Parses `"3:red"` into a disk.
pub fn parse_disk_spec(spec: &str) -> InputResult<Disk> {
  let (size, color) = spec
      .split_once(':')
      .ok_or_else(|| InputError::MalformedDisk(spec.to_string()))?;
  Ok(Disk::new(parse_size(size)?, parse_color(color)?))
}

pub fn load_disk_file(path: impl AsRef<Path>) -> InputResult<DiskFile> {
  let file = File::open(path.as_ref())?;
  let disk_file = read_disk_file(BufReader::new(file))?;
  debug!("Loaded {} disks from {}", disk_file.disks.len(), path.as_ref().display());
  Ok(disk_file)
}

pub fn read_disk_file(reader: impl io::Read) -> InputResult<DiskFile> {
  let mut disk_file: DiskFile = serde_json::from_reader(reader)?;
  check_disk_count(disk_file.disks.len())?;
  for disk in &mut disk_file.disks {
    if disk.size == 0 {
      return Err(InputError::InvalidSize(disk.size.to_string()));
    }
    disk.color = parse_color(&disk.color)?;
  }
  Ok(disk_file)
}

/// Asks for the disk count and then each disk, smallest first.  Invalid answers are
/// reported and asked again; running out of input is an error.
pub fn prompt_disks(input: &mut impl BufRead, output: &mut impl Write) -> InputResult<Vec<Disk>> {
  let count = prompt_until(
    input,
    output,
    &format!("Number of disks ({MIN_DISKS} to {MAX_DISKS}): "),
    |line| line.trim().parse::<usize>()
        .map_err(|_| InputError::InvalidCount(line.trim().to_string()))
        .and_then(check_disk_count))?;

  writeln!(output, "Enter the disks from smallest to largest:")?;
  let mut disks = Vec::with_capacity(count);
  for i in 1..=count {
    let size = prompt_until(input, output, &format!("Size of disk {i}: "), parse_size)?;
    let color = prompt_until(input, output, &format!("Color of disk {i}: "), parse_color)?;
    disks.push(Disk::new(size, color));
  }
  Ok(disks)
}

fn prompt_until<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    parse: impl Fn(&str) -> InputResult<T>,
) -> InputResult<T> {
  loop {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
      return Err(InputError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input")));
    }
    match parse(&line) {
      Ok(value) => return Ok(value),
      Err(e) => writeln!(output, "{e}")?,
    }
  }
}
