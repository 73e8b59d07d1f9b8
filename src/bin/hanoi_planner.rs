//! Plans the transfer of a colored disk stack and prints the moves.
//!
//! Disks come from `-d SIZE:COLOR` arguments (smallest first), a JSON file, a random
//! generator or, when none of those are given, interactive prompts on stdin.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use colored_hanoi::disk::{Disk, DiskMove, Peg, PegTriple};
use colored_hanoi::disk_input::{check_disk_count, load_disk_file, parse_disk_spec, prompt_disks};
use colored_hanoi::peg_board::PegBoard;
use colored_hanoi::stack_generator::{random_stack, DEFAULT_PALETTE};
use colored_hanoi::transfer_planner::{plan, Plan};

const UNSOLVABLE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[clap(name = "hanoi_planner")]
struct Opts {
  /// Disk as SIZE:COLOR, repeated from smallest to largest.
  #[clap(short = 'd', long = "disk", parse(try_from_str = parse_disk_spec))]
  disks: Vec<Disk>,

  /// JSON file with a "disks" array and optional peg labels.
  #[clap(long, conflicts_with_all = &["disks", "random"])]
  disks_file: Option<PathBuf>,

  /// Generate a random solvable stack of this many disks.
  #[clap(long, conflicts_with = "disks")]
  random: Option<usize>,

  #[clap(long, requires = "random")]
  seed: Option<u64>,

  #[clap(long)]
  source: Option<String>,

  #[clap(long)]
  destination: Option<String>,

  #[clap(long)]
  auxiliary: Option<String>,

  /// Replay the plan on a simulated board before printing it.
  #[clap(long)]
  verify: bool,

  /// Print one JSON object per move.
  #[clap(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let opts: Opts = Opts::parse();

  let (disks, file_pegs) = collect_disks(&opts)?;
  let pegs = resolve_pegs(&opts, file_pegs)?;
  info!("Planning {} disks from {} to {} via {}", disks.len(), pegs.source, pegs.destination, pegs.auxiliary);

  let moves = match plan(&disks, &pegs) {
    Plan::Moves(moves) => moves,
    Plan::Unsolvable(clash) => {
      println!("Impossible to complete the transfer: {clash}");
      process::exit(UNSOLVABLE_EXIT_CODE);
    }
  };

  if opts.verify {
    let board = PegBoard::replay(&disks, &pegs, &moves)?;
    if !board.is_transferred() {
      bail!("Plan left disks off the destination peg after {} moves", board.moves_applied());
    }
    info!("Verified {} moves", board.moves_applied());
  }

  print_moves(&moves, opts.json)
}

fn collect_disks(opts: &Opts) -> anyhow::Result<(Vec<Disk>, Option<PegTriple>)> {
  if let Some(path) = &opts.disks_file {
    let disk_file = load_disk_file(path)?;
    let pegs = disk_file.pegs();
    return Ok((disk_file.disks, Some(pegs)));
  }

  if let Some(num_disks) = opts.random {
    check_disk_count(num_disks)?;
    let mut rng = match opts.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let disks = random_stack(num_disks, &DEFAULT_PALETTE, &mut rng)?;
    let listing: Vec<String> = disks.iter().map(|d| d.to_string()).collect();
    println!("Generated disks: {}", listing.join(" "));
    return Ok((disks, None));
  }

  if !opts.disks.is_empty() {
    check_disk_count(opts.disks.len())?;
    return Ok((opts.disks.clone(), None));
  }

  let stdin = io::stdin();
  let disks = prompt_disks(&mut stdin.lock(), &mut io::stdout())?;
  Ok((disks, None))
}

fn resolve_pegs(opts: &Opts, file_pegs: Option<PegTriple>) -> anyhow::Result<PegTriple> {
  let base = file_pegs.unwrap_or_default();
  let pick = |flag: &Option<String>, fallback: Peg| -> anyhow::Result<Peg> {
    match flag {
      Some(label) if label.trim().is_empty() => Err(anyhow!("Peg labels must not be empty")),
      Some(label) => Ok(Peg::new(label.trim())),
      None => Ok(fallback),
    }
  };
  Ok(PegTriple {
    source: pick(&opts.source, base.source)?,
    destination: pick(&opts.destination, base.destination)?,
    auxiliary: pick(&opts.auxiliary, base.auxiliary)?,
  })
}

fn print_moves(moves: &[DiskMove], json: bool) -> anyhow::Result<()> {
  if json {
    for disk_move in moves {
      println!("{}", serde_json::to_string(disk_move)?);
    }
    return Ok(());
  }

  println!("Moves required ({}):", moves.len());
  for disk_move in moves {
    println!("{disk_move}");
  }
  Ok(())
}
