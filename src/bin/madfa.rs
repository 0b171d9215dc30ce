//! Command-line front end for the `madfa` library (C12).
//!
//! Grounded on `main.cpp`'s `-m`/`-t`/`-l` dispatch, rebuilt as one-shot
//! `clap` subcommands (no interactive stdin loop — see the Non-goals
//! refinement in `SPEC_FULL.md` §1). `main.cpp` itself gates its one
//! working branch behind an inverted `strcmp(argv[1], "-m")` check, which
//! only ever runs when the flag is *not* `-m`; that inversion is treated as
//! a bug in the original and not reproduced (see `DESIGN.md`).

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use madfa::{lines::Lines, persist, Automaton, AutomatonConfig, AutomatonError, Builder, LayoutTag, List, Tree};

/// Outcomes the CLI can fail with, beyond the core's own `AutomatonError`.
///
/// `madfa test` reports lines the loaded automaton does not recognize; that
/// is a verification mismatch, not a structural defect in the automaton
/// file, so it gets its own variant rather than being folded into
/// `AutomatonError::Corrupt` (whose file-well-formedness meaning it would
/// otherwise muddy).
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
    #[error("{missing}/{total} lexicon lines were not recognized by the automaton")]
    VerificationFailed { missing: u64, total: u64 },
}

#[derive(Parser)]
#[command(name = "madfa", about = "Minimal acyclic automaton lexicon tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an automaton file from a sorted lexicon.
    Build {
        lexicon: PathBuf,
        automaton: PathBuf,
        #[arg(long)]
        layout: Option<String>,
        #[arg(long)]
        quiet: bool,
    },
    /// Verify every lexicon line is recognized by an automaton file.
    Test {
        lexicon: PathBuf,
        automaton: PathBuf,
        #[arg(long)]
        layout: Option<String>,
    },
    /// Enumerate every string an automaton file accepts.
    List {
        automaton: PathBuf,
        out_lexicon: PathBuf,
        #[arg(long)]
        layout: Option<String>,
    },
}

fn resolve_layout(explicit: Option<&str>, path: &Path) -> Result<LayoutTag, AutomatonError> {
    if let Some(s) = explicit {
        return s.parse().map_err(|reason| AutomatonError::Corrupt { reason });
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("tree") => Ok(LayoutTag::Tree),
        Some("list") => Ok(LayoutTag::List),
        _ => Ok(LayoutTag::List),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Command::Build { lexicon, automaton, layout, quiet } => resolve_layout(layout.as_deref(), &automaton)
            .and_then(|tag| run_build(tag, &lexicon, &automaton, quiet))
            .map_err(CliError::from),
        Command::Test { lexicon, automaton, layout } => resolve_layout(layout.as_deref(), &automaton)
            .map_err(CliError::from)
            .and_then(|tag| run_test(tag, &automaton, &lexicon)),
        Command::List { automaton, out_lexicon, layout } => resolve_layout(layout.as_deref(), &automaton)
            .and_then(|tag| run_list(tag, &automaton, &out_lexicon))
            .map_err(CliError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("madfa: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_build(layout: LayoutTag, lexicon: &Path, automaton: &Path, quiet: bool) -> Result<(), AutomatonError> {
    match layout {
        LayoutTag::List => build_and_save::<List>(lexicon, automaton, quiet),
        LayoutTag::Tree => build_and_save::<Tree>(lexicon, automaton, quiet),
    }
}

fn build_and_save<L: madfa::Layout>(lexicon: &Path, automaton: &Path, quiet: bool) -> Result<(), AutomatonError> {
    let mut config = AutomatonConfig::for_layout(L::TAG);
    config.print_statistics = !quiet;

    let reader = BufReader::new(File::open(lexicon)?);
    let mut builder: Builder<L> = Builder::new(config);

    let mut count: u64 = 0;
    for line in Lines::new(reader) {
        let line = line?;
        builder.insert(&line)?;
        count += 1;
        if !quiet && count % 65_536 == 0 {
            info!("{count} lines read");
        }
    }

    let built = builder.finish()?;
    persist::save(&built, automaton)?;
    if !quiet {
        info!("built {} from {} lexicon lines -> {}", automaton.display(), count, automaton.display());
    }
    Ok(())
}

fn run_test(layout: LayoutTag, automaton: &Path, lexicon: &Path) -> Result<(), CliError> {
    match layout {
        LayoutTag::List => test_against::<List>(automaton, lexicon),
        LayoutTag::Tree => test_against::<Tree>(automaton, lexicon),
    }
}

fn test_against<L: madfa::Layout>(automaton: &Path, lexicon: &Path) -> Result<(), CliError> {
    let loaded: Automaton<L> = persist::load(automaton)?;
    let reader = BufReader::new(File::open(lexicon).map_err(AutomatonError::from)?);

    let mut missing = 0u64;
    let mut total = 0u64;
    for line in Lines::new(reader) {
        let line = line.map_err(AutomatonError::from)?;
        total += 1;
        if !loaded.contains(&line) {
            missing += 1;
            eprintln!("NOT FOUND: {}", String::from_utf8_lossy(&line));
        }
    }

    if missing > 0 {
        return Err(CliError::VerificationFailed { missing, total });
    }
    info!("all {total} lexicon lines recognized");
    Ok(())
}

fn run_list(layout: LayoutTag, automaton: &Path, out_lexicon: &Path) -> Result<(), AutomatonError> {
    match layout {
        LayoutTag::List => list_into::<List>(automaton, out_lexicon),
        LayoutTag::Tree => list_into::<Tree>(automaton, out_lexicon),
    }
}

fn list_into<L: madfa::Layout>(automaton: &Path, out_lexicon: &Path) -> Result<(), AutomatonError> {
    let loaded: Automaton<L> = persist::load(automaton)?;
    let mut out = File::create(out_lexicon)?;
    let mut count = 0u64;
    for word in madfa::EnumIter::new(&loaded) {
        out.write_all(&word)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    info!("listed {count} strings -> {}", out_lexicon.display());
    Ok(())
}
