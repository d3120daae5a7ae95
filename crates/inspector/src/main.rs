use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use fixtures::block::{FIRST_PATTERN, SECOND_PATTERN};
use inspector::elf;
use inspector::report::FixtureReport;
use inspector::runner;
use inspector::scan;

/// Structural checker for freestanding fixture binaries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the built fixture ELF
    fixture: PathBuf,

    /// Execute the fixture and record its exit status
    #[arg(short, long)]
    run: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if !args.fixture.exists() {
        anyhow::bail!("fixture does not exist: {:?}", args.fixture);
    }

    let bytes = fs::read(&args.fixture)
        .with_context(|| format!("failed to read fixture: {:?}", args.fixture))?;

    let image = elf::parse_fixture_from_bytes(&bytes)
        .with_context(|| format!("failed to parse fixture ELF: {:?}", args.fixture))?;

    let patterns = [FIRST_PATTERN, SECOND_PATTERN];
    let hits = scan::scan_image(&image, &patterns);

    let exit_status = if args.run {
        Some(runner::run_fixture(&args.fixture)?)
    } else {
        None
    };

    let report = FixtureReport {
        path: args.fixture.display().to_string(),
        entry: image.entry,
        machine_ok: image.is_x86_64_executable(),
        entry_mapped: image.entry_segment().is_some_and(|s| s.executable),
        start_symbol: image.symbol("_start").map(|s| s.addr),
        stripped: image.symbols.is_empty(),
        hits,
        exit_status,
    };

    match args.format.as_str() {
        "json" => println!("{}", report.render_json()?),
        _ => {
            println!("{}", "Fixture Inspector".bold().blue());
            println!();

            let mut text = String::new();
            report.render_text(&mut text)?;
            print!("{text}");

            println!();
            if report.healthy() {
                println!("{}", "OK: entry and sentinels look right".green());
            } else {
                println!("{}", "FAILED: structural checks did not pass".red());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
