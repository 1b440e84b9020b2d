//! TurboTune command-line interface
//!
//! Thin I/O boundary around the boost controller: reads engine speed and
//! load from flags or interactive prompts, runs one control cycle, and
//! prints the report. Malformed numeric input is rejected and re-prompted
//! here and never reaches the core.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use turbotune_core::config::BoostTuning;
use turbotune_core::controller::BoostController;

#[derive(Parser, Debug)]
#[command(
    name = "turbotune",
    version,
    about = "Model turbocharger boost-pressure regulation"
)]
struct Args {
    /// Engine speed in RPM (prompts interactively when omitted)
    #[arg(long)]
    speed: Option<f64>,

    /// Engine load in percent (prompts interactively when omitted)
    #[arg(long)]
    load: Option<f64>,

    /// Path to a tuning JSON file (stock tuning when omitted)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also report the boost pressure in PSI
    #[arg(long)]
    psi: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading tuning file");
            BoostTuning::from_file(path)
                .with_context(|| format!("failed to load tuning from {}", path.display()))?
        }
        None => BoostTuning::default(),
    };
    let controller = BoostController::new(tuning).context("invalid tuning")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let engine_speed = match args.speed {
        Some(value) => value,
        None => prompt_number(&mut lines, "Enter Engine Speed (RPM): ")?,
    };
    let engine_load = match args.load {
        Some(value) => value,
        None => prompt_number(&mut lines, "Enter Engine Load (%): ")?,
    };

    let report = controller.run_cycle(engine_speed, engine_load);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
        if args.psi {
            println!("Turbo Boost Pressure: {:.2} PSI", report.boost_psi());
        }
    }

    Ok(())
}

/// Prompt until the user supplies a parseable number
fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = lines
            .next()
            .context("input closed before a value was supplied")??;
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => eprintln!("Not a number: '{}'", line.trim()),
        }
    }
}
