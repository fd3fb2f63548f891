//! securebox - build a scrambled box and unlock it

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use securebox_core::{Lockable, SecureBox, UnlockError, UnlockReport, Unlocker};
use serde::Serialize;
use std::io;
use std::process::ExitCode;

use cli::Cli;

/// JSON shape of a run
#[derive(Debug, Serialize)]
struct Outcome {
    opened: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<UnlockReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_mismatch: Option<bool>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match run(&cli) {
        // Exit status mirrors the "still locked" flag
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the box is still locked.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.box_config();
    let mut secure_box = SecureBox::new(&config).context("failed to build box")?;
    tracing::debug!(?config, locked = secure_box.locked_count(), "built box");
    let mut stdout = io::stdout();

    if cli.show {
        render::render_grid(&mut stdout, "initial", &secure_box.state())?;
    }

    let result = Unlocker::new().unlock(&mut secure_box);

    if cli.show {
        render::render_grid(&mut stdout, "final", &secure_box.state())?;
    }

    let locked = secure_box.is_locked();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome(result))?);
    } else {
        if let Err(err) = &result {
            eprintln!("{}", err);
        }
        println!("{}", if locked { "BOX: LOCKED!" } else { "BOX: OPENED!" });
    }
    Ok(locked)
}

fn outcome(result: Result<UnlockReport, UnlockError>) -> Outcome {
    match result {
        Ok(report) => Outcome {
            opened: true,
            report: Some(report),
            error: None,
            model_mismatch: None,
        },
        Err(err) => Outcome {
            opened: false,
            report: None,
            model_mismatch: Some(err.is_model_mismatch()),
            error: Some(err.to_string()),
        },
    }
}
