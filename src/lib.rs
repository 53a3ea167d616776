pub mod cli;
pub mod command;
pub mod config;
pub mod frontend;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

pub fn run() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();

    // 1. ── Scan + parse ───────────────────────────────────────────────
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let result = frontend::parse_source(&source);

    if !result.is_clean() {
        for diagnostic in &result.diagnostics {
            eprintln!("{diagnostic}");
        }
        return Ok(ExitCode::FAILURE);
    }

    if args.dump_config {
        let json = serde_json::to_string_pretty(&result.config)
            .context("Serialising build configuration")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    // 2. ── Assemble the compiler invocation ───────────────────────────
    let command_line = command::assemble(&result.config);
    println!("{command_line}");

    if args.dry_run {
        return Ok(ExitCode::SUCCESS);
    }

    // 3. ── Run it ─────────────────────────────────────────────────────
    let start = Instant::now();
    let status = execute(&command_line)?;
    if status.success() {
        println!(
            "Compiled successfully in {:.2} seconds",
            start.elapsed().as_secs_f64()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// The assembled invocation is one shell command line, so hand it to the
/// platform shell rather than splitting it ourselves.
fn execute(command_line: &str) -> anyhow::Result<std::process::ExitStatus> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", command_line]);
        c
    } else {
        let mut c = std::process::Command::new("sh");
        c.args(["-c", command_line]);
        c
    };

    command
        .status()
        .with_context(|| format!("Running `{command_line}`"))
}
