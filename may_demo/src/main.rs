use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::info;
use std::io::{self, BufRead, Write};

mod config;
mod parse;
mod rows;

use config::{Cli, DemoConfig};
use rows::{Board, Outcome};

const TITLE_WIDTH: usize = 40;

fn main() -> Result<()> {
    let config = DemoConfig::from(Cli::parse());

    env_logger::init_from_env(
        env_logger::Env::new().filter_or("RUST_LOG", config.log_level.to_string()),
    );
    if !config.color {
        colored::control::set_override(false);
    }

    let mut board = Board::standard();
    info!("evaluating {} rows", board.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_table(&mut out, &board.evaluate(&config.a, &config.b))?;

    if config.interactive {
        let stdin = io::stdin();
        for (number, line) in stdin.lock().lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read input line {}", number + 1))?;
            let (a, b) = parse::split_inputs(&line);
            writeln!(out)?;
            print_table(&mut out, &board.evaluate(a, b))?;
        }
        info!("input closed");
    }

    Ok(())
}

fn print_table(out: &mut impl Write, results: &[(&'static str, Outcome)]) -> Result<()> {
    for (index, (title, outcome)) in results.iter().enumerate() {
        let padded = format!("{:<width$}", title, width = TITLE_WIDTH);
        let title = if index % 2 == 0 { padded.bold() } else { padded.normal() };
        let text = if outcome.has_value {
            outcome.text.green()
        } else {
            outcome.text.dimmed()
        };
        writeln!(out, "{}{}", title, text).context("Failed to write output")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}
