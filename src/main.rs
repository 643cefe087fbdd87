// src/main.rs
use anyhow::Context;
use clap::{CommandFactory, Parser};

mod cli;
mod clipboard;
mod generators;
mod models;
mod random;

use crate::cli::Args;
use crate::generators::password;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("command line args: {:?}", args);

    // Validate up front so a bad length gets the usage text, not just
    // a bare error.
    if args.length < password::MIN_LENGTH {
        eprintln!(
            "Error: password length must be at least {} characters",
            password::MIN_LENGTH
        );
        let _ = Args::command().print_help();
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = args.generation_options();

    let password = password::generate(&options).context("generating password")?;

    if args.copy {
        match clipboard::copy(&password) {
            Ok(()) => println!("Password has been generated and copied to clipboard"),
            Err(e) => {
                // Clipboard trouble is not fatal; fall back to stdout.
                log::warn!("clipboard hand-off failed: {e}");
                println!("Generated password: {password}");
                println!("Warning: could not copy to clipboard: {e}");
            }
        }
    } else {
        println!("Generated password: {password}");
    }

    Ok(())
}
