//! Masthead - build-time site descriptor for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Check => cli::check::run(&config),
        Commands::Emit { args } => cli::emit::run(args, &config),
        Commands::Head => {
            print!("{}", render::head_fragment(&config));
            Ok(())
        }
    }
}
