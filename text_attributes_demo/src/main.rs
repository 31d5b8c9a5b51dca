// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line demo for `text_attributes`.
//!
//! `render` paints a sample with every attribute exposed as a flag; `fonts` lists the installed
//! families with their Japanese coverage, metrics and the fitting size of a sample.

use std::error::Error;

use clap::{Parser, Subcommand};

mod fonts;
mod render;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a styled sample to a PNG file.
    Render(render::RenderArgs),
    /// List installed font families and preview a sample in each.
    Fonts(fonts::FontsArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render::run(&args),
        Command::Fonts(args) => fonts::run(&args),
    }
}
