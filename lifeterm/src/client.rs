/*  Copyright 2026 the Lifeterm Developers.
 *
 *  This file is part of lifeterm.
 *
 *  lifeterm is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  lifeterm is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with lifeterm.  If not, see
 *  <http://www.gnu.org/licenses/>. */

#[macro_use]
extern crate log;
#[macro_use]
extern crate custom_error;

mod config;
mod constants;
mod error;
mod input;
mod render;
mod session;
mod terminal;

use crate::config::{LogSettings, Settings};
use crate::render::Renderer;
use crate::session::Session;
use crate::terminal::RawTerminal;

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use life::Game;
use log::LevelFilter;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Conway's Game of Life in the terminal", long_about = None)]
struct Args {
    #[arg(short, long, help = "Path to lifeterm.toml file.")]
    config_file: Option<PathBuf>,

    #[arg(long, help = "Board width in cells.")]
    width: Option<usize>,

    #[arg(long, help = "Board height in cells.")]
    height: Option<usize>,

    #[arg(long, help = "Milliseconds between generations.")]
    interval_ms: Option<u64>,

    #[arg(long, help = "Draw without colors or blinking.")]
    no_color: bool,

    #[arg(long, help = "Append log records to this file.")]
    log_file: Option<String>,

    #[arg(long, help = "Dump configuration and then exit with success return code.")]
    dump_config: bool,
}

impl Args {
    /// Command line values win over the config file.
    fn apply(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.board.width = width;
        }
        if let Some(height) = self.height {
            settings.board.height = height;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.gameplay.tick_interval_ms = interval_ms;
        }
        if self.no_color {
            settings.video.color = false;
        }
        if let Some(ref log_file) = self.log_file {
            settings.logging.file = Some(log_file.clone());
        }
    }
}

fn init_logging(log_settings: &LogSettings) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{:5}] - {}",
            Local::now().format("%H:%M:%S%.6f"),
            record.level(),
            record.args(),
        )
    });

    match log_settings.file {
        Some(ref path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path))?;
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .filter(None, log_settings.level_filter());
        }
        // stderr is the game screen
        None => {
            builder.filter(None, LevelFilter::Off);
        }
    }

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let args = Args::parse();
    let mut settings = Settings::load(args.config_file.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    if args.dump_config {
        print!("{}", settings.to_toml_string()?);
        return Ok(());
    }

    init_logging(&settings.logging)?;
    info!("Starting with {:?}", settings);

    let game = Game::new(settings.board.width, settings.board.height)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("could not start runtime")?;
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();

    let result = {
        let _raw_terminal = RawTerminal::enter().context("could not switch the terminal to raw mode")?;
        // never joined: it stays blocked on stdin until the process exits
        input::spawn_reader(io::stdin(), input_tx)?;

        let renderer = Renderer::new(io::stdout(), settings.video.clone());
        let mut session = Session::new(game, renderer, settings.gameplay.tick_interval());
        runtime.block_on(session.run(&mut input_rx))
    };
    result?;

    println!("Bye!");
    info!("Exiting cleanly");
    Ok(())
}
