//! stagebeat - terminal preview of percussion animation
//!
//! Run with: cargo run -- [--config stage.ron] [--headless <seconds>]

mod app;
mod demo;
mod ui;

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use std::path::PathBuf;

use app::Stagebeat;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    headless: Option<f64>,
}

fn parse_args() -> EyreResult<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| eyre!("--config needs a path"))?;
                args.config = Some(PathBuf::from(path));
            }
            "--headless" => {
                let seconds = iter.next().ok_or_else(|| eyre!("--headless needs a duration"))?;
                let seconds: f64 = seconds
                    .parse()
                    .wrap_err_with(|| format!("not a number of seconds: {seconds}"))?;
                args.headless = Some(seconds);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = parse_args()?;

    let timeline = demo::groove().wrap_err("failed to build demo groove")?;
    let mut app = Stagebeat::new(timeline);
    if let Some(path) = &args.config {
        app = app.config_file(path)?;
    }

    match args.headless {
        Some(seconds) => app.run_headless(seconds),
        None => app.run(),
    }
}
