use anyhow::{Context, Result};
use clap::Parser;
use moving_avg::{config::Config, input, moving_averages, output};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with default values for the other options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Newline-delimited JSON file with the events [default: events.json].
    #[arg(long = "input_file", visible_alias = "input-file")]
    input_file: Option<PathBuf>,

    /// Minutes covered by each moving average window [default: 10].
    #[arg(long = "window_size", visible_alias = "window-size")]
    window_size: Option<usize>,

    /// File receiving the averages instead of standard output.
    #[arg(long = "output_file", visible_alias = "output-file")]
    output_file: Option<PathBuf>,
}

impl CLI {
    fn into_config(self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(file) => {
                Config::from_file(file).with_context(|| format!("failed to load {file:?}"))?
            }
            None => Config::default(),
        };

        if let Some(input_file) = self.input_file {
            cfg.input_file = input_file;
        }
        if let Some(window_size) = self.window_size {
            cfg.window_size = window_size;
        }
        if self.output_file.is_some() {
            cfg.output_file = self.output_file;
        }

        cfg.validate().context("failed to validate cfg")?;
        Ok(cfg)
    }
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = args.into_config().context("failed to construct cfg")?;
    log::info!("{cfg:#?}");

    let store = input::read_events(&cfg.input_file)
        .with_context(|| format!("failed to read events from {:?}", cfg.input_file))?;

    let averages =
        moving_averages(&store, cfg.window_size).context("failed to compute moving averages")?;

    output::write_averages(&averages, cfg.output_file.as_deref())
        .context("failed to write averages")?;

    Ok(())
}
