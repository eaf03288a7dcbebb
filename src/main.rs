mod api;
mod app;
mod cli;
mod config;
mod error;
mod menu;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    // Keep stdout machine-readable in --json mode
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
