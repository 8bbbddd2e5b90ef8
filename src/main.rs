mod categorizer;
mod cli;
mod editor;
mod error;
mod fmt;
mod matcher;
mod models;
mod qif;
mod reviewer;
mod settings;
mod store;
mod terminal;

use clap::Parser;

use cli::Cli;
use settings::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_cli(Cli::parse());
    log::debug!("{settings:?}");

    if let Err(e) = cli::categorize::run(&settings) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
