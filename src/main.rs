mod app;
mod catalog;
mod cli;
mod config;
mod consts;
mod error;
mod process;
mod utils;

use clap::Parser;

use cli::Cli;
use config::{Config, Settings};
use utils::set_debug;

fn main() {
    let _cli = Cli::parse();

    let settings = Settings::from_env(Config::load());
    set_debug(settings.debug);

    app::run(&settings);
}
