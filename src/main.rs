#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! chtq — build cheat.sh queries and print the answer.

mod cli;
mod commands;
mod error;
mod fetch;
mod query;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json);

    match commands::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            log::debug!("{err:?}");
            let error_output = ErrorOutput::from_app_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
