mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, calc, catalog, convert, slices};
use tally_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if let Err(e) = logging::init_logging() {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let mut cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        ..Config::default()
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Slices => {
            print::header("slices", cfg.quiet);
            slices::slices(&cfg)
        }
        Commands::Catalog => {
            print::header("product catalog", cfg.quiet);
            catalog::catalog(&cfg)
        }
        Commands::Calc { output } => {
            cfg.output = output;
            print::header("financial calculator", cfg.quiet);
            calc::calc(&cfg)
        }
        Commands::Convert { tokens, file } => {
            print::header("conversion", cfg.quiet);
            convert::convert(tokens, file, &cfg)
        }
    };

    match result {
        Ok(()) => {
            print::end_of_program(cfg.quiet);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
