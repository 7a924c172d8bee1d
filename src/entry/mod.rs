//! Process entry: argument parsing, logging setup, and run dispatch.
mod plan;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{TesterArgs, normalize_args};
use crate::error::{AppError, AppResult};
use plan::{build_plan, execute_plan};

/// Parses the process arguments and executes one load run.
///
/// `--help`, `-?` and malformed arguments are handled by clap, which prints
/// and exits on its own.
///
/// # Errors
///
/// Returns an error when configuration is invalid or the run cannot start.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let config = build_plan(&mut args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(config))
}

fn parse_args() -> AppResult<(TesterArgs, ArgMatches)> {
    let raw_args = normalize_args(std::env::args_os());
    let matches = TesterArgs::command().get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

/// Prints the failure and, for configuration problems, the usage text.
pub fn report_error(err: &AppError) {
    eprintln!("Error: {}", err);
    if err.wants_usage() {
        let mut cmd = TesterArgs::command();
        if cmd.print_help().is_ok() {
            println!();
        }
    }
}
