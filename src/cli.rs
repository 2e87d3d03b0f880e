// src/cli.rs
//
// `collect`: scrape every listing page and write the table. Takes no
// options; `-h` prints usage.

use std::{env, ffi::OsString};

use crate::{
    collect::{self, Summary},
    config::options::AppOptions,
    core::{CssListingParser, HttpFetcher},
    error::CollectError,
    progress::Progress,
};

/// Prints one line per page, the way a terminal user expects.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unexpected argument {0:?} (collect takes no arguments)")]
    UnknownArg(String),
    #[error(transparent)]
    Collect(#[from] CollectError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Collect,
}

/// Arguments after the program name. Non-UTF-8 input is reported, not
/// panicked on.
pub fn parse_args(args: impl IntoIterator<Item = OsString>) -> Result<Command, CliError> {
    match args.into_iter().next() {
        None => Ok(Command::Collect),
        Some(a) if a == "-h" || a == "--help" => Ok(Command::Help),
        Some(a) => Err(CliError::UnknownArg(a.to_string_lossy().into_owned())),
    }
}

pub fn run() -> Result<Option<Summary>, CliError> {
    match parse_args(env::args_os().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(None)
        }
        Command::Collect => collect_all(&AppOptions::default()).map(Some),
    }
}

fn collect_all(opts: &AppOptions) -> Result<Summary, CliError> {
    let fetcher = HttpFetcher::new()?;
    let parser = CssListingParser::new()?;

    let summary = collect::run(&opts.collect, &fetcher, &parser, Some(&mut ConsoleProgress))?;
    println!(
        "Scraping completed. {} books saved to {}",
        summary.items,
        summary.path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_collects() {
        assert_eq!(parse_args(args(&[])).unwrap(), Command::Collect);
    }

    #[test]
    fn help_flags() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn anything_else_is_rejected() {
        match parse_args(args(&["--pages", "3"])) {
            Err(CliError::UnknownArg(a)) => assert_eq!(a, "--pages"),
            other => panic!("expected unknown argument, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_an_error_not_a_panic() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'-', 0xff, b'x']);
        let err = parse_args(vec![raw]).unwrap_err();
        assert!(matches!(err, CliError::UnknownArg(ref a) if a.contains('\u{fffd}')));
    }
}
