//! CLI helpers.

pub(crate) mod error;
mod output;
mod stdout_logger;

use core::fmt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use crate::input::IStr;

pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Override the input file.
    input: Option<PathBuf>,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
}

impl Opts {
    /// Parse CLI options and set up logging accordingly.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(opts.log_level());
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// The input file to read, falling back to `default`.
    pub fn input_path<'a>(&'a self, default: &'a Path) -> &'a Path {
        self.input.as_deref().unwrap_or(default)
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Run a puzzle solver.
///
/// Parses CLI options, loads the input and prints the answer of the solver.
/// Errors are decorated with the position in the input they were raised
/// for.
pub fn run<T, O>(default_input: &'static str, solve: T) -> Result<()>
where
    T: FnOnce(IStr) -> Result<O>,
    O: fmt::Debug,
{
    let opts = Opts::parse()?;
    let path = opts.input_path(Path::new(default_input));
    let input = crate::env::input(path)?;

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let value = match solve(input) {
        Ok(value) => value,
        Err(error) => {
            let error = error_context(path, input, error);

            if opts.json {
                o.error(format_args!("{error:#}"))?;
            }

            return Err(error);
        }
    };

    o.answer(&value)?;
    Ok(())
}
