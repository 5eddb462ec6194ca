#![forbid(unsafe_code)]

//! Command-line argument parsing for the sortvis binary.
//!
//! Parses args by hand. Environment variables with the `SORTVIS_` prefix
//! override the config file; explicit flags override both.

use std::env;
use std::path::PathBuf;
use std::process;

use sortvis_core::Distribution;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
SortVis: race two sorting algorithms side by side

USAGE:
    sortvis [OPTIONS]

OPTIONS:
    --algo-a=ID          Algorithm in the top lane (default: bubble)
    --algo-b=ID          Algorithm in the bottom lane (default: quick)
    --size=N             Number of elements, 10-200 (default: 30)
    --distribution=D     Initial ordering (default: random)
    --speed=N            Speed, 1-100 (default: 50)
    --no-sound           Disable tones
    --config=PATH        Load settings from a JSON file
    --headless           Run both lanes to completion and print a summary
    --log-file=PATH      Write logs to PATH
    --help, -h           Show this help message
    --version, -V        Show version

ALGORITHMS:
    bubble selection insertion merge quick heap
    Aliases: counting radix bucket shell tim comb pigeonhole cycle
    strand bitonic pancake bogo gnome stooge oddeven (tim runs merge
    sort, the rest run bubble sort)

DISTRIBUTIONS:
    random ascending descending ascendingHalves descendingHalves

KEYBINDINGS:
    Space / Enter   Start or resume
    p               Pause
    r               Reset
    d               Cycle distribution
    + / -           Faster / slower
    [ / ]           10 fewer / 10 more elements
    a / b           Next algorithm for the first / second panel
    s               Toggle sound
    q / Esc / Ctrl+C Quit

ENVIRONMENT VARIABLES:
    SORTVIS_ALGO_A         Override the config file's algorithmA
    SORTVIS_ALGO_B         Override the config file's algorithmB
    SORTVIS_SIZE           Override the config file's size
    SORTVIS_DISTRIBUTION   Override the config file's distribution
    SORTVIS_SPEED          Override the config file's speed
    SORTVIS_LOG            Log filter (default: info)";

/// Parsed command-line options.
///
/// Every setting is optional so that unset values fall through to the
/// config file and then to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Raw algorithm id for lane A. Unknown ids fall back to bubble.
    pub algo_a: Option<String>,
    /// Raw algorithm id for lane B.
    pub algo_b: Option<String>,
    pub size: Option<usize>,
    pub distribution: Option<Distribution>,
    pub speed: Option<u32>,
    /// `--no-sound` was given.
    pub no_sound: bool,
    pub config: Option<PathBuf>,
    pub headless: bool,
    pub log_file: Option<PathBuf>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment variables.
    ///
    /// Prints help or version and exits when asked; prints the problem and
    /// exits with status 1 on a malformed argument.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Invocation::Run(opts)) => opts,
            Ok(Invocation::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Invocation::Version) => {
                println!("sortvis {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `var` as the environment lookup.
    pub fn parse_from<I, F>(args: I, var: F) -> Result<Invocation, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first; flags below overwrite.
        if let Some(val) = var("SORTVIS_ALGO_A") {
            opts.algo_a = Some(val);
        }
        if let Some(val) = var("SORTVIS_ALGO_B") {
            opts.algo_b = Some(val);
        }
        if let Some(val) = var("SORTVIS_SIZE")
            && let Ok(n) = val.trim().parse()
        {
            opts.size = Some(n);
        }
        if let Some(val) = var("SORTVIS_DISTRIBUTION")
            && let Ok(d) = val.parse()
        {
            opts.distribution = Some(d);
        }
        if let Some(val) = var("SORTVIS_SPEED")
            && let Ok(n) = val.trim().parse()
        {
            opts.speed = Some(n);
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                "--no-sound" => opts.no_sound = true,
                "--headless" => opts.headless = true,
                other => {
                    if let Some(val) = other.strip_prefix("--algo-a=") {
                        opts.algo_a = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--algo-b=") {
                        opts.algo_b = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--size=") {
                        opts.size = Some(
                            val.parse()
                                .map_err(|_| format!("Invalid --size value: {val}"))?,
                        );
                    } else if let Some(val) = other.strip_prefix("--distribution=") {
                        opts.distribution =
                            Some(val.parse().map_err(|e| format!("Invalid --distribution: {e}"))?);
                    } else if let Some(val) = other.strip_prefix("--speed=") {
                        opts.speed = Some(
                            val.parse()
                                .map_err(|_| format!("Invalid --speed value: {val}"))?,
                        );
                    } else if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Invocation::Run(opts))
    }
}
