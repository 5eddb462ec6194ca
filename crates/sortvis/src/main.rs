#![forbid(unsafe_code)]

//! SortVis binary entry point.

mod app;
mod bell;
mod cli;
mod headless;
mod render;
mod settings;
mod terminal;

use std::fs::File;
use std::io;
use std::sync::Mutex;

use sortvis_core::Comparison;
use sortvis_core::tone::{ToneBackend, TraceBackend};
use tracing_subscriber::EnvFilter;

/// Install the log subscriber.
///
/// Interactive mode owns the screen, so it only logs when `--log-file` is
/// given. Headless mode logs to stderr by default.
fn init_logging(opts: &cli::Opts) -> io::Result<()> {
    let filter = EnvFilter::try_from_env("SORTVIS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = &opts.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if opts.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = init_logging(&opts) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    let config = match settings::resolve(&opts) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Headless runs log tones; interactive runs ring the bell.
    let backend: Box<dyn ToneBackend> = if opts.headless {
        Box::new(TraceBackend)
    } else {
        Box::new(bell::BellBackend)
    };
    let mut session = Comparison::new(config).with_tone_backend(backend);

    let result = if opts.headless {
        headless::run(&mut session, &mut io::stdout().lock()).map(|_| ())
    } else {
        app::run(session)
    };

    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
