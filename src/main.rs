use std::io::{self, Write};
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use chess_rules::console::{self, ConsoleOptions};

/// Writes log records to stderr so stdout stays a clean command stream.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                io::stderr(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let mut options = ConsoleOptions::default();
    let mut level = LevelFilter::Warn;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => level = LevelFilter::Debug,
            "--glyphs" => options.glyphs = true,
            "--autoshow" => options.autoshow = true,
            other => {
                eprintln!("unknown argument '{other}'");
                eprintln!("usage: chess_rules [-v|--verbose] [--glyphs] [--autoshow]");
                return ExitCode::FAILURE;
            }
        }
    }

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match console::run(stdin.lock(), stdout.lock(), options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("i/o error: {e}");
            ExitCode::FAILURE
        }
    }
}
