use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Env;

use uds2csv::{asc, writer};

/// Decode UDS/ISO-TP traffic from a Vector ASC bus trace into a CSV table.
#[derive(Debug, Parser)]
#[command(name = "uds2csv", version)]
struct Args {
    /// Input trace file
    input: PathBuf,

    /// Output CSV file; defaults to the input path with a `.csv` extension
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args, ExitCode> {
    // `?` and `-?` are accepted help spellings
    let argv = std::env::args().map(|arg| {
        if arg == "?" || arg == "-?" {
            "--help".to_string()
        } else {
            arg
        }
    });

    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                Err(ExitCode::SUCCESS)
            }
            // a bare invocation shows usage and is not a failure
            ErrorKind::MissingRequiredArgument => {
                let _ = err.print();
                Err(ExitCode::SUCCESS)
            }
            _ => {
                let _ = err.print();
                Err(ExitCode::FAILURE)
            }
        },
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let output: PathBuf = args
        .output
        .unwrap_or_else(|| args.input.with_extension("csv"));

    let log = match asc::parse::from_file(&args.input) {
        Ok(log) => log,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(start) = log.absolute_time.value {
        log::info!("trace start: {}", start.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    if let Err(err) = writer::save(&log, &output) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    log::info!(
        "log analysis completed: {} record(s) written to '{}'",
        log.records.len(),
        output.display()
    );

    ExitCode::SUCCESS
}
