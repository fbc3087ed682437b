//! Proplist CLI - convert a property listing CSV into JSON
//!
//! ```bash
//! proplist properties.csv                   # print JSON to stdout
//! proplist properties.csv properties.json   # write JSON, print "Wrote properties.json"
//! proplist -vv properties.csv out.json      # with debug logging on stderr
//! ```

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use proplist::logging::{init_logging, LogConfig};
use proplist::pipeline::{run, ConvertOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "proplist", version)]
#[command(about = "Convert a property listing CSV into a normalized JSON array", long_about = None)]
struct Cli {
    /// Input CSV file
    input: PathBuf,

    /// Output JSON file (default: stdout)
    output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
    };

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
