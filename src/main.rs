use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use epcfmt::run::{self, Config, DEFAULT_MAX_ROWS};
use epcfmt::Error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("epcfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reformats Scottish EPC exports into the portal's column layout")
        .arg(
            Arg::new("infile")
                .long("infile")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Input file, read before the folder's files"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Output file. Defaults to the input file when it is the only input, epc.csv otherwise"),
        )
        .arg(
            Arg::new("infolder")
                .long("infolder")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Folder whose files are all read. Defaults to epc when no --infile is given"),
        )
        .arg(
            Arg::new("max-rows")
                .long("max-rows")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("500000")
                .help("Start a new output file once one holds more rows than this, 0 to never split"),
        )
        .get_matches();

    let config = Config::new(
        matches.get_one::<PathBuf>("infile").cloned(),
        matches.get_one::<PathBuf>("infolder").cloned(),
        matches.get_one::<PathBuf>("outfile").cloned(),
        matches
            .get_one::<usize>("max-rows")
            .copied()
            .unwrap_or(DEFAULT_MAX_ROWS),
    );

    match run::run(&config) {
        Ok(summary) => {
            for output in summary.outputs.iter() {
                info!(rows = output.rows, "wrote {}", output.path.display());
            }

            info!(
                files = summary.files_read,
                rows = summary.rows_written,
                "done"
            );
        }
        Err(Error::MissingField { key, record }) => {
            error!("undefined in data!");
            eprintln!("{}", key);
            eprintln!("{}", record);
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
