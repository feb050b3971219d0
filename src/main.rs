use std::io::{BufWriter, Write};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use brightness_lut::cli::{self, CliError};
use brightness_lut::config::Config;
use brightness_lut::exit::{EXIT_GENERIC_FAIL, EXIT_INVALID_CONFIG, EXIT_SUCCESS};
use brightness_lut::lut::LookupTable;
use brightness_lut::render;

/// Diagnostics go to stderr so stdout carries only the generated text.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn sanity_check(config: &Config, table: &LookupTable) {
    for point in table.sanity_points() {
        match point.angle {
            Some(angle) => debug!(angle, index = point.index, value = point.value, "sanity check sample"),
            None => debug!(index = point.index, value = point.value, "sanity check sample"),
        }
    }
    let len = table.len();
    debug!(pinned = table.pinned(), len, "samples on a cutoff");
    if table.is_flat() && len > 1 {
        warn!(
            lower = config.lower_cutoff,
            upper = config.upper_cutoff,
            "every sample has the same value, the table carries no wave"
        );
    }
}

fn write_table(config: &Config, table: &LookupTable) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::render(config, table.as_slice(), &mut out)?;
    out.flush()?;
    return Ok(());
}

fn run() -> i32 {
    let config = match cli::parse_from(std::env::args_os()) {
        Ok(config) => config,
        // Prints help/version to stdout with status 0, anything else to
        // stderr with status 1.
        Err(CliError::Args(err)) => { err.exit(); }
        Err(CliError::Config(err)) => {
            eprintln!("error: {}", err);
            return EXIT_INVALID_CONFIG;
        }
    };
    debug!(?config, "generating lookup table");

    let table = match LookupTable::new(&config) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {}", err);
            return EXIT_INVALID_CONFIG;
        }
    };
    sanity_check(&config, &table);

    match write_table(&config, &table) {
        Err(err) => {
            eprintln!("error: failed to write lookup table: {}", err);
            return EXIT_GENERIC_FAIL;
        }
        Ok(()) => { return EXIT_SUCCESS; }
    }
}

fn main() {
    init_logging();
    std::process::exit(run());
}
