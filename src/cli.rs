use clap::{value_t, App, AppSettings, Arg, ArgMatches};
use thiserror::Error;

use crate::config::{self, Config, ConfigError, OutputMode};

const ABOUT: &str = "\
Generate a brightness lookup table for the Arduino Christmas lights sketch.

This will produce source code for a C/C++ style array containing the brightness values. \
Add the array to the sketch source code.";

const EPILOG: &str = "\
The lookup table is based on a sine wave. The basic formula is:

  y = (a * sin(f * (x - p))) + s

Where a is amplitude, f is frequency, p is phase, and s is vertical shift. \
The frequency indicates how many complete cycles of sine wave will fit into the lookup table. \
The decimal fractions are rounded to the nearest integer in the output (ties to even).";

#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed arguments, or a request for help/version text.
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn integer_validator(st: String) -> Result<(), String> {
    match st.parse::<i64>() {
        Err(_) => { return Err(format!("expected an integer, got `{}`", st)); }
        Ok(_)  => { return Ok(()); }
    }
}

fn real_validator(st: String) -> Result<(), String> {
    match st.parse::<f64>() {
        Err(_) => { return Err(format!("expected a number, got `{}`", st)); }
        Ok(_)  => { return Ok(()); }
    }
}

fn option(name: &'static str, short: &str, help: &'static str) -> Arg<'static, 'static> {
    return Arg::with_name(name)
        .short(short)
        .long(name)
        .help(help)
        .takes_value(true);
}

/// The command line interface. Exposed so tests can parse without spawning.
pub fn build_cli() -> App<'static, 'static> {
    return App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .after_help(EPILOG)
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("length")
             .help("Number of entries in the lookup table.")
             .required(true)
             .index(1)
             .validator(integer_validator)
             )
        .arg(option("data-type", "d", "Data type to specify in the generated code.")
             .default_value(config::DEFAULT_DATA_TYPE)
             )
        .arg(option("name", "n", "Name of the array variable in the generated code.")
             .default_value(config::DEFAULT_NAME)
             )
        .arg(option("amplitude", "a", "Amplitude of the sine wave to generate.")
             .default_value("255.0")
             .validator(real_validator)
             )
        .arg(option("frequency", "f", "Number of complete sine waves to fit into the lookup table.")
             .default_value("1.0")
             .validator(real_validator)
             )
        .arg(option("phase", "p", "Horizontal offset of the sine wave in radians. For example, pi will offset it by half a cycle.")
             .default_value("0.0")
             .validator(real_validator)
             )
        .arg(option("shift", "s", "Vertical offset of the sine wave.")
             .default_value("0.0")
             .validator(real_validator)
             )
        .arg(option("lower-cutoff", "l", "Minimum value in the output lookup table. Lower values will be clamped to this limit.")
             .default_value("0")
             .validator(integer_validator)
             )
        .arg(option("upper-cutoff", "u", "Maximum value allowed in the output lookup table. Higher values will be clamped to this limit.")
             .default_value("255")
             .validator(integer_validator)
             )
        .arg(option("wrap", "w", "Number of values per line in the generated code. Set this to 0 (or less) to disable wrapping. Wrapping is ignored if --values-only is specified.")
             .default_value("20")
             .validator(integer_validator)
             )
        .arg(Arg::with_name("values-only")
             .short("v")
             .long("values-only")
             .help("If this flag is specified, the output will only contain comma-separated values. It will skip other code generation.")
             );
}

/// Build the configuration from parsed matches. Validators have already
/// checked that every value parses, but `value_t!` gives the typed value.
pub fn config_from_matches(matches: &ArgMatches) -> Result<Config, clap::Error> {
    let mode = if matches.is_present("values-only") {
        OutputMode::ValuesOnly
    } else {
        OutputMode::Declaration
    };
    return Ok(Config {
        length: value_t!(matches, "length", i64)?,
        data_type: value_t!(matches, "data-type", String)?,
        name: value_t!(matches, "name", String)?,
        amplitude: value_t!(matches, "amplitude", f64)?,
        frequency: value_t!(matches, "frequency", f64)?,
        phase: value_t!(matches, "phase", f64)?,
        shift: value_t!(matches, "shift", f64)?,
        lower_cutoff: value_t!(matches, "lower-cutoff", i64)?,
        upper_cutoff: value_t!(matches, "upper-cutoff", i64)?,
        wrap: value_t!(matches, "wrap", i64)?,
        mode: mode,
    });
}

/// Parse and validate. Nothing is computed or written unless this succeeds.
pub fn parse_from<I, T>(args: I) -> Result<Config, CliError>
    where I: IntoIterator<Item = T>, T: Into<std::ffi::OsString> + Clone
{
    let matches = build_cli().get_matches_from_safe(args)?;
    let config = config_from_matches(&matches)?;
    config.validate()?;
    return Ok(config);
}
