//! Parameters for one lookup table: the wave, the clamp range and the shape
//! of the generated text.

use thiserror::Error;

pub const DEFAULT_DATA_TYPE: &str = "byte";
pub const DEFAULT_NAME: &str = "BRIGHTNESS_LUT";
pub const DEFAULT_AMPLITUDE: f64 = 255.0;
pub const DEFAULT_FREQUENCY: f64 = 1.0;
pub const DEFAULT_PHASE: f64 = 0.0;
pub const DEFAULT_SHIFT: f64 = 0.0;
pub const DEFAULT_LOWER_CUTOFF: i64 = 0;
pub const DEFAULT_UPPER_CUTOFF: i64 = 255;
pub const DEFAULT_WRAP: i64 = 20;

/// Scope resolution token allowed between segments of a type name.
const SCOPE_SEPARATOR: &str = "::";

/// What the renderer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A `_LENGTH` constant followed by the array declaration.
    Declaration,
    /// Comma separated values on one line, nothing else.
    ValuesOnly,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--data-type must specify a valid C++ type identifier, got `{0}`")]
    InvalidDataType(String),

    #[error("--name must specify a valid C++ variable name, got `{0}`")]
    InvalidName(String),

    #[error("--lower-cutoff ({lower}) must not be greater than --upper-cutoff ({upper})")]
    InvertedCutoffs { lower: i64, upper: i64 },

    #[error("--{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Built once from the command line and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of entries. Zero or negative gives an empty table.
    pub length: i64,
    pub data_type: String,
    pub name: String,
    pub amplitude: f64,
    /// Complete cycles across the table.
    pub frequency: f64,
    /// Horizontal offset in radians.
    pub phase: f64,
    pub shift: f64,
    pub lower_cutoff: i64,
    pub upper_cutoff: i64,
    /// Values per line in a declaration; 0 or less disables wrapping.
    pub wrap: i64,
    pub mode: OutputMode,
}

impl Config {

    /// A configuration for a table of `length` entries with every other
    /// parameter at its default.
    pub fn new(length: i64) -> Config {
        return Config {
            length: length,
            data_type: String::from(DEFAULT_DATA_TYPE),
            name: String::from(DEFAULT_NAME),
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            phase: DEFAULT_PHASE,
            shift: DEFAULT_SHIFT,
            lower_cutoff: DEFAULT_LOWER_CUTOFF,
            upper_cutoff: DEFAULT_UPPER_CUTOFF,
            wrap: DEFAULT_WRAP,
            mode: OutputMode::Declaration,
        };
    }

    pub fn values_only(&self) -> bool {
        return self.mode == OutputMode::ValuesOnly;
    }

    /// Checks the identifiers (declaration mode only), the cutoff ordering
    /// and that every real parameter is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.values_only() {
            if !is_scoped_identifier(&self.data_type) {
                return Err(ConfigError::InvalidDataType(self.data_type.clone()));
            }
            if !is_identifier(&self.name) {
                return Err(ConfigError::InvalidName(self.name.clone()));
            }
        }

        if self.lower_cutoff > self.upper_cutoff {
            return Err(ConfigError::InvertedCutoffs {
                lower: self.lower_cutoff,
                upper: self.upper_cutoff,
            });
        }

        let reals = [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("shift", self.shift),
        ];
        for &(option, value) in reals.iter() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(option));
            }
        }

        return Ok(());
    }
}

fn is_identifier_start(c: char) -> bool {
    return c.is_ascii_alphabetic() || c == '_';
}

fn is_identifier_continue(c: char) -> bool {
    return c.is_ascii_alphanumeric() || c == '_';
}

/// A bare identifier: letter or underscore, then letters, digits or
/// underscores. `blah` and `foo123` pass, `hello world!` does not.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_continue),
        _ => false,
    }
}

/// An identifier optionally scoped by `::`, e.g. `int`, `::int8_t` or
/// `std::uint16_t`. Empty segments such as in `blah::::foo` are rejected.
pub fn is_scoped_identifier(token: &str) -> bool {
    let unrooted = token.strip_prefix(SCOPE_SEPARATOR).unwrap_or(token);
    return unrooted.split(SCOPE_SEPARATOR).all(is_identifier);
}
