//! Text renderings of a computed table.
//!
//! - Values only: one line, values separated by `, `.
//! - Declaration: a `<NAME>_LENGTH` constant and the array itself, e.g.
//!
//!   ```text
//!   const int BRIGHTNESS_LUT_LENGTH{ 4 };
//!   const byte BRIGHTNESS_LUT{
//!     0, 255, 0, 0
//!   };
//!   ```
//!
//! Nothing here rounds or validates; the samples are written verbatim.

use std::convert::TryFrom;
use std::io::Write;

use crate::config::{Config, OutputMode};

const SEPARATOR: &str = ", ";
const INDENT: &str = "  ";

/// Write the table in whichever form the configuration asks for.
pub fn render<W: Write>(config: &Config, samples: &[i64], out: &mut W) -> std::io::Result<()> {
    match config.mode {
        OutputMode::ValuesOnly => { return render_values(samples, out); }
        OutputMode::Declaration => { return render_declaration(config, samples, out); }
    }
}

pub fn render_values<W: Write>(samples: &[i64], out: &mut W) -> std::io::Result<()> {
    for (index, value) in samples.iter().enumerate() {
        if index != 0 {
            write!(out, "{}", SEPARATOR)?;
        }
        write!(out, "{}", value)?;
    }
    writeln!(out)?;
    return Ok(());
}

/// The length constant reports `config.length` as given, even when it is not
/// positive and the array is empty.
pub fn render_declaration<W: Write>(
    config: &Config,
    samples: &[i64],
    out: &mut W
) -> std::io::Result<()> {
    writeln!(out, "const int {}_LENGTH{{ {} }};", config.name, config.length)?;
    write!(out, "const {} {}{{ ", config.data_type, config.name)?;

    let wrap = wrap_width(config.wrap);
    for (index, value) in samples.iter().enumerate() {
        if index > 0 {
            write!(out, "{}", SEPARATOR)?;
        }
        // Also breaks before the first value.
        if let Some(width) = wrap {
            if index % width == 0 {
                writeln!(out)?;
                write!(out, "{}", INDENT)?;
            }
        }
        write!(out, "{}", value)?;
    }

    if wrap.is_some() {
        writeln!(out)?;
    }
    writeln!(out, "}};")?;
    return Ok(());
}

/// Values per line, or `None` when wrapping is off (zero or negative).
fn wrap_width(wrap: i64) -> Option<usize> {
    match usize::try_from(wrap) {
        Ok(width) if width > 0 => Some(width),
        _ => None,
    }
}
