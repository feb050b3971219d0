use std::collections::TryReserveError;
use std::convert::TryFrom;
use std::f64::consts::PI;

use thiserror::Error;

use crate::config::Config;

const QUARTER_ANGLES: [&str; 4] = ["0°", "90°", "180°", "270°"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("a table of {length} entries cannot be allocated: {source}")]
    TooLarge {
        length: i64,
        #[source]
        source: TryReserveError,
    },

    #[error("a table of {0} entries cannot be addressed on this platform")]
    Unaddressable(i64),
}

/// A sample logged as a sanity check. `angle` names the point on the wave and
/// is only set when the index falls exactly on a quarter of one unshifted
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanityPoint {
    pub index: usize,
    pub value: i64,
    pub angle: Option<&'static str>,
}

/// One cycle of y = amplitude * sin(frequency * (x - phase)) + shift sampled
/// across the table, rounded and clamped to the configured cutoffs.
pub struct LookupTable {
    array: Box<[i64]>,
    lower_cutoff: i64,
    upper_cutoff: i64,
    /// True for frequency 1 and phase 0, where table position is wave angle.
    unit_cycle: bool,
}

impl LookupTable {

    /// Compute every sample. A length of zero or less gives an empty table.
    /// The storage is reserved up front, so a length too large to allocate
    /// is an error rather than an abort.
    pub fn new(config: &Config) -> Result<LookupTable, TableError> {
        let samples = if config.length > 0 {
            match usize::try_from(config.length) {
                Ok(samples) => samples,
                Err(_) => { return Err(TableError::Unaddressable(config.length)); }
            }
        } else {
            0
        };

        let mut vec: Vec<i64> = Vec::new();
        if let Err(source) = vec.try_reserve_exact(samples) {
            return Err(TableError::TooLarge { length: config.length, source: source });
        }
        for i in 0..samples {
            vec.push(sample(config, i));
        }
        return Ok(LookupTable {
            array: vec.into_boxed_slice(),
            lower_cutoff: config.lower_cutoff,
            upper_cutoff: config.upper_cutoff,
            unit_cycle: config.frequency == 1.0 && config.phase == 0.0,
        });
    }

    pub fn len(&self) -> usize {
        return self.array.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.array.is_empty();
    }

    pub fn at(&self, index: usize) -> Option<i64> {
        return self.array.get(index).copied();
    }

    pub fn as_slice(&self) -> &[i64] {
        return &self.array;
    }

    /// Number of samples sitting exactly on either cutoff.
    pub fn pinned(&self) -> usize {
        return self.array
            .iter()
            .filter(|&&v| v == self.lower_cutoff || v == self.upper_cutoff)
            .count();
    }

    /// True when the table holds a single repeated value, i.e. the clamp or
    /// the parameters flattened the wave completely.
    pub fn is_flat(&self) -> bool {
        match self.array.first() {
            None => false,
            Some(first) => self.array.iter().all(|v| v == first),
        }
    }

    /// The samples at the start, quarter, half and three quarter positions of
    /// the table, or nothing for tables shorter than four entries.
    pub fn sanity_points(&self) -> Vec<SanityPoint> {
        let len = self.len();
        if len < 4 {
            return Vec::new();
        }
        let exact_quarters = self.unit_cycle && len % 4 == 0;
        let mut points = Vec::with_capacity(4);
        for (quarter, angle) in QUARTER_ANGLES.iter().enumerate() {
            let index = len * quarter / 4;
            points.push(SanityPoint {
                index: index,
                value: self.array[index],
                angle: if exact_quarters { Some(*angle) } else { None },
            });
        }
        return points;
    }
}

/// The sample at `index`. The angle spreads exactly one cycle (2π) over the
/// table length, so `index` must be below a positive `config.length`.
pub fn sample(config: &Config, index: usize) -> i64 {
    let x = (index as f64 / config.length as f64) * 2.0 * PI;
    let y = config.amplitude * (config.frequency * (x - config.phase)).sin() + config.shift;
    return clamp(round(y), config.lower_cutoff, config.upper_cutoff);
}

/// Nearest integer, ties to even. Out of range values saturate.
pub fn round(y: f64) -> i64 {
    return y.round_ties_even() as i64;
}

pub fn clamp(value: i64, lower: i64, upper: i64) -> i64 {
    return value.min(upper).max(lower);
}
