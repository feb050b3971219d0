//! Property-based tests for table generation and the values-only rendering.

use brightness_lut::config::{Config, OutputMode};
use brightness_lut::lut::LookupTable;
use brightness_lut::render;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// A valid values-only configuration with arbitrary wave parameters.
fn arb_config() -> impl Strategy<Value = Config> {
    (
        1i64..=512,
        -1000.0f64..1000.0,
        -8.0f64..8.0,
        -10.0f64..10.0,
        -500.0f64..500.0,
        -300i64..300,
        0i64..600,
    )
        .prop_map(|(length, amplitude, frequency, phase, shift, lower, span)| {
            let mut config = Config::new(length);
            config.mode = OutputMode::ValuesOnly;
            config.amplitude = amplitude;
            config.frequency = frequency;
            config.phase = phase;
            config.shift = shift;
            config.lower_cutoff = lower;
            config.upper_cutoff = lower + span;
            config
        })
}

/// A declaration-mode configuration with a valid name and type.
fn arb_declaration() -> impl Strategy<Value = Config> {
    (arb_config(), -5i64..40).prop_map(|(mut config, wrap)| {
        config.mode = OutputMode::Declaration;
        config.wrap = wrap;
        config
    })
}

fn rendered(config: &Config) -> String {
    let table = LookupTable::new(config).unwrap();
    let mut out = Vec::new();
    render::render(config, table.as_slice(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn values_only(config: &Config) -> String {
    let table = LookupTable::new(config).unwrap();
    let mut out = Vec::new();
    render::render(config, table.as_slice(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 8192, ..ProptestConfig::default() })]

    /// Every sample lies inside the inclusive cutoff range.
    #[test]
    fn samples_within_cutoffs(config in arb_config()) {
        prop_assert!(config.validate().is_ok());
        let table = LookupTable::new(&config).unwrap();
        for &v in table.as_slice() {
            prop_assert!(v >= config.lower_cutoff && v <= config.upper_cutoff);
        }
    }

    /// A positive length gives exactly that many samples.
    #[test]
    fn table_has_requested_length(config in arb_config()) {
        prop_assert_eq!(LookupTable::new(&config).unwrap().len() as i64, config.length);
    }

    /// Splitting values-only output on `, ` reproduces the samples.
    #[test]
    fn values_only_output_parses_back(config in arb_config()) {
        let text = values_only(&config);
        prop_assert!(text.ends_with('\n'));
        let parsed: Vec<i64> = text
            .trim_end_matches('\n')
            .split(", ")
            .map(|v| v.parse().unwrap())
            .collect();
        let table = LookupTable::new(&config).unwrap();
        prop_assert_eq!(parsed.as_slice(), table.as_slice());
    }

    /// Generating twice from the same configuration is byte-identical.
    #[test]
    fn generation_is_deterministic(config in arb_config()) {
        prop_assert_eq!(values_only(&config), values_only(&config));
    }

    /// With no amplitude every sample is the clamped, rounded shift.
    #[test]
    fn zero_amplitude_gives_clamped_shift(mut config in arb_config()) {
        config.amplitude = 0.0;
        let expected = (config.shift.round_ties_even() as i64)
            .min(config.upper_cutoff)
            .max(config.lower_cutoff);
        let table = LookupTable::new(&config).unwrap();
        prop_assert!(table.as_slice().iter().all(|&v| v == expected));
    }

    /// Non-positive lengths never produce samples.
    #[test]
    fn non_positive_length_is_empty(length in -1000i64..=0) {
        let config = Config::new(length);
        prop_assert!(LookupTable::new(&config).unwrap().is_empty());
    }

    /// With wrapping on, the values sit on ceil(len / wrap) indented lines
    /// between the opening and the closing line.
    #[test]
    fn declaration_wraps_into_indented_lines(config in arb_declaration()) {
        prop_assume!(config.wrap > 0);
        prop_assert!(config.validate().is_ok());
        let text = rendered(&config);
        let lines: Vec<&str> = text.lines().collect();
        let len = config.length;
        let expected = (len + config.wrap - 1) / config.wrap;
        prop_assert_eq!(lines.len() as i64, expected + 3);
        prop_assert_eq!(lines[1], "const byte BRIGHTNESS_LUT{ ");
        prop_assert_eq!(lines[lines.len() - 1], "};");
        let body = &lines[2..lines.len() - 1];
        prop_assert!(body.iter().all(|line| line.starts_with("  ")));
        for (row, line) in body.iter().enumerate() {
            let count = line.trim().trim_end_matches(',').split(", ").count() as i64;
            let full = row + 1 < body.len();
            if full {
                prop_assert_eq!(count, config.wrap);
            } else {
                prop_assert!(count >= 1 && count <= config.wrap);
            }
        }
    }

    /// With wrapping off (zero or negative), the declaration is two lines.
    #[test]
    fn declaration_without_wrapping_is_two_lines(config in arb_declaration()) {
        prop_assume!(config.wrap <= 0);
        let text = rendered(&config);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), 2);
        prop_assert!(lines[1].ends_with("};"), "assertion failed: lines[1].ends_with(\"}};\")");
    }
}
