// NaturalSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use tracing::trace;

/// Multiplier between each suffix.
const BASE: u128 = 1024;

/// Suffixes for sizes of one kilobyte and up.
const SUFFIXES: &[&str] = &[
    "kB",
    "MB",
    "GB",
    "TB",
    "PB",
    "EB",
    "ZB",
    "YB",
];

/// `NaturalSize` renders a byte count as a human friendly string, such as
/// `1.5 kB`.
pub trait NaturalSize {
    /// Return `self` as a human friendly size.
    fn natural_size(&self) -> String;
}

impl NaturalSize for u128 {
    /// Sizes below 1024 are printed as a whole number of bytes. Anything
    /// larger is scaled to one decimal place against the first suffix whose
    /// next step up exceeds the value.
    ///
    /// There's no suffix beyond `YB`, so values of `1024^9` bytes and above
    /// are still reported in `YB`, giving numbers of `1024.0` or more.
    fn natural_size(&self) -> String {
        let value = *self;

        trace!("natural_size: value {}", value);

        if value == 1 {
            return "1 byte".into();
        }

        if value < BASE {
            return format!("{} bytes", value);
        }

        // Start at YB, which is what we fall back to if nothing else fits.
        let mut suffix = SUFFIXES[SUFFIXES.len() - 1];
        let mut unit   = BASE.pow(SUFFIXES.len() as u32 + 1);

        for (i, s) in SUFFIXES.iter().enumerate() {
            let candidate = BASE.pow(i as u32 + 2);

            if value < candidate {
                suffix = *s;
                unit   = candidate;
                break;
            }
        }

        let scaled = (value as f64) * (BASE as f64) / (unit as f64);

        format!("{:.1} {}", scaled, suffix)
    }
}

impl NaturalSize for u64 {
    fn natural_size(&self) -> String {
        u128::from(*self).natural_size()
    }
}
