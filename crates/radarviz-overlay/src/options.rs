#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! Defaults match the stock overlay: a 0.3 wrapper scale and a 35 px drift
//! tolerance. Both can be overridden from the environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `RADARVIZ_SCALE` | [`OverlayOptions::scale`] |
//! | `RADARVIZ_DRIFT_TOLERANCE` | [`OverlayOptions::drift_tolerance`] |

/// Default scale factor applied to the wrapper height.
pub const DEFAULT_SCALE: f64 = 0.3;

/// Default drift tolerance in pixels.
pub const DEFAULT_DRIFT_TOLERANCE: f64 = 35.0;

pub const SCALE_ENV: &str = "RADARVIZ_SCALE";
pub const DRIFT_TOLERANCE_ENV: &str = "RADARVIZ_DRIFT_TOLERANCE";

/// An option value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: expected a finite number")]
pub struct InvalidOption {
    pub key: &'static str,
    pub value: String,
}

/// Display options for the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayOptions {
    /// Wrapper height is `(2 * planet.top + planet.height) * scale`.
    pub scale: f64,
    /// A mirror is flagged when its live left edge is further than this
    /// from the tracked geography.
    pub drift_tolerance: f64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            drift_tolerance: DEFAULT_DRIFT_TOLERANCE,
        }
    }
}

impl OverlayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn drift_tolerance(mut self, tolerance: f64) -> Self {
        self.drift_tolerance = tolerance;
        self
    }

    /// Defaults overridden by the process environment.
    ///
    /// Unparsable values are skipped and the default kept.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        for key in [SCALE_ENV, DRIFT_TOLERANCE_ENV] {
            match read(&lookup, key) {
                Ok(Some(value)) => options.set(key, value),
                Ok(None) => {}
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %_err, "ignoring overlay option");
                }
            }
        }
        options
    }

    /// Strict variant of [`from_lookup`](Self::from_lookup): the first
    /// unparsable value is an error.
    pub fn try_from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, InvalidOption> {
        let mut options = Self::default();
        for key in [SCALE_ENV, DRIFT_TOLERANCE_ENV] {
            if let Some(value) = read(&lookup, key)? {
                options.set(key, value);
            }
        }
        Ok(options)
    }

    fn set(&mut self, key: &str, value: f64) {
        match key {
            SCALE_ENV => self.scale = value,
            DRIFT_TOLERANCE_ENV => self.drift_tolerance = value,
            _ => {}
        }
    }
}

fn read(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<f64>, InvalidOption> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InvalidOption { key, value: raw }),
    }
}
