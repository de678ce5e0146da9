#![forbid(unsafe_code)]

//! Environment configuration.
//!
//! [`OverlayOptions::from_env`] is lenient and keeps defaults for values it
//! cannot parse. The functions here fail instead, for hosts that would
//! rather refuse to start than draw with the wrong tolerance.

use radarviz_overlay::OverlayOptions;

use crate::error::Result;

/// Overlay options from the process environment; unparsable values are an
/// [`Error::Config`](crate::Error::Config).
pub fn options_from_env_strict() -> Result<OverlayOptions> {
    options_from_lookup_strict(|key| std::env::var(key).ok())
}

/// Like [`options_from_env_strict`], reading variables through `lookup`.
pub fn options_from_lookup_strict(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<OverlayOptions> {
    let options = OverlayOptions::try_from_lookup(lookup)?;
    tracing::debug!(
        scale = options.scale,
        drift_tolerance = options.drift_tolerance,
        "overlay options loaded"
    );
    Ok(options)
}
