//! Output target capability detection.
//!
//! A [`CapabilitySet`] tells the resolver what color fidelity the current
//! output target supports. Applications that know their backend construct one
//! directly ([`CapabilitySet::full`] / [`CapabilitySet::base_only`]);
//! [`CapabilitySet::detect`] probes the environment for everyone else.
//!
//! # Auto Detection
//!
//! Detection checks, in order: `NO_COLOR` (set and non-empty → base colors
//! only), `COLORTERM` (`truecolor`/`24bit` → custom color), and `TERM`
//! (`256color` or `truecolor` substrings → custom color). Terminals lie about
//! this routinely, so the result is a conservative guess, not a guarantee.
//!
//! Use [`set_capability_detector`] to override detection for testing:
//!
//! ```rust
//! use gamut::{set_capability_detector, CapabilitySet};
//!
//! set_capability_detector(|| CapabilitySet::full());
//! assert!(CapabilitySet::detect().custom_color);
//! ```

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// What color fidelity the current output target supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet {
    /// Whether non-base colors (low-res and hex) are renderable. When false,
    /// only the 16 named ANSI colors are usable.
    pub custom_color: bool,
}

impl CapabilitySet {
    /// A target that renders every supported color form.
    pub fn full() -> Self {
        Self { custom_color: true }
    }

    /// A target restricted to the 16 base colors.
    pub fn base_only() -> Self {
        Self {
            custom_color: false,
        }
    }

    /// Detects the current target's capabilities.
    ///
    /// Uses the configured detector (default: environment probe). The
    /// detector can be overridden via [`set_capability_detector`] for testing.
    pub fn detect() -> Self {
        let detector = DETECTOR.lock().unwrap();
        (*detector)()
    }
}

type CapabilityDetector = fn() -> CapabilitySet;

static DETECTOR: Lazy<Mutex<CapabilityDetector>> = Lazy::new(|| Mutex::new(probe_environment));

/// Overrides the detector used by [`CapabilitySet::detect`].
///
/// Useful for testing or when an application resolves capabilities through
/// its own backend instead of the environment.
pub fn set_capability_detector(detector: CapabilityDetector) {
    let mut guard = DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Environment probe: `NO_COLOR` wins, then `COLORTERM`, then `TERM`.
fn probe_environment() -> CapabilitySet {
    if std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()) {
        return CapabilitySet::base_only();
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit") {
            return CapabilitySet::full();
        }
    }

    match std::env::var("TERM") {
        Ok(term) if term.contains("256color") || term.contains("truecolor") => {
            CapabilitySet::full()
        }
        _ => CapabilitySet::base_only(),
    }
}
