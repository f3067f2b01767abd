//! Pointer capability check used to gate tool interactions on touch-only devices.

use std::env;

/// Environment variable reporting the number of simultaneous touch points.
///
/// Used by headless front ends that have no platform query of their own.
pub const TOUCH_POINTS_ENV: &str = "SKETCHKIT_TOUCH_POINTS";

/// Pointer capability signals reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerCapabilities {
    /// The platform delivers touch events
    pub touch_events: bool,
    /// Maximum simultaneous touch points (standard query)
    pub max_touch_points: u32,
    /// Maximum simultaneous touch points (legacy vendor query)
    pub ms_max_touch_points: u32,
}

impl PointerCapabilities {
    /// Reads capabilities from [`TOUCH_POINTS_ENV`]. Unset or malformed means no touch.
    pub fn from_env() -> Self {
        let max_touch_points = match env::var(TOUCH_POINTS_ENV) {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {}='{}'", TOUCH_POINTS_ENV, value);
                0
            }),
            Err(_) => 0,
        };

        Self {
            touch_events: false,
            max_touch_points,
            ms_max_touch_points: 0,
        }
    }

    /// True if any signal indicates touch input.
    pub fn is_touch_enabled(&self) -> bool {
        self.touch_events || self.max_touch_points > 0 || self.ms_max_touch_points > 0
    }
}

/// Whether drawing tools should be disabled for this device.
///
/// Any touch capability counts as unsupported.
pub fn is_unsupported_device(caps: &PointerCapabilities) -> bool {
    caps.is_touch_enabled()
}
