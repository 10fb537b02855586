// Fixed tuning constants for the particle background and the page effects.
// Nothing here is configurable at runtime.

use crate::color::Color;

/// Number of particles kept alive in the background field
pub const PARTICLE_COUNT: usize = 60;

/// Hue shared by particles and connectors, alpha is set per draw call
pub const FIELD_COLOR: Color = Color { r: 0, g: 242, b: 255, a: 1.0 };

// Respawn distributions, each range is [low, high)
pub const SIZE_RANGE: (f64, f64) = (0.5, 2.5);
pub const SPEED_RANGE: (f64, f64) = (-0.25, 0.25);
pub const OPACITY_RANGE: (f64, f64) = (0.1, 0.6);

/// Particles closer than this get a connector line
pub const CONNECT_DISTANCE: f64 = 150.0;
/// Connector alpha at zero distance, fades linearly to 0 at CONNECT_DISTANCE
pub const CONNECT_MAX_ALPHA: f64 = 0.1;
pub const CONNECT_LINE_WIDTH: f64 = 0.5;

// Nav bar
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const NAV_COMPACT_PADDING: &str = "1rem 0";
pub const NAV_COMPACT_BACKGROUND: &str = "rgba(2, 6, 23, 0.95)";
pub const NAV_RELAXED_PADDING: &str = "1.5rem 0";
pub const NAV_RELAXED_BACKGROUND: &str = "rgba(2, 6, 23, 0.8)";

/// Class toggled on revealed sections, ribbon items and category panels
pub const ACTIVE_CLASS: &str = "active";

/// Fraction of a `.reveal` element that must be visible before it activates
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Terminal log readout
pub const LOG_ROTATE_MS: i32 = 4000;
pub const LOG_FLASH_MS: i32 = 200;
pub const LOG_FLASH_OPACITY: &str = "1";
pub const LOG_RESTING_OPACITY: &str = "0.6";
pub const LOG_ENTRIES: [&str; 7] = [
    "NEURAL_TRAILS_SYNCING...",
    "HANDSHAKE_ESTABLISHED [IPV6]",
    "ANALYZING_SYSTEM_PACKETS...",
    "HEARTBEAT_STABLE: 60BPM",
    "DECRYPTING_IO_STREAM...",
    "UPDATING_CORE_SCHEMATICS...",
    "GATHERING_ENVIRONMENTAL_INTEL...",
];
