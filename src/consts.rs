//! Shared numeric constants for the spinner crate.

use std::f64::consts::PI;

// ── Math ────────────────────────────────────────────────────────

/// One full turn in radians.
pub const TAU: f64 = 2.0 * PI;

/// Angular width of one logo segment (120°).
pub const LOGO_SEGMENT_SPAN: f64 = TAU / 3.0;

// ── Shape geometry ──────────────────────────────────────────────

/// Inner-disc radius as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.45;

/// Blue core disc radius as a fraction of the inner radius.
pub const CORE_RADIUS_RATIO: f64 = 0.85;

/// Smallest radius a resize can produce.
pub const MIN_RADIUS: f64 = 1.0;

// ── Presets ─────────────────────────────────────────────────────

/// Logo outer radius in CSS pixels.
pub const LOGO_RADIUS: f64 = 200.0;

/// Logo angular velocity in radians per millisecond.
pub const LOGO_BASE_SPEED: f64 = 0.0015;

/// Square circumradius in CSS pixels.
pub const SQUARE_RADIUS: f64 = 100.0;

/// Square angular velocity in radians per millisecond.
pub const SQUARE_BASE_SPEED: f64 = 0.001;

/// Speed divisor while one finger rests on a square.
pub const SINGLE_FINGER_SLOWDOWN: f64 = 5.0;

/// Speed divisor while a finger rests on the two-finger (logo) variant.
pub const TWO_FINGER_SLOWDOWN: f64 = 10.0;

/// Inset of the border rectangle from the viewport edge.
pub const BORDER_MARGIN: f64 = 3.0;

/// Largest frame delta accepted by the clock, in milliseconds.
///
/// A tab that was hidden for a while resumes with a single long frame; clamping
/// keeps the shape from jumping.
pub const MAX_FRAME_DT_MS: f64 = 100.0;

/// Default seed for the sample-point generator.
pub const DEFAULT_SAMPLE_SEED: u64 = 0x5eed;

/// Upper bound on debug sample points; the whole set is allocated per resize.
pub const MAX_SAMPLE_POINTS: usize = 1_000_000;
