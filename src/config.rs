//! Demo configuration: which shape to spin and how it reacts to touch.
//!
//! The host builds a [`DemoConfig`] from an optional JSON block embedded in
//! the page, then applies URL query overrides (`?shape=square&points=10000`).
//! Both sources may be partial. In either one a `shape` selects that shape's
//! preset, and the remaining keys override individual fields.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{
    BORDER_MARGIN, DEFAULT_SAMPLE_SEED, LOGO_BASE_SPEED, LOGO_RADIUS, MAX_FRAME_DT_MS, MAX_SAMPLE_POINTS,
    SINGLE_FINGER_SLOWDOWN, SQUARE_BASE_SPEED, SQUARE_RADIUS, TWO_FINGER_SLOWDOWN,
};
use crate::geometry::GeometryError;
use crate::shape::ShapeKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bad query parameter: {key}={value}")]
    Query { key: String, value: String },
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoConfig {
    pub shape: ShapeKind,
    /// Outer radius in CSS pixels.
    pub radius: f64,
    /// Angular velocity in radians per millisecond.
    pub base_speed: f64,
    /// Divisor applied to `base_speed` while a finger rests on the shape.
    pub slowdown: f64,
    /// Whether a two-finger pinch resizes the shape.
    pub pinch_resize: bool,
    /// Cheap world-space rejection before the rotated-frame hit test.
    pub quick_reject: bool,
    /// Border inset in CSS pixels; `None` draws no border.
    pub border_margin: Option<f64>,
    /// Number of debug sample points; 0 disables the overlay.
    pub sample_points: usize,
    pub max_frame_dt_ms: f64,
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::for_shape(ShapeKind::Logo)
    }
}

impl DemoConfig {
    /// Preset for `shape`: the logo spins faster and supports pinch-resize.
    #[must_use]
    pub fn for_shape(shape: ShapeKind) -> Self {
        let common = Self {
            shape,
            radius: LOGO_RADIUS,
            base_speed: LOGO_BASE_SPEED,
            slowdown: TWO_FINGER_SLOWDOWN,
            pinch_resize: true,
            quick_reject: false,
            border_margin: Some(BORDER_MARGIN),
            sample_points: 0,
            max_frame_dt_ms: MAX_FRAME_DT_MS,
            seed: DEFAULT_SAMPLE_SEED,
        };
        match shape {
            ShapeKind::Logo => common,
            ShapeKind::Square | ShapeKind::Diamond => Self {
                radius: SQUARE_RADIUS,
                base_speed: SQUARE_BASE_SPEED,
                slowdown: SINGLE_FINGER_SLOWDOWN,
                pinch_resize: false,
                quick_reject: true,
                ..common
            },
        }
    }

    /// Parse a (possibly partial) JSON object.
    ///
    /// Missing fields come from the preset of the given `shape`, or from the
    /// logo preset when no shape is named.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let patch: ConfigPatch = serde_json::from_str(raw)?;
        Ok(patch.resolve())
    }

    /// Apply `key=value` pairs from a URL query string.
    ///
    /// A `shape` key first resets every field to that shape's preset; the
    /// remaining keys then override individual fields. Unknown keys are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Query`] if a known key has an unparsable value.
    pub fn apply_query(&mut self, query: &str) -> Result<(), ConfigError> {
        let pairs: Vec<(&str, &str)> = query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| part.split_once('=').unwrap_or((part, "")))
            .collect();

        if let Some((key, value)) = pairs.iter().find(|(key, _)| *key == "shape") {
            let shape = parse_shape(value).ok_or_else(|| bad(key, value))?;
            *self = Self::for_shape(shape);
        }

        for (key, value) in pairs {
            match key {
                "shape" => {}
                "radius" => self.radius = parse_num(key, value)?,
                "speed" => self.base_speed = parse_num(key, value)?,
                "slowdown" => self.slowdown = parse_num(key, value)?,
                "max_dt" => self.max_frame_dt_ms = parse_num(key, value)?,
                "pinch" => self.pinch_resize = parse_flag(key, value)?,
                "quick_reject" => self.quick_reject = parse_flag(key, value)?,
                "border" => {
                    self.border_margin = match value {
                        "none" | "off" => None,
                        _ => Some(parse_num(key, value)?),
                    };
                }
                "points" => self.sample_points = value.parse().map_err(|_| bad(key, value))?,
                "seed" => self.seed = value.parse().map_err(|_| bad(key, value))?,
                _ => log::debug!("ignoring query parameter {key}"),
            }
        }
        Ok(())
    }

    /// Check the numeric fields are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius", format!("must be positive, got {}", self.radius)));
        }
        if !self.base_speed.is_finite() {
            return Err(invalid("base_speed", format!("must be finite, got {}", self.base_speed)));
        }
        if !self.slowdown.is_finite() || self.slowdown <= 0.0 {
            return Err(invalid("slowdown", format!("must be positive, got {}", self.slowdown)));
        }
        if !self.max_frame_dt_ms.is_finite() || self.max_frame_dt_ms <= 0.0 {
            return Err(invalid("max_frame_dt_ms", format!("must be positive, got {}", self.max_frame_dt_ms)));
        }
        if self.sample_points > MAX_SAMPLE_POINTS {
            return Err(invalid(
                "sample_points",
                format!("at most {MAX_SAMPLE_POINTS}, got {}", self.sample_points),
            ));
        }
        if let Some(margin) = self.border_margin {
            if !margin.is_finite() || margin < 0.0 {
                return Err(invalid("border_margin", format!("must be non-negative, got {margin}")));
            }
        }
        Ok(())
    }
}

/// JSON form of [`DemoConfig`]: every field optional so a named shape can
/// pick the preset before the rest are overlaid.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigPatch {
    shape: Option<ShapeKind>,
    radius: Option<f64>,
    base_speed: Option<f64>,
    slowdown: Option<f64>,
    pinch_resize: Option<bool>,
    quick_reject: Option<bool>,
    /// Outer `None`: key absent. `Some(None)`: explicit `null`, no border.
    #[serde(deserialize_with = "present")]
    border_margin: Option<Option<f64>>,
    sample_points: Option<usize>,
    max_frame_dt_ms: Option<f64>,
    seed: Option<u64>,
}

impl ConfigPatch {
    fn resolve(self) -> DemoConfig {
        let base = DemoConfig::for_shape(self.shape.unwrap_or_default());
        DemoConfig {
            shape: base.shape,
            radius: self.radius.unwrap_or(base.radius),
            base_speed: self.base_speed.unwrap_or(base.base_speed),
            slowdown: self.slowdown.unwrap_or(base.slowdown),
            pinch_resize: self.pinch_resize.unwrap_or(base.pinch_resize),
            quick_reject: self.quick_reject.unwrap_or(base.quick_reject),
            border_margin: self.border_margin.unwrap_or(base.border_margin),
            sample_points: self.sample_points.unwrap_or(base.sample_points),
            max_frame_dt_ms: self.max_frame_dt_ms.unwrap_or(base.max_frame_dt_ms),
            seed: self.seed.unwrap_or(base.seed),
        }
    }
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

fn bad(key: &str, value: &str) -> ConfigError {
    ConfigError::Query { key: key.to_owned(), value: value.to_owned() }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn parse_shape(raw: &str) -> Option<ShapeKind> {
    match raw.to_ascii_lowercase().as_str() {
        "logo" => Some(ShapeKind::Logo),
        "square" => Some(ShapeKind::Square),
        "diamond" => Some(ShapeKind::Diamond),
        _ => None,
    }
}

fn parse_num(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| bad(key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(bad(key, value)),
    }
}
