//! The rotating shape: angular state, vertex layout and hit-testing.
//!
//! One type covers every demo variant. A shape is a fixed template of
//! [`Vertex`] offsets turned by the current `angle` around `center`, plus a
//! [`Containment`] policy deciding how points are hit-tested against it.
//! Vertex positions are always derived from the current state on demand.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

use serde::{Deserialize, Serialize};

use crate::consts::{INNER_RADIUS_RATIO, LOGO_SEGMENT_SPAN, MIN_RADIUS};
use crate::geometry::{GeometryError, Point, Rect, Size, bounding_rect, to_cartesian, wrap_angle};

/// Which demo shape is being spun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Tri-colour disc with an inner ring of vertices.
    #[default]
    Logo,
    /// Square whose corners sit on the diagonals (edges axis-aligned at angle 0).
    Square,
    /// Square whose corners sit on the axes (a diamond at angle 0).
    Diamond,
}

/// Which radius a vertex is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Outer,
    Inner,
}

/// One corner of the shape template, relative to the shape's angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Angular offset in radians added to the shape's current angle.
    pub offset: f64,
    pub ring: Ring,
}

impl Vertex {
    #[must_use]
    pub fn outer(offset: f64) -> Self {
        Self { offset, ring: Ring::Outer }
    }

    #[must_use]
    pub fn inner(offset: f64) -> Self {
        Self { offset, ring: Ring::Inner }
    }
}

/// How [`RotatingShape::contains_point`] decides membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Inside when within `radius` of the centre.
    Radial,
    /// Inside when the point, turned back into the shape's unrotated frame,
    /// falls in the bounding box of the unrotated vertices.
    RotatedBounds {
        /// Reject points outside the world-space bounding box of the current
        /// vertices before doing the rotated-frame check.
        quick_reject: bool,
    },
}

/// One coloured wedge of the logo, ready to be filled.
///
/// The outline runs through `points` in order, then along the outer circle
/// from `arc_start` to `arc_end` (clockwise on screen) and closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoSegment {
    pub points: [Point; 4],
    pub arc_start: f64,
    pub arc_end: f64,
}

/// A shape spinning at constant angular velocity around the viewport centre.
#[derive(Debug, Clone)]
pub struct RotatingShape {
    /// Rotation pivot; reset to the viewport midpoint every tick.
    pub center: Point,
    /// Radians per millisecond.
    pub angle_velocity: f64,
    angle: f64,
    radius: f64,
    inner_radius: f64,
    vertices: Vec<Vertex>,
    containment: Containment,
    kind: ShapeKind,
}

/// Vertex template for one logo wedge: out, in, in, out.
fn logo_segment_template() -> [Vertex; 4] {
    [
        Vertex::outer(-FRAC_PI_6),
        Vertex::inner(-FRAC_PI_2),
        Vertex::inner(-7.0 * PI / 6.0),
        Vertex::outer(-5.0 * PI / 6.0),
    ]
}

fn logo_vertices() -> Vec<Vertex> {
    let template = logo_segment_template();
    (0..3)
        .flat_map(|s| {
            let turn = f64::from(s) * LOGO_SEGMENT_SPAN;
            template
                .iter()
                .map(move |v| Vertex { offset: v.offset + turn, ring: v.ring })
        })
        .collect()
}

fn square_vertices() -> Vec<Vertex> {
    [FRAC_PI_4, 3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4, 7.0 * FRAC_PI_4]
        .into_iter()
        .map(Vertex::outer)
        .collect()
}

fn diamond_vertices() -> Vec<Vertex> {
    [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]
        .into_iter()
        .map(Vertex::outer)
        .collect()
}

impl RotatingShape {
    /// Build one of the demo presets.
    ///
    /// The logo always uses [`Containment::Radial`]; the squares use
    /// [`Containment::RotatedBounds`] with the given `quick_reject`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `radius` is not a positive
    /// finite number.
    pub fn from_kind(kind: ShapeKind, radius: f64, base_speed: f64, quick_reject: bool) -> Result<Self, GeometryError> {
        let (vertices, containment) = match kind {
            ShapeKind::Logo => (logo_vertices(), Containment::Radial),
            ShapeKind::Square => (square_vertices(), Containment::RotatedBounds { quick_reject }),
            ShapeKind::Diamond => (diamond_vertices(), Containment::RotatedBounds { quick_reject }),
        };
        Self::with_vertices(kind, vertices, radius, base_speed, containment)
    }

    /// Build a shape from an explicit vertex template.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `vertices` is empty or
    /// `radius` is not a positive finite number.
    pub fn with_vertices(
        kind: ShapeKind,
        vertices: Vec<Vertex>,
        radius: f64,
        base_speed: f64,
        containment: Containment,
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::InvalidArgument("shape needs at least one vertex".into()));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidArgument(format!("radius must be positive, got {radius}")));
        }
        Ok(Self {
            center: Point::default(),
            angle_velocity: base_speed,
            angle: 0.0,
            radius,
            inner_radius: radius * INNER_RADIUS_RATIO,
            vertices,
            containment,
            kind,
        })
    }

    // --- Accessors ---

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn containment(&self) -> Containment {
        self.containment
    }

    /// Current rotation in `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the rotation, wrapping it into `[0, 2π)`.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = wrap_angle(angle);
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Always `0.45 ×` [`Self::radius`].
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    #[must_use]
    pub fn template(&self) -> &[Vertex] {
        &self.vertices
    }

    // --- Animation ---

    /// Recentre on `viewport` and advance the angle by `angle_velocity * dt`.
    ///
    /// `dt` is in milliseconds. Negative or non-finite deltas advance nothing.
    pub fn tick(&mut self, dt: f64, viewport: Size) {
        self.center = viewport.center();
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.angle = wrap_angle(self.angle + self.angle_velocity * dt);
    }

    /// Set the outer radius and recompute the inner radius with it.
    ///
    /// Non-finite values are ignored; anything below [`MIN_RADIUS`] is clamped.
    pub fn resize(&mut self, new_radius: f64) {
        if !new_radius.is_finite() {
            log::warn!("ignoring non-finite resize to {new_radius}");
            return;
        }
        let radius = new_radius.max(MIN_RADIUS);
        self.radius = radius;
        self.inner_radius = radius * INNER_RADIUS_RATIO;
    }

    // --- Geometry ---

    fn ring_radius(&self, ring: Ring) -> f64 {
        match ring {
            Ring::Outer => self.radius,
            Ring::Inner => self.inner_radius,
        }
    }

    /// World positions of the template vertices at the current angle, in
    /// template order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.vertices
            .iter()
            .map(|v| to_cartesian(self.center, self.ring_radius(v.ring), self.angle + v.offset))
            .collect()
    }

    /// Template vertices at angle 0 around the origin.
    fn local_vertices(&self) -> Vec<Point> {
        self.vertices
            .iter()
            .map(|v| to_cartesian(Point::default(), self.ring_radius(v.ring), v.offset))
            .collect()
    }

    /// World-space bounding box of the current vertices.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed shape; the template is non-empty.
    pub fn bounds(&self) -> Result<Rect, GeometryError> {
        bounding_rect(&self.vertices())
    }

    #[must_use]
    pub fn distance_from_center(&self, p: Point) -> f64 {
        self.center.distance_to(p)
    }

    /// Whether `p` is inside the shape under its containment policy.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        match self.containment {
            Containment::Radial => self.distance_from_center(p) <= self.radius,
            Containment::RotatedBounds { quick_reject } => {
                if quick_reject {
                    let Ok(world) = self.bounds() else {
                        return false;
                    };
                    if !world.contains(p) {
                        return false;
                    }
                }
                let Ok(local_bounds) = bounding_rect(&self.local_vertices()) else {
                    return false;
                };
                let local = p.offset_from(self.center).rotated(-self.angle);
                local_bounds.contains(local)
            }
        }
    }

    /// The three logo wedges at the current angle; empty for other kinds.
    #[must_use]
    pub fn segments(&self) -> Vec<LogoSegment> {
        if self.kind != ShapeKind::Logo {
            return Vec::new();
        }
        let points = self.vertices();
        points
            .chunks_exact(4)
            .zip(self.vertices.chunks_exact(4))
            .map(|(p, v)| LogoSegment {
                points: [p[0], p[1], p[2], p[3]],
                arc_start: self.angle + v[3].offset,
                arc_end: self.angle + v[0].offset,
            })
            .collect()
    }
}
