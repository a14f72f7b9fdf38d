//! Touch-driven speed and pinch-resize policy.
//!
//! Re-evaluated from scratch every frame after the shape has ticked:
//!
//! 1. no finger down: base speed;
//! 2. primary finger on the shape: reduced speed, otherwise base speed;
//! 3. two fingers down with either on the shape (pinch variant only): the
//!    radius becomes the larger of the two finger distances from the centre.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::shape::RotatingShape;
use crate::touch::TouchState;

/// Which of the two speeds the shape is running at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedState {
    #[default]
    Normal,
    Reduced,
}

#[derive(Debug, Clone)]
pub struct SpeedController {
    base_speed: f64,
    reduced_speed: f64,
    pinch_resize: bool,
    state: SpeedState,
}

impl SpeedController {
    /// Capture `shape`'s current velocity as the base speed.
    ///
    /// `slowdown` divides the base speed while a finger rests on the shape.
    #[must_use]
    pub fn new(shape: &RotatingShape, slowdown: f64, pinch_resize: bool) -> Self {
        let base_speed = shape.angle_velocity;
        Self {
            base_speed,
            reduced_speed: base_speed / slowdown,
            pinch_resize,
            state: SpeedState::Normal,
        }
    }

    #[must_use]
    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    #[must_use]
    pub fn reduced_speed(&self) -> f64 {
        self.reduced_speed
    }

    #[must_use]
    pub fn pinch_resize(&self) -> bool {
        self.pinch_resize
    }

    /// Speed chosen on the last [`Self::update`].
    #[must_use]
    pub fn state(&self) -> SpeedState {
        self.state
    }

    /// Apply the policy to `shape` for the current touch state.
    pub fn update(&mut self, touch: &TouchState, shape: &mut RotatingShape) {
        let Some(primary) = touch.primary() else {
            self.set_state(SpeedState::Normal, shape);
            return;
        };

        let primary_inside = shape.contains_point(primary);
        let next = if primary_inside { SpeedState::Reduced } else { SpeedState::Normal };
        self.set_state(next, shape);

        if !self.pinch_resize {
            return;
        }
        let Some(secondary) = touch.secondary() else {
            return;
        };
        if primary_inside || shape.contains_point(secondary) {
            let radius = shape
                .distance_from_center(primary)
                .max(shape.distance_from_center(secondary));
            log::debug!("pinch resize {:.1} -> {radius:.1}", shape.radius());
            shape.resize(radius);
        }
    }

    fn set_state(&mut self, next: SpeedState, shape: &mut RotatingShape) {
        if next != self.state {
            log::debug!("speed {:?} -> {next:?}", self.state);
        }
        self.state = next;
        shape.angle_velocity = match next {
            SpeedState::Normal => self.base_speed,
            SpeedState::Reduced => self.reduced_speed,
        };
    }
}
