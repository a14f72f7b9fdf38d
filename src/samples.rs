//! Random sample points for the containment debug overlay.
//!
//! The set is cached per viewport size and only regenerated when the size
//! changes, so the same points can be re-classified against the spinning shape
//! every frame.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Point, Size};
use crate::shape::RotatingShape;

#[derive(Debug, Clone)]
pub struct SamplePoints {
    count: usize,
    size: Option<Size>,
    points: Vec<Point>,
    rng: StdRng,
}

impl SamplePoints {
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, size: None, points: Vec::new(), rng: StdRng::seed_from_u64(seed) }
    }

    /// Make sure the cached points cover `viewport`.
    ///
    /// Returns `true` if the points were regenerated.
    pub fn refresh(&mut self, viewport: Size) -> bool {
        if self.size == Some(viewport) {
            return false;
        }
        let rng = &mut self.rng;
        self.points = (0..self.count)
            .map(|_| {
                let x = (rng.random::<f64>() * viewport.width).round();
                let y = (rng.random::<f64>() * viewport.height).round();
                Point::new(x, y)
            })
            .collect();
        self.size = Some(viewport);
        log::debug!(
            "regenerated {} sample points for {}x{}",
            self.count,
            viewport.width,
            viewport.height
        );
        true
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Each cached point paired with whether `shape` contains it.
    pub fn classify<'a>(&'a self, shape: &'a RotatingShape) -> impl Iterator<Item = (Point, bool)> + 'a {
        self.points.iter().map(move |&p| (p, shape.contains_point(p)))
    }
}
