use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::clock::FrameClock;
use crate::config::{ConfigError, DemoConfig};
use crate::controller::SpeedController;
use crate::geometry::{Point, Rect, Size, border_rect};
use crate::render;
use crate::samples::SamplePoints;
use crate::shape::RotatingShape;
use crate::touch::{Contact, TouchEffect, TouchId, TouchState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// The spinning scene: shape, fingers, speed policy, clock and overlay.
///
/// Holds no browser handles; [`Engine`] pairs it with a canvas for drawing.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub shape: RotatingShape,
    pub touch: TouchState,
    pub controller: SpeedController,
    pub clock: FrameClock,
    pub samples: Option<SamplePoints>,
    pub border_margin: Option<f64>,
    pub viewport: Size,
}

impl EngineCore {
    /// Build the scene described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: &DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = RotatingShape::from_kind(config.shape, config.radius, config.base_speed, config.quick_reject)?;
        let controller = SpeedController::new(&shape, config.slowdown, config.pinch_resize);
        let samples = (config.sample_points > 0).then(|| SamplePoints::new(config.sample_points, config.seed));
        log::debug!("engine configured for {:?} (radius {}, speed {})", config.shape, config.radius, config.base_speed);
        Ok(Self {
            shape,
            touch: TouchState::new(),
            controller,
            clock: FrameClock::new(config.max_frame_dt_ms),
            samples,
            border_margin: config.border_margin,
            viewport: Size::default(),
        })
    }

    // --- Viewport / frame ---

    /// Update the viewport dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width.max(0.0), height.max(0.0));
    }

    /// Advance one frame at host time `now_ms`.
    ///
    /// Order matters: the shape ticks first, then the controller reads the
    /// touch state and may change speed or radius for the next frame.
    /// Returns the `dt` that was applied.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let dt = self.clock.advance(now_ms);
        self.shape.tick(dt, self.viewport);
        if let Some(samples) = self.samples.as_mut() {
            samples.refresh(self.viewport);
        }
        self.controller.update(&self.touch, &mut self.shape);
        dt
    }

    // --- Touch input ---

    pub fn on_touch_start(&mut self, id: TouchId, position: Point) {
        self.touch.on_start(id, position);
    }

    pub fn on_touch_move(&mut self, contacts: &[Contact]) -> TouchEffect {
        self.touch.on_move(contacts)
    }

    pub fn on_touch_end(&mut self) {
        self.touch.on_end();
    }

    // --- Queries ---

    /// Border rectangle for the current viewport, if a border is configured.
    #[must_use]
    pub fn border_rect(&self) -> Option<Rect> {
        self.border_margin.map(|m| border_rect(self.viewport, m))
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or `config` is invalid.
    pub fn new(canvas: HtmlCanvasElement, config: &DemoConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let core = EngineCore::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { canvas, ctx, core })
    }

    // --- Viewport ---

    /// Resize the canvas backing store and the core viewport.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.set_viewport(f64::from(width), f64::from(height));
    }

    // --- Delegated input ---

    pub fn on_touch_start(&mut self, id: TouchId, position: Point) {
        self.core.on_touch_start(id, position);
    }

    pub fn on_touch_move(&mut self, contacts: &[Contact]) -> TouchEffect {
        self.core.on_touch_move(contacts)
    }

    pub fn on_touch_end(&mut self) {
        self.core.on_touch_end();
    }

    // --- Frame ---

    /// Advance the core one frame and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.core.frame(now_ms);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core)
    }
}
