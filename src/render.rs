//! Rendering: draws the scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of [`EngineCore`] and produces pixels; it does
//! not mutate any state.
//!
//! Layers, bottom first: the shape, the border, the sample-point overlay.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::CORE_RADIUS_RATIO;
use crate::engine::EngineCore;
use crate::geometry::{Point, Rect};
use crate::samples::SamplePoints;
use crate::shape::{LogoSegment, RotatingShape, ShapeKind};

/// Fill colours of the three logo wedges, in segment order.
const LOGO_SEGMENT_COLORS: [&str; 3] = ["#DE2126", "#F7CA10", "#4CB748"];
const LOGO_RING_COLOR: &str = "white";
const LOGO_CORE_COLOR: &str = "#2D78BA";

const OUTLINE_COLOR: &str = "#000";
const SAMPLE_INSIDE_COLOR: &str = "#f0f";
const SAMPLE_OUTSIDE_COLOR: &str = "#00f";

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport.width, core.viewport.height);

    match core.shape.kind() {
        ShapeKind::Logo => draw_logo(ctx, &core.shape)?,
        ShapeKind::Square | ShapeKind::Diamond => draw_outline(ctx, &core.shape.vertices()),
    }

    if let Some(rect) = core.border_rect() {
        draw_border(ctx, rect);
    }

    if let Some(samples) = &core.samples {
        draw_samples(ctx, samples, &core.shape);
    }

    Ok(())
}

// =============================================================
// Shapes
// =============================================================

fn draw_logo(ctx: &CanvasRenderingContext2d, shape: &RotatingShape) -> Result<(), JsValue> {
    for (segment, color) in shape.segments().iter().zip(LOGO_SEGMENT_COLORS) {
        draw_segment(ctx, shape, segment, color)?;
    }
    fill_disc(ctx, shape.center, shape.inner_radius(), LOGO_RING_COLOR)?;
    fill_disc(ctx, shape.center, shape.inner_radius() * CORE_RADIUS_RATIO, LOGO_CORE_COLOR)
}

fn draw_segment(
    ctx: &CanvasRenderingContext2d,
    shape: &RotatingShape,
    segment: &LogoSegment,
    color: &str,
) -> Result<(), JsValue> {
    let [first, rest @ ..] = &segment.points;
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.arc(shape.center.x, shape.center.y, shape.radius(), segment.arc_start, segment.arc_end)?;
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}

fn fill_disc(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}

/// Stroke a closed polygon through `points`.
fn draw_outline(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(OUTLINE_COLOR);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.stroke();
}

// =============================================================
// Border / overlay
// =============================================================

fn draw_border(ctx: &CanvasRenderingContext2d, rect: Rect) {
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(OUTLINE_COLOR);
    ctx.stroke_rect(rect.min.x, rect.min.y, rect.width(), rect.height());
}

fn draw_samples(ctx: &CanvasRenderingContext2d, samples: &SamplePoints, shape: &RotatingShape) {
    ctx.set_line_width(1.0);
    for (p, inside) in samples.classify(shape) {
        ctx.set_stroke_style_str(if inside { SAMPLE_INSIDE_COLOR } else { SAMPLE_OUTSIDE_COLOR });
        ctx.stroke_rect(p.x, p.y, 1.0, 1.0);
    }
}
