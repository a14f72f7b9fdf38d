//! Rotating-shape touch demo for the browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. A single
//! shape (the tri-colour logo disc or one of two square variants) spins at the
//! centre of the viewport. A finger resting on the shape slows it down, and in
//! the two-finger variant a pinch resizes it. An optional debug overlay samples
//! random points and colours them by whether they fall inside the shape.
//!
//! Everything except [`render`] and the wasm-only `host` module is free of
//! browser dependencies so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, sizes, rectangles, polar conversion, bounding boxes |
//! | [`shape`] | The rotating shape: angle, vertices, containment, resize |
//! | [`touch`] | Two-slot touch tracking |
//! | [`controller`] | Touch-driven speed and pinch-resize policy |
//! | [`clock`] | Timestamp to frame delta conversion |
//! | [`samples`] | Cached random sample points for the debug overlay |
//! | [`config`] | Demo configuration and per-shape presets |
//! | [`engine`] | Frame sequencing ([`engine::EngineCore`]) and the canvas-bound [`engine::Engine`] |
//! | [`render`] | Canvas 2D drawing |
//! | [`consts`] | Shared numeric constants |

pub mod clock;
pub mod config;
pub mod consts;
pub mod controller;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod samples;
pub mod shape;
pub mod touch;

#[cfg(target_arch = "wasm32")]
pub mod host;
