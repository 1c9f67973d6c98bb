//! Airbrush dab compositor
//!
//! This crate places soft dabs of paint with sub-pixel accuracy and blends
//! them onto a raster device at a low fixed opacity:
//! - [`paintop::AirbrushOp`] - the per-sample paint operation
//! - [`brush`] - mask, image and piped image brushes
//! - [`painter::Painter`] - session state: device, brush, cached dab, dirty region
//! - [`device`] - paint devices and their owning canvas
//! - [`surface`] - CPU RGBA surface and per-pixel compositing
//! - [`dirty`] - dirty region accumulation and tiling
//! - [`validation`] - coordinate splitting and buffer validation

pub mod brush;
pub mod constants;
pub mod dab;
pub mod device;
pub mod dirty;
pub mod geometry;
pub mod painter;
pub mod paintop;
pub mod surface;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use dab::*;
pub use device::*;
pub use dirty::*;
pub use geometry::*;
pub use painter::*;
pub use paintop::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
