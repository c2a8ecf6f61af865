//! Ring-and-triangle color wheel for a browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the color wheel: translating raw DOM pointer events into
//! selection changes, hit-testing the hue ring and the inscribed shade
//! triangle, repainting the canvas, and reading the picked pixels back out.
//! The host layer is responsible only for wiring DOM events to the
//! [`engine::Picker`] and rendering the resulting swatches.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level picker and testable [`engine::PickerCore`] |
//! | [`geometry`] | Ring/triangle math and pointer hit-testing |
//! | [`color`] | RGB sample type and CSS formatting |
//! | [`input`] | Drag-state machine types |
//! | [`render`] | Scene painting on the 2D context |
//! | [`sampler`] | Single-pixel readback from the painted canvas |
//! | [`consts`] | Shared numeric constants (ring thickness, handle radius, etc.) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod render;
pub mod sampler;
