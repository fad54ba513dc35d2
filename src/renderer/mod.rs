//! Canvas 2D rendering
//!
//! Immediate-mode drawing of the whole scene each frame. Browser only; the
//! simulation itself never touches this module.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
