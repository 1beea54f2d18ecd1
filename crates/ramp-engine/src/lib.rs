//! Ramp engine crate.
//!
//! Geometry, paint, draw stream and input plumbing shared by the UI layer.
//! Nothing here knows about widgets; hosts translate their window events into
//! `input` types and consume the `scene::DrawList` with their own renderer.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
