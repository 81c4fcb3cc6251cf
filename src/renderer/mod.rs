//! WebGPU rendering module
//!
//! The mini-game field is drawn as flat-coloured triangles; the rest of the
//! page is plain DOM.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{FieldView, build_scene};
pub use vertex::Vertex;
