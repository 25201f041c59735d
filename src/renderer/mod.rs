//! Rendering module
//!
//! Composes an ordered draw list per frame. Surface blitting, image loading and
//! filtering belong to the backend that consumes it.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, SpriteAsset, compose, vertex_bytes};
pub use vertex::Vertex;
