//! Color model shared between configuration and renderers.

pub mod color;

pub use color::Color;
