//! Rendering collaborator
//!
//! The simulation draws through [`RenderSurface`], a small 2D-canvas style
//! interface. Hosts implement it over their real canvas; [`CommandRecorder`]
//! records the calls for tests and headless runs.

pub mod recorder;
pub mod shapes;

pub use recorder::{CommandRecorder, DrawCommand};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r,g,b)` form
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SHIP: Color = Color::rgb(250, 250, 250);
    pub const BULLET: Color = Color::rgb(250, 250, 250);
    pub const ASTEROID: Color = Color::rgb(200, 0, 0);
}

/// Immediate-mode 2D drawing surface
pub trait RenderSurface {
    /// Drawable area in pixels; the arena takes this size
    fn size(&self) -> Vec2;

    fn clear(&mut self, width: f32, height: f32);

    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
}
