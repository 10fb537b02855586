// The drawing primitives the particle field needs from its host.
// The field is the only caller and never reads anything back.

use crate::color::Color;

pub trait DrawSurface {
    /// Wipe the whole surface
    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, width: f64);
}
