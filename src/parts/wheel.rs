//! Drive wheel.

use crate::shape::{Shape, cylinder_centered};
use serde::{Deserialize, Serialize};

/// Foam drive wheel, mounted on the gear motor shaft.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wheel {
    /// Tread width in mm.
    pub width: f32,
    /// Outer diameter in mm.
    pub diameter: f32,
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            width: 12.7,    // 0.5 inch
            diameter: 38.1, // 1.5 inch
        }
    }
}

impl Wheel {
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// The wheel as a centered cylinder along +Z.
    pub fn solid(&self) -> Shape {
        cylinder_centered(self.radius(), self.width)
    }
}
