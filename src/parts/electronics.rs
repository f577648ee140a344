//! Off-the-shelf electronics kept in the model for fit checks.

use crate::shape::{Shape, cube, import_mesh};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Radio receiver brick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transmitter {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Transmitter {
    fn default() -> Self {
        Self {
            length: 26.0,
            width: 18.0,
            height: 3.0,
        }
    }
}

impl Transmitter {
    pub fn solid(&self) -> Shape {
        cube(Vec3::new(self.length, self.width, self.height))
    }
}

/// Drive ESC, imported as an opaque vendor mesh.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriveEsc {
    pub mesh: String,
}

impl Default for DriveEsc {
    fn default() -> Self {
        Self {
            mesh: "tinyESC_v2.stl".to_string(),
        }
    }
}

impl DriveEsc {
    pub fn solid(&self) -> Shape {
        import_mesh(self.mesh.clone()).rotate(Vec3::new(90.0, 0.0, 0.0))
    }
}
