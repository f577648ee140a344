//! Parametric stand-ins for catalog hardware.
//!
//! The frame subtracts these to carve clearance voids, so only the envelope
//! dimensions matter; thread and race detail stays with the real part.

use crate::shape::{Shape, cylinder};

/// M3 machine screw pointing +Z: 1.5 mm shaft radius with a pan head
/// below the origin.
pub fn m3_screw(length: f32) -> Shape {
    let head = cylinder(2.8, 2.0).down(2.0);
    head + cylinder(1.5, length)
}

/// 625 ball bearing: 16 mm OD, 5 mm bore, 5 mm wide, along +Z.
pub fn bearing_625() -> Shape {
    // Bore cut slightly long so the subtraction pierces both faces.
    cylinder(8.0, 5.0) - cylinder(2.5, 5.2).down(0.1)
}
