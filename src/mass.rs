//! Printed-mass estimation over the shape graph.
//!
//! One-pound combat robots build against a hard weight limit, so parts get a
//! coarse mass check long before slicing. Solid leaves are measured through
//! `bevy_heavy`; booleans are approximated (a difference or intersection
//! counts its base child only, a hull sums its generators), so figures are
//! budget guidance, not a slicer report.

use crate::shape::Shape;
use bevy_heavy::ComputeMassProperties3d;
use bevy_math::primitives::{Cuboid, Cylinder, Sphere};
use glam::Vec3;
use std::f32::consts::PI;

/// Competition weight limit for the one-pound class, in grams.
pub const WEIGHT_LIMIT_G: f32 = 453.6;

/// Solid PLA, in g/mm^3.
pub const PLA_DENSITY: f32 = 0.001_24;

/// Solid PETG, in g/mm^3.
pub const PETG_DENSITY: f32 = 0.001_27;

/// A type-erased wrapper so we can call [`ComputeMassProperties3d`] on any
/// measurable leaf.
#[derive(Clone, Copy, Debug)]
enum SolidPrimitive {
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Sphere(Sphere),
}

impl ComputeMassProperties3d for SolidPrimitive {
    fn mass(&self, density: f32) -> f32 {
        match self {
            Self::Cuboid(s) => s.mass(density),
            Self::Cylinder(s) => s.mass(density),
            Self::Sphere(s) => s.mass(density),
        }
    }

    fn unit_principal_angular_inertia(&self) -> Vec3 {
        match self {
            Self::Cuboid(s) => s.unit_principal_angular_inertia(),
            Self::Cylinder(s) => s.unit_principal_angular_inertia(),
            Self::Sphere(s) => s.unit_principal_angular_inertia(),
        }
    }

    fn center_of_mass(&self) -> Vec3 {
        match self {
            Self::Cuboid(s) => s.center_of_mass(),
            Self::Cylinder(s) => s.center_of_mass(),
            Self::Sphere(s) => s.center_of_mass(),
        }
    }
}

fn leaf_primitive(shape: &Shape) -> Option<SolidPrimitive> {
    match shape {
        Shape::Sphere { radius } => Some(SolidPrimitive::Sphere(Sphere::new(*radius))),
        Shape::Cube { size, .. } => Some(SolidPrimitive::Cuboid(Cuboid {
            half_size: *size / 2.0,
        })),
        // Cones are measured as a cylinder of the mean radius.
        Shape::Cylinder {
            radius_bottom,
            radius_top,
            height,
            ..
        } => Some(SolidPrimitive::Cylinder(Cylinder::new(
            (radius_bottom + radius_top) / 2.0,
            *height,
        ))),
        _ => None,
    }
}

/// Cross-section area of a 2D subtree, for extrusion volume. Differences and
/// intersections count their base child only, like [`estimate_mass`].
fn profile_area(shape: &Shape) -> f32 {
    match shape {
        Shape::Circle { radius } => PI * radius * radius,
        Shape::Square { size, .. } => size.x * size.y,
        Shape::Union { children } | Shape::Hull { children } => {
            children.iter().map(profile_area).sum()
        }
        Shape::Difference { children } | Shape::Intersection { children } => {
            children.first().map(profile_area).unwrap_or(0.0)
        }
        Shape::Scale { factor, child } => profile_area(child) * (factor.x * factor.y).abs(),
        Shape::Translate { child, .. }
        | Shape::Rotate { child, .. }
        | Shape::Mirror { child, .. } => profile_area(child),
        _ => 0.0,
    }
}

/// Estimated mass of `shape` in grams, given a density in g/mm^3.
///
/// Unions and hulls sum their children; differences and intersections count
/// their base child only, so subtractive geometry reads heavy. Imported
/// meshes and bare 2D profiles contribute zero. A linear extrusion uses the
/// profile area integrated over its taper.
pub fn estimate_mass(shape: &Shape, density: f32) -> f32 {
    if let Some(primitive) = leaf_primitive(shape) {
        return primitive.mass(density);
    }
    match shape {
        Shape::Circle { .. } | Shape::Square { .. } | Shape::Import { .. } => 0.0,
        Shape::Union { children } | Shape::Hull { children } => children
            .iter()
            .map(|child| estimate_mass(child, density))
            .sum(),
        Shape::Difference { children } | Shape::Intersection { children } => children
            .first()
            .map(|child| estimate_mass(child, density))
            .unwrap_or(0.0),
        Shape::Scale { factor, child } => {
            estimate_mass(child, density) * (factor.x * factor.y * factor.z).abs()
        }
        Shape::Translate { child, .. }
        | Shape::Rotate { child, .. }
        | Shape::Mirror { child, .. } => estimate_mass(child, density),
        Shape::LinearExtrude {
            height,
            scale,
            child,
        } => {
            // Area scales quadratically along a linear taper, so the exact
            // volume factor is (1 + s + s^2) / 3.
            let taper = (1.0 + scale + scale * scale) / 3.0;
            profile_area(child) * height * taper * density
        }
        // Leaves handled above.
        Shape::Sphere { .. } | Shape::Cube { .. } | Shape::Cylinder { .. } => 0.0,
    }
}
