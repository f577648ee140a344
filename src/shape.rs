//! The shape composition graph: primitive solids, boolean composites, and
//! affine transforms.
//!
//! A [`Shape`] is an owned, acyclic expression tree built bottom-up from
//! literal constants. Nothing here validates geometry; a zero-radius sphere
//! or a degenerate hull is passed through to the renderer uninterpreted.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A node in the solid-geometry expression tree.
///
/// Leaves are primitives (including opaque imported meshes), inner nodes are
/// boolean composites over an ordered child list or single-child transforms.
/// For [`Shape::Difference`] the first child is the base and every following
/// child is subtracted from it; child order is preserved verbatim for all
/// composites, with no deduplication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Sphere centered at the origin.
    Sphere { radius: f32 },
    /// Axis-aligned box; corner at the origin unless `center` is set.
    Cube { size: Vec3, center: bool },
    /// Cylinder (or cone, when the radii differ) along +Z from the origin,
    /// centered on the origin when `center` is set.
    Cylinder {
        radius_bottom: f32,
        radius_top: f32,
        height: f32,
        center: bool,
    },
    /// 2D circle in the XY plane, centered at the origin.
    Circle { radius: f32 },
    /// 2D rectangle in the XY plane; corner at the origin unless `center`.
    Square { size: Vec2, center: bool },
    /// External mesh file, treated as an opaque leaf.
    Import { path: String },
    /// Boolean union of all children.
    Union { children: Vec<Shape> },
    /// First child minus all following children.
    Difference { children: Vec<Shape> },
    /// Boolean intersection of all children.
    Intersection { children: Vec<Shape> },
    /// Convex envelope over all children.
    Hull { children: Vec<Shape> },
    /// Translation by an offset vector.
    Translate { offset: Vec3, child: Box<Shape> },
    /// Euler rotation in degrees, applied X then Y then Z.
    Rotate { degrees: Vec3, child: Box<Shape> },
    /// Reflection across the plane through the origin normal to `axis`.
    Mirror { axis: Vec3, child: Box<Shape> },
    /// Non-uniform scale about the origin.
    Scale { factor: Vec3, child: Box<Shape> },
    /// Extrusion of a 2D child along +Z, tapered by `scale` at the top.
    LinearExtrude {
        height: f32,
        scale: f32,
        child: Box<Shape>,
    },
}

// --- Primitive constructors ---

/// Sphere of the given radius, centered at the origin.
pub fn sphere(radius: f32) -> Shape {
    Shape::Sphere { radius }
}

/// Box with one corner at the origin.
pub fn cube(size: Vec3) -> Shape {
    Shape::Cube {
        size,
        center: false,
    }
}

/// Box centered on the origin.
pub fn cube_centered(size: Vec3) -> Shape {
    Shape::Cube { size, center: true }
}

/// Cylinder along +Z with its base on the XY plane.
pub fn cylinder(radius: f32, height: f32) -> Shape {
    Shape::Cylinder {
        radius_bottom: radius,
        radius_top: radius,
        height,
        center: false,
    }
}

/// Cylinder along +Z centered on the origin.
pub fn cylinder_centered(radius: f32, height: f32) -> Shape {
    Shape::Cylinder {
        radius_bottom: radius,
        radius_top: radius,
        height,
        center: true,
    }
}

/// Conical frustum along +Z with its base on the XY plane.
pub fn cone(radius_bottom: f32, radius_top: f32, height: f32) -> Shape {
    Shape::Cylinder {
        radius_bottom,
        radius_top,
        height,
        center: false,
    }
}

/// Conical frustum along +Z centered on the origin.
pub fn cone_centered(radius_bottom: f32, radius_top: f32, height: f32) -> Shape {
    Shape::Cylinder {
        radius_bottom,
        radius_top,
        height,
        center: true,
    }
}

/// 2D circle in the XY plane.
pub fn circle(radius: f32) -> Shape {
    Shape::Circle { radius }
}

/// 2D rectangle with one corner at the origin.
pub fn square(size: Vec2) -> Shape {
    Shape::Square {
        size,
        center: false,
    }
}

/// External mesh leaf. The file contents are never inspected here.
pub fn import_mesh(path: impl Into<String>) -> Shape {
    Shape::Import { path: path.into() }
}

// --- Boolean composites ---

/// Union over an explicit child list.
pub fn union(children: Vec<Shape>) -> Shape {
    Shape::Union { children }
}

/// First child minus all following children.
pub fn difference(children: Vec<Shape>) -> Shape {
    Shape::Difference { children }
}

/// Intersection over an explicit child list.
pub fn intersection(children: Vec<Shape>) -> Shape {
    Shape::Intersection { children }
}

/// Convex envelope over an explicit child list.
pub fn hull(children: Vec<Shape>) -> Shape {
    Shape::Hull { children }
}

impl Shape {
    // --- Transforms ---

    /// Translates by `offset`.
    pub fn translate(self, offset: Vec3) -> Shape {
        Shape::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Rotates by Euler angles in degrees (X, then Y, then Z).
    pub fn rotate(self, degrees: Vec3) -> Shape {
        Shape::Rotate {
            degrees,
            child: Box::new(self),
        }
    }

    /// Mirrors across the plane through the origin normal to `axis`.
    pub fn mirror(self, axis: Vec3) -> Shape {
        Shape::Mirror {
            axis,
            child: Box::new(self),
        }
    }

    /// Scales about the origin.
    pub fn scale(self, factor: Vec3) -> Shape {
        Shape::Scale {
            factor,
            child: Box::new(self),
        }
    }

    /// Extrudes a 2D shape along +Z, linearly tapering to `scale` at the top.
    pub fn linear_extrude(self, height: f32, scale: f32) -> Shape {
        Shape::LinearExtrude {
            height,
            scale,
            child: Box::new(self),
        }
    }

    // --- Axis shorthands ---

    /// Translates along +Z.
    pub fn up(self, dist: f32) -> Shape {
        self.translate(Vec3::new(0.0, 0.0, dist))
    }

    /// Translates along -Z.
    pub fn down(self, dist: f32) -> Shape {
        self.translate(Vec3::new(0.0, 0.0, -dist))
    }

    /// Translates along -X.
    pub fn left(self, dist: f32) -> Shape {
        self.translate(Vec3::new(-dist, 0.0, 0.0))
    }

    /// Translates along +X.
    pub fn right(self, dist: f32) -> Shape {
        self.translate(Vec3::new(dist, 0.0, 0.0))
    }

    /// Translates along +Y.
    pub fn forward(self, dist: f32) -> Shape {
        self.translate(Vec3::new(0.0, dist, 0.0))
    }

    /// Translates along -Y.
    pub fn back(self, dist: f32) -> Shape {
        self.translate(Vec3::new(0.0, -dist, 0.0))
    }

    /// Union of this shape with its mirror image across `axis`.
    ///
    /// Copies are kept as-is: applying this twice yields four underlying
    /// copies of the original, never two.
    pub fn mirror_copy(self, axis: Vec3) -> Shape {
        let mirrored = self.clone().mirror(axis);
        self + mirrored
    }

    /// Number of primitive leaves (including imports) in this tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Shape::Sphere { .. }
            | Shape::Cube { .. }
            | Shape::Cylinder { .. }
            | Shape::Circle { .. }
            | Shape::Square { .. }
            | Shape::Import { .. } => 1,
            Shape::Union { children }
            | Shape::Difference { children }
            | Shape::Intersection { children }
            | Shape::Hull { children } => children.iter().map(Shape::primitive_count).sum(),
            Shape::Translate { child, .. }
            | Shape::Rotate { child, .. }
            | Shape::Mirror { child, .. }
            | Shape::Scale { child, .. }
            | Shape::LinearExtrude { child, .. } => child.primitive_count(),
        }
    }
}

/// `a + b` is the union of the operands.
impl Add for Shape {
    type Output = Shape;

    fn add(self, rhs: Shape) -> Shape {
        Shape::Union {
            children: vec![self, rhs],
        }
    }
}

/// `a - b` subtracts the right operand from the left.
impl Sub for Shape {
    type Output = Shape;

    fn sub(self, rhs: Shape) -> Shape {
        Shape::Difference {
            children: vec![self, rhs],
        }
    }
}

/// `a * b` is the intersection of the operands.
impl Mul for Shape {
    type Output = Shape;

    fn mul(self, rhs: Shape) -> Shape {
        Shape::Intersection {
            children: vec![self, rhs],
        }
    }
}
