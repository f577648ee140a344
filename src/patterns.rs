//! Derived geometry helpers: repeating and parametric sub-patterns built by
//! laying out transformed copies of a base shape.

use crate::shape::{Shape, circle, cube, hull, union};
use glam::Vec3;

/// Equilateral triangle with rounded corners, as the convex hull of three
/// circles of radius `r` on the corners of a triangle with side `l`.
///
/// The result is shifted by half the circumradius along -X so that lattice
/// cells interlock when mirrored.
pub fn rounded_triangle(r: f32, l: f32) -> Shape {
    let h = l * 3.0_f32.sqrt() / 2.0;
    let big_r = l * 3.0_f32.sqrt() / 3.0;
    hull(vec![
        circle(r),
        circle(r).translate(Vec3::new(h, l / 2.0, 0.0)),
        circle(r).translate(Vec3::new(h, -l / 2.0, 0.0)),
    ])
    .left(big_r / 2.0)
}

/// Grid of `num_x * num_y` rounded triangles for truss infill.
///
/// Cells where `(i + j)` is odd are mirrored across X so the triangles
/// tessellate in a checkerboard; upright cells are nudged +1 along X to
/// clear the flipped neighbors. The returned union has exactly
/// `num_x * num_y` children.
pub fn triangle_lattice(r: f32, l: f32, num_x: usize, num_y: usize) -> Shape {
    let tri = rounded_triangle(r, l);
    let big_r = l * 3.0_f32.sqrt() / 3.0;
    let mut cells = Vec::with_capacity(num_x * num_y);
    for i in 0..num_y {
        for j in 0..num_x {
            let fi = i as f32;
            let fj = j as f32;
            let x = l * fj + 2.0 * fj * r + big_r * fj;
            let y = l * fi + fi * r;
            if (i + j) % 2 == 0 {
                cells.push(tri.clone().translate(Vec3::new(x + 1.0, y, 0.0)));
            } else {
                cells.push(
                    tri.clone()
                        .mirror(Vec3::new(1.0, 0.0, 0.0))
                        .translate(Vec3::new(x, y, 0.0)),
                );
            }
        }
    }
    union(cells)
}

/// Surface-of-revolution approximation: the union of copies of `shape`
/// rotated about Y through `0, step, 2*step, ..` strictly below `end_angle`
/// degrees.
pub fn sweep_about_y(shape: &Shape, end_angle: u32, step_angle: u32) -> Shape {
    let copies = (0..end_angle)
        .step_by(step_angle as usize)
        .map(|a| {
            shape
                .clone()
                .rotate(Vec3::new(0.0, a as f32, 0.0))
        })
        .collect();
    union(copies)
}

/// Keeps the half-space y >= `y` for section views.
pub fn cutaway_xz(shape: Shape, y: f32) -> Shape {
    shape * cube(Vec3::splat(10000.0)).translate(Vec3::new(-5000.0, y, -5000.0))
}

/// Keeps the half-space z <= `z` for section views.
pub fn cutaway_xy(shape: Shape, z: f32) -> Shape {
    shape * cube(Vec3::splat(10000.0)).translate(Vec3::new(-5000.0, -5000.0, z - 10000.0))
}
