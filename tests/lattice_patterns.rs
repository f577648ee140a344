// tests/lattice_patterns.rs
use approx::assert_relative_eq;
use glam::Vec3;
use invictus_cad::{Shape, rounded_triangle, sphere, sweep_about_y, triangle_lattice};

#[test]
fn rounded_triangle_is_a_recentered_hull_of_three_circles() {
    let tri = rounded_triangle(2.0, 9.0);

    // Outermost: the -X recentering by half the circumradius.
    let Shape::Translate { offset, child } = &tri else {
        panic!("expected translate, got {tri:?}");
    };
    let big_r = 9.0 * 3.0_f32.sqrt() / 3.0;
    assert_relative_eq!(offset.x, -big_r / 2.0);
    assert_eq!(offset.y, 0.0);

    // Inside: a hull over exactly three corner circles.
    let Shape::Hull { children } = child.as_ref() else {
        panic!("expected hull, got {child:?}");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(tri.primitive_count(), 3);
}

#[test]
fn lattice_has_one_cell_per_grid_position() {
    // The frame truss uses a 2 x 9 fill.
    let lattice = triangle_lattice(2.0, 9.0, 2, 9);
    let Shape::Union { children } = &lattice else {
        panic!("expected union, got {lattice:?}");
    };
    assert_eq!(children.len(), 18, "one cell per grid position");
    assert_eq!(lattice.primitive_count(), 18 * 3);
}

#[test]
fn lattice_mirrors_cells_on_a_checkerboard() {
    let num_x = 4;
    let num_y = 3;
    let lattice = triangle_lattice(2.0, 6.0, num_x, num_y);
    let Shape::Union { children } = &lattice else {
        panic!("expected union, got {lattice:?}");
    };

    // Cells are pushed row-major: index = i * num_x + j.
    for (idx, cell) in children.iter().enumerate() {
        let i = idx / num_x;
        let j = idx % num_x;
        let Shape::Translate { child, .. } = cell else {
            panic!("expected translated cell, got {cell:?}");
        };
        let mirrored = matches!(child.as_ref(), Shape::Mirror { .. });
        assert_eq!(mirrored, (i + j) % 2 == 1, "cell ({i}, {j})");
    }
}

#[test]
fn lattice_nudges_upright_cells_to_clear_flipped_neighbors() {
    let r = 2.0;
    let l = 6.0;
    let lattice = triangle_lattice(r, l, 2, 1);
    let Shape::Union { children } = &lattice else {
        panic!("expected union, got {lattice:?}");
    };
    let big_r = l * 3.0_f32.sqrt() / 3.0;

    // Cell (0, 0) is upright and shifted +1 in X; cell (0, 1) is mirrored
    // and sits on the bare grid position.
    let Shape::Translate { offset, .. } = &children[0] else {
        panic!("expected translate");
    };
    assert_relative_eq!(offset.x, 1.0);
    let Shape::Translate { offset, .. } = &children[1] else {
        panic!("expected translate");
    };
    assert_relative_eq!(offset.x, l + 2.0 * r + big_r);
}

#[test]
fn sweep_stops_short_of_the_end_angle() {
    let swept = sweep_about_y(&sphere(1.0), 180, 15);
    let Shape::Union { children } = &swept else {
        panic!("expected union, got {swept:?}");
    };
    // 0, 15, .., 165: the end angle itself is excluded.
    assert_eq!(children.len(), 12);
    for (k, copy) in children.iter().enumerate() {
        let Shape::Rotate { degrees, .. } = copy else {
            panic!("expected rotate, got {copy:?}");
        };
        assert_relative_eq!(degrees.y, (k as f32) * 15.0);
        assert_eq!(degrees.x, 0.0);
        assert_eq!(degrees.z, 0.0);
    }
}

#[test]
fn mirror_copy_keeps_every_copy() {
    let once = sphere(2.0).mirror_copy(Vec3::X);
    assert_eq!(once.primitive_count(), 2);

    // No deduplication: mirroring the pair doubles it again.
    let twice = sphere(2.0).mirror_copy(Vec3::X).mirror_copy(Vec3::Y);
    assert_eq!(twice.primitive_count(), 4);

    // The result is literally the shape plus its reflection.
    let Shape::Union { children } = &once else {
        panic!("expected union, got {once:?}");
    };
    assert_eq!(children[0], sphere(2.0));
    let Shape::Mirror { axis, child } = &children[1] else {
        panic!("expected mirror, got {:?}", children[1]);
    };
    assert_eq!(*axis, Vec3::X);
    assert_eq!(child.as_ref(), &sphere(2.0));
}

#[test]
fn patterns_are_deterministic() {
    assert_eq!(
        triangle_lattice(2.0, 9.0, 2, 9),
        triangle_lattice(2.0, 9.0, 2, 9)
    );
    assert_eq!(
        sweep_about_y(&sphere(1.0), 180, 15),
        sweep_about_y(&sphere(1.0), 180, 15)
    );
}
