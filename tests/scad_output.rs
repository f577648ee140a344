// tests/scad_output.rs
use glam::{Vec2, Vec3};
use invictus_cad::{
    ScadDocument, circle, cone, cube_centered, cylinder, import_mesh, intersection, sphere, square,
};

#[test]
fn primitives_render_as_openscad_calls() {
    assert_eq!(cylinder(5.0, 10.0).to_string(), "cylinder(r = 5, h = 10);\n");
    assert_eq!(
        cube_centered(Vec3::new(2.0, 4.0, 6.0)).to_string(),
        "cube([2, 4, 6], center = true);\n"
    );
    assert_eq!(
        cone(16.0, 17.5, 7.25).to_string(),
        "cylinder(r1 = 16, r2 = 17.5, h = 7.25);\n"
    );
    assert_eq!(circle(1.5).to_string(), "circle(r = 1.5);\n");
    assert_eq!(
        square(Vec2::new(43.0, 90.0)).to_string(),
        "square([43, 90]);\n"
    );
    assert_eq!(
        import_mesh("tinyESC_v2.stl").to_string(),
        "import(\"tinyESC_v2.stl\");\n"
    );
}

#[test]
fn transforms_render_as_indented_blocks() {
    let shape = sphere(3.0).up(4.5);
    assert_eq!(
        shape.to_string(),
        "translate([0, 0, 4.5]) {\n  sphere(r = 3);\n}\n"
    );

    let extruded = square(Vec2::new(2.0, 3.0)).linear_extrude(5.0, 1.0);
    assert_eq!(
        extruded.to_string(),
        "linear_extrude(height = 5, scale = 1) {\n  square([2, 3]);\n}\n"
    );
}

#[test]
fn operators_map_to_boolean_blocks() {
    let union = sphere(1.0) + sphere(2.0);
    assert_eq!(
        union.to_string(),
        "union() {\n  sphere(r = 1);\n  sphere(r = 2);\n}\n"
    );

    // Subtraction order matters: the base comes first.
    let diff = sphere(2.0) - sphere(1.0);
    assert_eq!(
        diff.to_string(),
        "difference() {\n  sphere(r = 2);\n  sphere(r = 1);\n}\n"
    );

    let clipped = sphere(2.0) * cylinder(1.0, 4.0);
    assert_eq!(
        clipped.to_string(),
        "intersection() {\n  sphere(r = 2);\n  cylinder(r = 1, h = 4);\n}\n"
    );
    // The operator is shorthand for the two-child explicit form.
    assert_eq!(
        clipped,
        intersection(vec![sphere(2.0), cylinder(1.0, 4.0)])
    );
}

#[test]
fn document_emits_the_tessellation_header() {
    let doc = ScadDocument::new(sphere(1.0));
    assert_eq!(doc.render(), "$fn = 20;\nsphere(r = 1);\n");
}

#[test]
fn segments_change_only_the_header() {
    let coarse = ScadDocument::new(sphere(1.0) + cylinder(2.0, 3.0));
    let fine = coarse.clone().with_segments(64);

    let coarse_text = coarse.render();
    let fine_text = fine.render();
    assert_ne!(coarse_text, fine_text);

    // Everything after the first line is byte-identical: tessellation never
    // reaches into shape placement.
    let coarse_body = coarse_text.split_once('\n').unwrap().1;
    let fine_body = fine_text.split_once('\n').unwrap().1;
    assert_eq!(coarse_body, fine_body);
    assert!(coarse_text.starts_with("$fn = 20;\n"));
    assert!(fine_text.starts_with("$fn = 64;\n"));
}

#[test]
fn rendering_is_deterministic() {
    let build = || ScadDocument::new(sphere(2.0) - cylinder(1.0, 5.0).up(0.5));
    assert_eq!(build(), build());
    assert_eq!(build().render(), build().render());
}

#[test]
fn document_round_trips_through_json() {
    let doc = ScadDocument::new(sphere(2.0) - cylinder(1.0, 5.0)).with_segments(48);
    let json = doc.to_json().expect("encode");
    let back = ScadDocument::from_json(&json).expect("decode");
    assert_eq!(doc, back);
}
