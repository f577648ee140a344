// tests/robot_parts.rs
use approx::assert_relative_eq;
use glam::Vec3;
use invictus_cad::{
    Assembly, PLA_DENSITY, Robot, Shape, WEIGHT_LIMIT_G, cube_centered, estimate_mass,
    import_mesh, sphere,
};
use std::f32::consts::PI;

#[test]
fn parts_rebuild_to_identical_trees() {
    let robot = Robot::new();

    // Every part is a pure function of its constants.
    assert_eq!(robot.wheel.solid(), robot.wheel.solid());
    assert_eq!(robot.drive.gear_motor(), robot.drive.gear_motor());
    assert_eq!(robot.drive.mount(), robot.drive.mount());
    assert_eq!(
        robot.blade.solid(&robot.weapon_motor),
        robot.blade.solid(&robot.weapon_motor)
    );
    assert_eq!(robot.frame_solid(), robot.frame_solid());
    assert_eq!(
        Assembly::FullAssembly.shape(&robot),
        Assembly::FullAssembly.shape(&robot)
    );
}

#[test]
fn wheel_is_a_centered_half_inch_cylinder() {
    let robot = Robot::new();
    let Shape::Cylinder {
        radius_bottom,
        radius_top,
        height,
        center,
    } = robot.wheel.solid()
    else {
        panic!("expected cylinder");
    };
    assert_relative_eq!(radius_bottom, 19.05); // 1.5 inch diameter
    assert_relative_eq!(radius_top, 19.05);
    assert_relative_eq!(height, 12.7); // 0.5 inch tread
    assert!(center);
}

#[test]
fn drive_system_composition_counts() {
    let robot = Robot::new();

    // Can (cube clipped by cylinder), gearbox, collar, shaft.
    assert_eq!(robot.drive.gear_motor().primitive_count(), 5);
    // Gear motor plus the wheel.
    assert_eq!(robot.drive.assembled(&robot.wheel).primitive_count(), 6);
    // Two clip nubs, three sleeve boxes, and the subtracted gear motor.
    assert_eq!(robot.drive.mount().primitive_count(), 10);
}

#[test]
fn wheel_rides_outboard_of_the_collar() {
    let robot = Robot::new();
    // Half the tread plus everything between motor base and collar face.
    let expected = 12.7 / 2.0 + 34.67 - 8.67 + 0.6 + 1.0;
    assert_relative_eq!(robot.drive.wheel_offset(&robot.wheel), expected);
}

#[test]
fn blade_swing_radius_covers_the_bar_corners() {
    let robot = Robot::new();
    let l: f32 = 12.0 * 8.08;
    let w: f32 = 3.0 * 8.08;
    let expected = ((l / 2.0) * (l / 2.0) + (w / 2.0) * (w / 2.0)).sqrt();
    assert_relative_eq!(robot.blade.swing_radius(), expected);

    // Spine, hulled hub pair, and the bore.
    assert_eq!(robot.blade.solid(&robot.weapon_motor).primitive_count(), 4);
}

#[test]
fn weapon_motor_carries_screws_and_bearing() {
    let robot = Robot::new();
    // Four two-piece screws.
    assert_eq!(robot.weapon_motor.screws().primitive_count(), 8);
    // Ring and bore.
    assert_eq!(robot.weapon_motor.bearing().primitive_count(), 2);
    // Mesh + screws + bearing.
    assert_eq!(robot.weapon_motor.solid().primitive_count(), 11);
}

#[test]
fn blade_sweep_covers_half_a_revolution() {
    let robot = Robot::new();
    // Twelve 15-degree stations, four leaves per blade copy.
    let swept = robot.blade.swept(&robot.weapon_motor);
    assert_eq!(swept.primitive_count(), 12 * 4);
}

#[test]
fn electronics_envelopes_are_modeled() {
    let robot = Robot::new();
    let Shape::Cube { size, center } = robot.transmitter.solid() else {
        panic!("expected cube");
    };
    assert_eq!(size, Vec3::new(26.0, 18.0, 3.0));
    assert!(!center);

    // The ESC stays an opaque vendor mesh, stood upright.
    assert_eq!(robot.esc.solid().primitive_count(), 1);
}

#[test]
fn frame_tilt_matches_the_lid_plane() {
    let frame = Robot::new().frame;
    let expected = 90.0 - 120.0_f32.atan2(45.0).to_degrees();
    assert_relative_eq!(frame.tilt_angle(), expected);
    assert_relative_eq!(frame.overhang(), 24.0);
}

#[test]
fn frame_composition_is_stable() {
    let robot = Robot::new();
    let frame = robot.frame_solid();

    // Shell + mounts + lid + truss lattice + drive pockets, counted leaf by
    // leaf. A change here means the frame recipe itself changed.
    assert_eq!(frame.primitive_count(), 105);

    // The tilted render only wraps the same tree in a rotation.
    assert_eq!(
        Assembly::TiltedFrame.shape(&robot).primitive_count(),
        frame.primitive_count()
    );
    assert_eq!(Assembly::FullAssembly.shape(&robot).primitive_count(), 120);

    // Section views add only the clipping box.
    assert_eq!(
        Assembly::FrameCutawayXy.shape(&robot).primitive_count(),
        frame.primitive_count() + 1
    );
}

#[test]
fn assembly_names_are_stable() {
    assert_eq!(Assembly::TiltedFrame.to_string(), "tilted-frame");
    assert_eq!(Assembly::FrameCutawayXz.to_string(), "frame-cutaway-xz");
    assert_eq!(Assembly::default(), Assembly::TiltedFrame);
}

#[test]
fn mass_estimate_matches_closed_forms_on_leaves() {
    let d = PLA_DENSITY;
    let ball = sphere(10.0);
    assert_relative_eq!(
        estimate_mass(&ball, d),
        4.0 / 3.0 * PI * 1000.0 * d,
        epsilon = 1e-3
    );

    let brick = cube_centered(Vec3::new(10.0, 20.0, 30.0));
    assert_relative_eq!(estimate_mass(&brick, d), 6000.0 * d, epsilon = 1e-3);

    // Opaque meshes weigh nothing here.
    assert_eq!(estimate_mass(&import_mesh("Modified.stl"), d), 0.0);
}

#[test]
fn mass_estimate_bounds_booleans_from_above() {
    let d = PLA_DENSITY;
    let base = cube_centered(Vec3::splat(20.0));
    let carved = base.clone() - sphere(5.0);
    assert!(estimate_mass(&carved, d) <= estimate_mass(&base, d));

    // Scaling by s multiplies the estimate by |s|^3.
    let scaled = base.clone().scale(Vec3::splat(0.5));
    assert_relative_eq!(
        estimate_mass(&scaled, d),
        estimate_mass(&base, d) / 8.0,
        epsilon = 1e-4
    );
}

#[test]
fn printed_parts_fit_the_weight_budget() {
    let robot = Robot::new();
    let frame = estimate_mass(&robot.frame_solid(), PLA_DENSITY);

    // The estimate is coarse, so it only has to be positive and under
    // budget to be useful.
    assert!(frame > 0.0);
    assert!(frame < WEIGHT_LIMIT_G);
}
