//! The one-piece printed frame: a hulled-sphere tetrahedron shell carrying
//! the weapon mounts, lid, truss, and drive pockets.

use crate::parts::drive::DriveSystem;
use crate::parts::weapon::{WeaponBlade, WeaponMotor};
use crate::patterns::triangle_lattice;
use crate::shape::{
    Shape, circle, cone, cone_centered, cube, cube_centered, cylinder_centered, difference, hull,
    sphere, square, union,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Frame envelope and wall parameters, in mm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Frame {
    /// Height of the rear spine edge.
    pub height: f32,
    /// Nose-to-spine length.
    pub length: f32,
    /// Width across the rear corners.
    pub width: f32,
    /// Approximate wall thickness.
    pub wall: f32,
    /// Internal fillet radius (also the corner sphere radius).
    pub fillet: f32,
    /// Length of the truss webs backing the weapon mounts.
    pub truss_len: f32,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            height: 90.0,
            length: 120.0,
            width: 135.0,
            wall: 3.0,
            fillet: 3.0,
            truss_len: 90.0,
        }
    }
}

impl Frame {
    /// Tilt that brings the lid plane horizontal for printing and driving.
    pub fn tilt_angle(&self) -> f32 {
        90.0 - self.length.atan2(self.height / 2.0).to_degrees()
    }

    /// How far the weapon axis sits ahead of the nose.
    pub fn overhang(&self) -> f32 {
        self.length / 5.0
    }

    /// Outer shell: hull over spheres on the corners of a tetrahedron.
    pub fn tetrahedron(&self) -> Shape {
        let r = self.fillet;
        let s1 = sphere(r).up(self.height / 2.0);
        let s2 = sphere(r).down(self.height / 2.0);
        let s3 = sphere(r).translate(Vec3::new(self.length, self.width / 2.0, 0.0));
        let s4 = sphere(r).translate(Vec3::new(self.length, -self.width / 2.0, 0.0));
        hull(vec![s1 + s2 + s3 + s4])
    }

    /// Interior void: the same tetrahedron inset by wall plus fillet.
    pub fn tetrahedron_void(&self) -> Shape {
        let r = self.fillet;
        let inset = self.wall + r;
        let s1 = sphere(r).translate(Vec3::new(inset, 0.0, self.height / 2.0 - inset));
        let s2 = sphere(r).translate(Vec3::new(inset, 0.0, -self.height / 2.0 + inset));
        let s3 = sphere(r).translate(Vec3::new(
            self.length - inset,
            self.width / 2.0 - inset,
            0.0,
        ));
        let s4 = sphere(r).translate(Vec3::new(
            self.length - inset,
            -self.width / 2.0 + inset,
            0.0,
        ));
        hull(vec![s1 + s2 + s3 + s4])
    }

    /// Clearance drum swept by the spinning blade.
    pub fn spinner_zone(&self, blade: &WeaponBlade) -> Shape {
        cylinder_centered(blade.swing_radius() + 4.0, blade.thickness + 6.0)
            .rotate(Vec3::new(90.0, 0.0, 0.0))
            .translate(Vec3::new(-self.length / 5.0, 0.0, 0.0))
    }

    // Lid plane: z = -h*x / (2*l) + h/2.
    fn lid_height(&self, x: f32) -> f32 {
        -self.height * x / (2.0 * self.length) + self.height / 2.0
    }

    fn lid_cylinder(&self) -> Shape {
        let r = self.fillet;
        cone_centered(1.5 * r, 0.75 * r, r).rotate(Vec3::new(0.0, self.tilt_angle(), 0.0))
    }

    fn lid_ellipsoid(&self) -> Shape {
        let r = self.fillet;
        sphere(r * 0.26)
            .scale(Vec3::new(1.25, 1.25, 1.0))
            .rotate(Vec3::new(0.0, self.tilt_angle(), 0.0))
    }

    /// Countersunk lid recess: hull of three squashed ellipsoids riding the
    /// lid plane, one in the front corner and two at the rear.
    pub fn lid(&self) -> Shape {
        let s1_x = 0.29 * self.length;
        let s1 = self
            .lid_ellipsoid()
            .translate(Vec3::new(s1_x, 0.0, self.lid_height(s1_x)));
        let s3_x = 0.83 * self.length;
        let s3 = self.lid_ellipsoid().translate(Vec3::new(
            s3_x,
            self.width / 4.0,
            self.lid_height(s3_x),
        ));
        let s4_x = 0.83 * self.length;
        let s4 = self.lid_ellipsoid().translate(Vec3::new(
            s4_x,
            -self.width / 4.0,
            self.lid_height(s4_x),
        ));
        hull(vec![s1, s3, s4]).up(self.fillet * 0.8)
    }

    /// Screwdriver pry slot above the lid plane.
    pub fn pry_space(&self) -> Shape {
        let r = self.fillet;
        let h = r;
        let x = 0.75 * self.length;
        let z = self.lid_height(x) + h + 0.17;
        cylinder_centered(4.0 * r, h)
            .rotate(Vec3::new(0.0, self.tilt_angle(), 0.0))
            .translate(Vec3::new(x, 0.0, z))
    }

    /// Everything removed for the lid recess.
    pub fn top_hole(&self) -> Shape {
        self.lid() + self.pry_space()
    }

    /// Through opening under the lid: hull of three tapered plugs.
    pub fn top_through_hole(&self) -> Shape {
        let c1_x = 0.38 * self.length;
        let c1 = self
            .lid_cylinder()
            .translate(Vec3::new(c1_x, 0.0, self.lid_height(c1_x)));
        let c3_x = 0.78 * self.length;
        let c3 = self.lid_cylinder().translate(Vec3::new(
            c3_x,
            0.17 * self.width,
            self.lid_height(c3_x),
        ));
        let c4_x = 0.78 * self.length;
        let c4 = self.lid_cylinder().translate(Vec3::new(
            c4_x,
            -0.17 * self.width,
            self.lid_height(c4_x),
        ));
        hull(vec![c1, c3, c4]).up(self.fillet * 0.5)
    }

    /// Truss web height, sized to clear the weapon motor can.
    pub fn truss_height(&self, motor: &WeaponMotor) -> f32 {
        2.0 * motor.radius + 8.0
    }

    /// Truss web thickness, sized to the weapon motor base.
    pub fn truss_thickness(&self, motor: &WeaponMotor) -> f32 {
        motor.base_len + 5.0
    }

    /// 2D truss profile: a capped strip with the triangle lattice cut out,
    /// rotated upright.
    fn truss_profile(&self, motor: &WeaponMotor) -> Shape {
        let truss_h = self.truss_height(motor);
        let strip = square(Vec2::new(truss_h, self.truss_len))
            + circle(truss_h / 2.0).translate(Vec3::new(truss_h / 2.0, self.truss_len, 0.0))
            - triangle_lattice(2.0, 9.0, 2, 9).translate(Vec3::new(12.5, 10.0, 0.0));
        strip.rotate(Vec3::new(0.0, 0.0, 90.0))
    }

    /// Extruded truss web with its stiffening flange.
    pub fn truss(&self, motor: &WeaponMotor) -> Shape {
        let truss_h = self.truss_height(motor);
        let truss_t = self.truss_thickness(motor);
        let web = self
            .truss_profile(motor)
            .linear_extrude(truss_t, 1.0)
            .rotate(Vec3::new(90.0, 0.0, 0.0));
        let flange = cube(Vec3::new(self.truss_len, truss_t / 4.0, truss_h)).translate(Vec3::new(
            -self.truss_len,
            -0.6 * truss_t,
            0.0,
        ));
        web + flange
    }

    fn truss_in_place(&self, motor: &WeaponMotor) -> Shape {
        self.truss(motor).translate(Vec3::new(
            self.truss_len,
            self.truss_thickness(motor) / 2.0,
            -self.truss_height(motor) / 2.0,
        ))
    }

    /// Ring and truss carrying the weapon motor, bored for the base spigot
    /// and shaft.
    pub fn weapon_motor_mount(&self, motor: &WeaponMotor) -> Shape {
        let truss_t = self.truss_thickness(motor);
        let ring = cylinder_centered(motor.radius + 4.0, truss_t).rotate(Vec3::new(90.0, 0.0, 0.0));
        let spigot_bore = cone(
            motor.base_radius,
            motor.radius,
            (motor.base_len + 5.0) / 2.0,
        )
        .rotate(Vec3::new(90.0, 0.0, 0.0));
        let shaft_bore = cylinder_centered(motor.shaft_radius * 2.0, truss_t + 1.0)
            .rotate(Vec3::new(90.0, 0.0, 0.0));
        (ring + self.truss_in_place(motor) - spigot_bore - shaft_bore).translate(Vec3::new(
            -self.overhang(),
            14.2,
            0.0,
        ))
    }

    /// Channel for the weapon motor leads.
    pub fn wire_hole(&self, motor: &WeaponMotor) -> Shape {
        cube(Vec3::new(40.0, 6.0, 12.0)).translate(Vec3::new(-5.0, motor.base_len + 2.0, -6.0))
    }

    /// Smaller mirror of the motor mount supporting the far shaft end.
    pub fn weapon_shaft_mount(&self, motor: &WeaponMotor) -> Shape {
        let truss_t = self.truss_thickness(motor);
        let ring = cylinder_centered(0.8 * (motor.radius + 4.0), truss_t * 0.8)
            .rotate(Vec3::new(90.0, 0.0, 0.0));
        (ring + self.truss_in_place(motor).scale(Vec3::new(0.8, 0.8, 0.8))).translate(Vec3::new(
            -self.overhang(),
            -23.0,
            0.0,
        ))
    }

    /// Cross brace through the open interior.
    pub fn brace(&self) -> Shape {
        cube_centered(Vec3::new(self.wall, 0.29 * self.width, 0.78 * self.height))
            .right(self.length / 4.0)
    }

    /// Slope of the side walls where the drive mounts attach.
    pub fn side_wall_angle(&self) -> f32 {
        90.0 - (self.length / (self.width / 2.0)).atan().to_degrees()
    }

    /// Where each drive motor sits on the rear side walls.
    pub fn drive_mount_offset(&self) -> Vec3 {
        Vec3::new(self.length * 0.90, self.width * -0.255, 0.0)
    }

    fn against_side_wall(&self, shape: Shape) -> Shape {
        shape
            .rotate(Vec3::new(90.0, 90.0, -self.side_wall_angle()))
            .translate(self.drive_mount_offset())
            .mirror_copy(Vec3::new(0.0, 1.0, 0.0))
    }

    /// Both drive motor mounts, mirrored across the centerline.
    pub fn drive_motor_mounts(&self, drive: &DriveSystem) -> Shape {
        self.against_side_wall(drive.mount())
    }

    /// Both gear motor envelopes, subtracted so the motors drop in.
    pub fn drive_motor_voids(&self, drive: &DriveSystem) -> Shape {
        self.against_side_wall(drive.gear_motor())
    }

    /// The complete frame body.
    pub fn solid(&self, motor: &WeaponMotor, blade: &WeaponBlade, drive: &DriveSystem) -> Shape {
        let shell = difference(vec![
            union(vec![
                self.tetrahedron(),
                self.weapon_shaft_mount(motor),
                self.weapon_motor_mount(motor),
            ]),
            union(vec![
                self.tetrahedron_void(),
                motor.solid().left(self.overhang()),
            ]),
        ]);
        shell + self.brace() - self.wire_hole(motor) - self.top_hole() - self.spinner_zone(blade)
            - self.top_through_hole()
            + self.drive_motor_mounts(drive)
            - self.drive_motor_voids(drive)
    }
}
