//! Drive system: gear motor, shaft stack, wheel placement, and the printed
//! motor mount.

use crate::parts::wheel::Wheel;
use crate::shape::{Shape, cube_centered, cylinder, cylinder_centered, difference};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// N20-style gear motor with its exposed shaft, collar, and mount envelope.
/// All dimensions in mm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriveSystem {
    pub exposed_shaft_len: f32,
    pub gearbox_len: f32,
    pub motor_len: f32,
    /// Flat-to-flat height of the motor can envelope.
    pub height: f32,
    /// Width of the motor can envelope.
    pub width: f32,
    pub collar_height: f32,
    pub collar_radius: f32,
    pub motor_radius: f32,
    pub shaft_radius: f32,
    /// D-shaft flat depth, kept for drilling reference.
    pub shaft_flat: f32,
}

impl Default for DriveSystem {
    fn default() -> Self {
        Self {
            exposed_shaft_len: 8.67,
            gearbox_len: 9.0,
            motor_len: 17.0,
            height: 10.0,
            width: 12.0,
            collar_height: 0.6,
            collar_radius: 1.75,
            motor_radius: 6.0,
            shaft_radius: 1.5,
            shaft_flat: 1.25,
        }
    }
}

impl DriveSystem {
    /// Shaft tip to motor tail.
    pub fn total_len(&self) -> f32 {
        self.exposed_shaft_len + self.gearbox_len + self.motor_len
    }

    /// Length of the printed mount sleeve.
    pub fn mount_len(&self) -> f32 {
        self.gearbox_len + self.motor_len + 2.0
    }

    /// The motor, gearbox, collar, and shaft stacked along +Z.
    pub fn gear_motor(&self) -> Shape {
        // Round can clipped to the rectangular envelope.
        let motor = cube_centered(Vec3::new(self.height, self.width, self.motor_len))
            .up(self.motor_len / 2.0)
            * cylinder(self.motor_radius, self.motor_len);
        let gearbox = cube_centered(Vec3::new(self.height, self.width, self.gearbox_len));
        let collar = cylinder_centered(self.collar_radius, self.collar_height);
        let shaft = cylinder_centered(self.shaft_radius, self.exposed_shaft_len);

        let shaft_on_collar =
            collar + shaft.up(self.collar_height / 2.0 + self.exposed_shaft_len / 2.0);
        let stack = gearbox + shaft_on_collar.up(self.gearbox_len / 2.0 + self.collar_height / 2.0);
        motor + stack.up(self.motor_len + self.gearbox_len / 2.0)
    }

    /// Distance from the motor base plane to the wheel midplane.
    pub fn wheel_offset(&self, wheel: &Wheel) -> f32 {
        wheel.width / 2.0 + self.total_len() - self.exposed_shaft_len + self.collar_height + 1.0
    }

    /// Gear motor with the wheel pressed onto the shaft.
    pub fn assembled(&self, wheel: &Wheel) -> Shape {
        self.gear_motor() + wheel.solid().up(self.wheel_offset(wheel))
    }

    /// Retention nubs on both sides of the mount, at the gearbox seam.
    pub fn clip(&self) -> Shape {
        cylinder_centered(self.collar_height, self.height / 2.0)
            .rotate(Vec3::new(90.0, 0.0, 0.0))
            .translate(Vec3::new(
                -self.height / 2.0,
                0.0,
                self.motor_len + self.gearbox_len,
            ))
            .mirror_copy(Vec3::new(1.0, 0.0, 0.0))
    }

    /// Printed mount: a shelled sleeve around the motor envelope, opened on
    /// two faces, with the gear motor itself subtracted.
    pub fn mount(&self) -> Shape {
        let sleeve = difference(vec![
            cube_centered(Vec3::new(
                self.height + 1.0,
                self.width + 1.0,
                self.mount_len(),
            )),
            cube_centered(Vec3::new(
                self.height - 1.0,
                self.width - 1.0,
                self.mount_len(),
            ))
            .up(2.0),
            cube_centered(Vec3::new(
                self.height - 3.0,
                self.width - 2.0,
                self.mount_len() + 0.01,
            )),
        ])
        .up(self.mount_len() / 2.0 - 2.0);
        (self.clip() + sleeve) - self.gear_motor()
    }
}
