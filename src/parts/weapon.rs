//! Weapon drivetrain: outrunner motor and the spinning bar blade.

use crate::hardware::{bearing_625, m3_screw};
use crate::patterns::sweep_about_y;
use crate::shape::{Shape, cube, cylinder_centered, hull, import_mesh, union};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Brushless outrunner driving the blade. The can itself is an imported
/// vendor mesh; the mounting screws and support bearing are modeled so the
/// frame can subtract their clearance. Dimensions in mm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeaponMotor {
    /// Outer radius of the can.
    pub radius: f32,
    /// Radius of the mounting base.
    pub base_radius: f32,
    pub shaft_radius: f32,
    /// Base length: 47.5 - (18 + 3.5 + 16.5).
    pub base_len: f32,
    pub middle_len: f32,
    pub collar_len: f32,
    pub exposed_shaft_len: f32,
    pub shaft_len: f32,
    pub mesh: String,
}

impl Default for WeaponMotor {
    fn default() -> Self {
        Self {
            radius: 17.5,
            base_radius: 16.0,
            shaft_radius: 2.5,
            base_len: 9.5,
            middle_len: 18.0,
            collar_len: 3.5,
            exposed_shaft_len: 16.5,
            shaft_len: 47.5,
            mesh: "Modified.stl".to_string(),
        }
    }
}

impl WeaponMotor {
    /// The four M3 mounting screws, one pair per bolt circle (25 mm and
    /// 19 mm), on the base plane.
    pub fn screws(&self) -> Shape {
        let disp1 = ((25.0_f32 / 2.0).powi(2) / 2.0).sqrt();
        let disp2 = ((19.0_f32 / 2.0).powi(2) / 2.0).sqrt();
        let screw = m3_screw(8.0).rotate(Vec3::new(-90.0, 0.0, 0.0));
        let y = self.middle_len - self.base_len / 2.0;
        union(vec![
            screw.clone().translate(Vec3::new(-disp1, y, disp1)), // top right
            screw.clone().translate(Vec3::new(disp1, y, -disp1)), // bottom left
            screw.clone().translate(Vec3::new(-disp2, y, -disp2)), // bottom right
            screw.translate(Vec3::new(disp2, y, disp2)),          // top left
        ])
    }

    /// Support bearing at the far end of the shaft.
    pub fn bearing(&self) -> Shape {
        bearing_625()
            .rotate(Vec3::new(90.0, 0.0, 0.0))
            .translate(Vec3::new(0.0, -(self.exposed_shaft_len + 0.5), 0.0))
    }

    /// The complete motor: positioned vendor mesh, screws, and bearing.
    pub fn solid(&self) -> Shape {
        let can = import_mesh(self.mesh.clone())
            .rotate(Vec3::new(0.0, 0.0, 180.0))
            .translate(Vec3::new(12.45, 13.89, -26.76))
            .forward(self.middle_len);
        can + self.screws() + self.bearing()
    }
}

/// Spinning bar blade. Width and length derive from the bar thickness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeaponBlade {
    /// Bar stock thickness in mm.
    pub thickness: f32,
}

impl Default for WeaponBlade {
    fn default() -> Self {
        Self { thickness: 8.08 }
    }
}

impl WeaponBlade {
    pub fn width(&self) -> f32 {
        3.0 * self.thickness
    }

    pub fn length(&self) -> f32 {
        12.0 * self.thickness
    }

    /// Tip radius of the spinning blade, for clearance zones.
    pub fn swing_radius(&self) -> f32 {
        let l = self.length();
        let w = self.width();
        ((l / 2.0).powi(2) + (w / 2.0).powi(2)).sqrt()
    }

    /// The blade bar: spine, hub reinforcement hulled into the lower half,
    /// and the motor can bore.
    pub fn solid(&self, motor: &WeaponMotor) -> Shape {
        let t = self.thickness;
        let w = self.width();
        let l = self.length();
        let spine = cube(Vec3::new(w, t, l)).translate(Vec3::new(-w / 2.0, -t / 2.0, -l / 2.0));
        let hub = hull(vec![
            cylinder_centered(motor.radius + 6.0, t).rotate(Vec3::new(90.0, 0.0, 0.0)),
            cube(Vec3::new(w, t, l / 2.0)).translate(Vec3::new(-w / 2.0, -t / 2.0, -l / 4.0)),
        ]);
        (spine + hub) - cylinder_centered(motor.radius, t).rotate(Vec3::new(90.0, 0.0, 0.0))
    }

    /// Swept envelope of the blade about the weapon axis, for clearance
    /// checks against the frame.
    pub fn swept(&self, motor: &WeaponMotor) -> Shape {
        sweep_about_y(&self.solid(motor), 180, 15)
    }
}
