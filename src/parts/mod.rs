//! The named parts of the robot. Each part is a parameter struct whose
//! `Default` carries the as-built dimensions; methods are pure shape
//! expressions over those constants.

pub mod drive;
pub mod electronics;
pub mod frame;
pub mod weapon;
pub mod wheel;

pub use drive::DriveSystem;
pub use electronics::{DriveEsc, Transmitter};
pub use frame::Frame;
pub use weapon::{WeaponBlade, WeaponMotor};
pub use wheel::Wheel;

use serde::{Deserialize, Serialize};

/// The full parameter set of the robot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Robot {
    pub wheel: Wheel,
    pub drive: DriveSystem,
    pub weapon_motor: WeaponMotor,
    pub blade: WeaponBlade,
    pub frame: Frame,
    pub transmitter: Transmitter,
    pub esc: DriveEsc,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame body with all collaborating parts applied.
    pub fn frame_solid(&self) -> crate::shape::Shape {
        self.frame
            .solid(&self.weapon_motor, &self.blade, &self.drive)
    }
}
