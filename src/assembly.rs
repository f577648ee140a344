//! Top-level render selection.
//!
//! Exactly one assembly is emitted per render pass. The choice is an input
//! to the build, never runtime state; [`Assembly::TiltedFrame`] is what goes
//! to the printer.

use crate::parts::Robot;
use crate::patterns::{cutaway_xy, cutaway_xz};
use crate::shape::{Shape, union};
use clap::ValueEnum;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The renderable top-level compositions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Assembly {
    /// The frame rotated lid-up for printing.
    #[default]
    TiltedFrame,
    /// Frame plus both assembled drive systems, untilted.
    FrameWithDrive,
    /// One drive system next to its printed mount.
    DriveTest,
    /// The weapon motor alone.
    WeaponMotor,
    /// Frame, weapon motor, and blade, tilted as driven.
    FullAssembly,
    /// Frame sectioned at the XY plane.
    FrameCutawayXy,
    /// Frame and one drive system sectioned at the XZ plane.
    FrameCutawayXz,
}

impl Assembly {
    /// Builds the selected composition from the robot's parameters.
    pub fn shape(&self, robot: &Robot) -> Shape {
        let frame = &robot.frame;
        let tilt = Vec3::new(0.0, frame.tilt_angle(), 0.0);
        match self {
            Assembly::TiltedFrame => robot.frame_solid().rotate(tilt),
            Assembly::FrameWithDrive => union(vec![
                robot.frame_solid(),
                robot
                    .drive
                    .assembled(&robot.wheel)
                    .rotate(Vec3::new(90.0, 90.0, -frame.side_wall_angle()))
                    .translate(frame.drive_mount_offset())
                    .mirror_copy(Vec3::new(0.0, 1.0, 0.0)),
            ]),
            Assembly::DriveTest => {
                robot.drive.assembled(&robot.wheel) + robot.drive.mount().right(22.0)
            }
            Assembly::WeaponMotor => robot.weapon_motor.solid(),
            Assembly::FullAssembly => {
                let weapon = (robot.weapon_motor.solid() + robot.blade.solid(&robot.weapon_motor))
                    .left(frame.overhang());
                (weapon + robot.frame_solid()).rotate(tilt)
            }
            Assembly::FrameCutawayXy => cutaway_xy(robot.frame_solid(), 0.0),
            Assembly::FrameCutawayXz => cutaway_xz(
                robot.frame_solid()
                    + robot
                        .drive
                        .assembled(&robot.wheel)
                        .translate(Vec3::new(frame.length * 0.8, 0.0, 0.0)),
                0.0,
            ),
        }
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Assembly::TiltedFrame => "tilted-frame",
            Assembly::FrameWithDrive => "frame-with-drive",
            Assembly::DriveTest => "drive-test",
            Assembly::WeaponMotor => "weapon-motor",
            Assembly::FullAssembly => "full-assembly",
            Assembly::FrameCutawayXy => "frame-cutaway-xy",
            Assembly::FrameCutawayXz => "frame-cutaway-xz",
        };
        f.write_str(name)
    }
}
