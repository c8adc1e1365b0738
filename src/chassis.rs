use core::time::Duration;
use vexide::{
    devices::{
        controller::Controller,
        smart::imu::{InertialError, InertialSensor},
    },
    prelude::*,
};

use crate::utils::toggles::PistonToggles;

pub struct ChassisConfig {
    pub intake_volts: f64,
    pub dt: Duration,
}

/// All device handles, owned in one place and handed to the driver loop by
/// reference instead of living in globals.
pub struct Chassis<const L: usize, const R: usize> {
    pub left_motors: [Motor; L],
    pub right_motors: [Motor; R],
    pub intake: Motor,
    pub mogo_clamp: AdiDigitalOut,
    pub arm: AdiDigitalOut,
    pub hood: AdiDigitalOut,
    pub imu: InertialSensor,
    pub controller: Controller,
    pub config: ChassisConfig,
    // free speed of the drive gearset, ceiling for velocity commands
    pub drive_rpm: f64,
    pub toggles: PistonToggles,
}

pub struct ChassisArgs<const L: usize, const R: usize> {
    pub left_motors: [Motor; L],
    pub right_motors: [Motor; R],
    pub intake: Motor,
    pub mogo_clamp: AdiDigitalOut,
    pub arm: AdiDigitalOut,
    pub hood: AdiDigitalOut,
    pub imu: InertialSensor,
    pub controller: Controller,
    pub config: ChassisConfig,
}

impl<const L: usize, const R: usize> Chassis<L, R> {
    pub async fn new(mut args: ChassisArgs<L, R>) -> Self {
        match args.imu.calibrate().await {
            Ok(_) => println!("IMU calibration successful"),
            Err(e) => {
                let msg = match e {
                    InertialError::CalibrationTimedOut => "IMU calibration timed out",
                    InertialError::Port { .. } => "IMU not detected on the configured port",
                    InertialError::BadStatus => "IMU failed to report status",
                    _ => "IMU calibration error",
                };
                println!("{}: {:?}", msg, e);
            }
        }
        let _ = args.imu.reset_heading();

        let drive_rpm = match args.left_motors[0].gearset() {
            Ok(Gearset::Blue) => 600.0,
            Ok(Gearset::Green) => 200.0,
            Ok(Gearset::Red) => 100.0,
            Err(_) => 600.0,
        };

        let _ = args.controller.screen.clear_screen().await;

        let mut chassis = Self {
            left_motors: args.left_motors,
            right_motors: args.right_motors,
            intake: args.intake,
            mogo_clamp: args.mogo_clamp,
            arm: args.arm,
            hood: args.hood,
            imu: args.imu,
            controller: args.controller,
            config: args.config,
            drive_rpm,
            toggles: PistonToggles::default(),
        };
        chassis.retract_all_pistons();
        chassis
    }

    fn apply_piston(piston: &mut AdiDigitalOut, extended: bool) {
        if extended {
            let _ = piston.set_high();
        } else {
            let _ = piston.set_low();
        }
    }

    pub fn toggle_clamp(&mut self) {
        let extended = self.toggles.flip_clamp();
        Self::apply_piston(&mut self.mogo_clamp, extended);
    }

    pub fn toggle_arm(&mut self) {
        let extended = self.toggles.flip_arm();
        Self::apply_piston(&mut self.arm, extended);
    }

    pub fn toggle_hood(&mut self) {
        let extended = self.toggles.flip_hood();
        Self::apply_piston(&mut self.hood, extended);
    }

    /// Forces every piston to the retracted state and re-synchronizes the
    /// toggle bookkeeping with it. Called at bring-up and from the
    /// disabled/connected hooks so the driver loop never starts with logical
    /// state diverging from the hardware's last written value.
    pub fn retract_all_pistons(&mut self) {
        self.toggles.clear();
        Self::apply_piston(&mut self.mogo_clamp, false);
        Self::apply_piston(&mut self.arm, false);
        Self::apply_piston(&mut self.hood, false);
    }
}
