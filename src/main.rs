#![no_main]
#![no_std]

use core::time::Duration;

use vexide::{devices::smart::imu::InertialSensor, prelude::*};

use crate::chassis::{Chassis, ChassisArgs, ChassisConfig};

mod chassis;
mod driver_control;
mod utils;

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let mut dynamic_peripherals = DynamicPeripherals::new(peripherals);
    let robot = Robot::new(&mut dynamic_peripherals).await;
    robot.compete().await;
}

pub struct Robot {
    chassis: Chassis<3, 3>,
}

impl Robot {
    async fn new(peripherals: &mut DynamicPeripherals) -> Self {
        let left_motors = [
            Motor::new(peripherals.take_smart_port(1).expect("smart port 1"), Gearset::Blue, Direction::Reverse),
            Motor::new(peripherals.take_smart_port(3).expect("smart port 3"), Gearset::Blue, Direction::Forward),
            Motor::new(peripherals.take_smart_port(5).expect("smart port 5"), Gearset::Blue, Direction::Reverse),
        ];
        let right_motors = [
            Motor::new(peripherals.take_smart_port(2).expect("smart port 2"), Gearset::Blue, Direction::Forward),
            Motor::new(peripherals.take_smart_port(4).expect("smart port 4"), Gearset::Blue, Direction::Reverse),
            Motor::new(peripherals.take_smart_port(6).expect("smart port 6"), Gearset::Blue, Direction::Forward),
        ];
        let intake = Motor::new(peripherals.take_smart_port(10).expect("smart port 10"), Gearset::Blue, Direction::Forward);
        let imu = InertialSensor::new(peripherals.take_smart_port(7).expect("smart port 7"));
        let mogo_clamp = AdiDigitalOut::new(peripherals.take_adi_port(1).expect("adi port a"));
        let arm = AdiDigitalOut::new(peripherals.take_adi_port(2).expect("adi port b"));
        let hood = AdiDigitalOut::new(peripherals.take_adi_port(3).expect("adi port c"));

        let config = ChassisConfig {
            intake_volts: 12.0,
            dt: Duration::from_millis(10),
        };

        let chassis = Chassis::new(ChassisArgs {
            left_motors,
            right_motors,
            intake,
            mogo_clamp,
            arm,
            hood,
            imu,
            controller: peripherals.take_primary_controller().expect("primary controller"),
            config,
        })
        .await;

        Robot { chassis }
    }
}

impl Compete for Robot {
    async fn connected(&mut self) {
        self.chassis.retract_all_pistons();
    }

    async fn disabled(&mut self) {
        self.chassis.retract_all_pistons();
    }

    async fn autonomous(&mut self) {}

    async fn driver(&mut self) {
        loop {
            let c_state = self.chassis.controller.state().unwrap_or_default();
            self.chassis.arcade_control(&c_state);
            self.chassis.handle_intake(&c_state);
            self.chassis.handle_pistons(&c_state);
            sleep(self.chassis.config.dt).await;
        }
    }
}
