use super::chassis::Chassis;
use crate::utils::drive::arcade_mix;
use vexide::prelude::*;

impl<const L: usize, const R: usize> Chassis<L, R> {
    pub fn arcade_control(&mut self, c_state: &vexide::devices::controller::ControllerState) {
        let throttle = c_state.left_stick.y();
        let turn = c_state.right_stick.x();
        let (left, right) = arcade_mix(throttle, turn);

        if left == 0.0 && right == 0.0 {
            // coast at zero demand instead of holding velocity zero
            for m in self.left_motors.iter_mut() {
                let _ = m.brake(BrakeMode::Coast);
            }
            for m in self.right_motors.iter_mut() {
                let _ = m.brake(BrakeMode::Coast);
            }
            return;
        }

        let vl = (left * self.drive_rpm) as i32;
        let vr = (right * self.drive_rpm) as i32;
        for m in self.left_motors.iter_mut() {
            let _ = m.set_velocity(vl);
        }
        for m in self.right_motors.iter_mut() {
            let _ = m.set_velocity(vr);
        }
    }

    /// Level-triggered, no state: R1 held runs the intake forward, R2 held
    /// runs it in reverse, neither stops it. Forward wins if both are held.
    pub fn handle_intake(&mut self, c_state: &vexide::devices::controller::ControllerState) {
        if c_state.button_r1.is_pressed() {
            let _ = self.intake.set_voltage(self.config.intake_volts);
        } else if c_state.button_r2.is_pressed() {
            let _ = self.intake.set_voltage(-self.config.intake_volts);
        } else {
            let _ = self.intake.set_velocity(0);
        }
    }

    /// Edge-triggered: each piston flips once per press, never on hold.
    pub fn handle_pistons(&mut self, c_state: &vexide::devices::controller::ControllerState) {
        if c_state.button_l1.is_now_pressed() {
            self.toggle_clamp();
        }
        if c_state.button_l2.is_now_pressed() {
            self.toggle_arm();
        }
        if c_state.button_a.is_now_pressed() {
            self.toggle_hood();
        }
    }
}
