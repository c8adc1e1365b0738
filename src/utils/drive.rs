use vexide::prelude::Float;

/// Converts a raw joystick reading in [-127, 127] to [-1.0, 1.0].
///
/// `ControllerState` already applies this internally; it lives here so the
/// normalization contract is stated (and tested) in one place.
pub fn normalize_axis(raw: i8) -> f64 {
    f64::from(raw) / 127.0
}

// https://wiki.purduesigbots.com/software/robotics-basics/arcade-drive
/// Mixes throttle and turn into (left, right) wheel commands, both in [-1, 1].
///
/// The sum/difference can reach magnitude 2, so both sides are divided by
/// `max(1, |l|, |r|)`: saturation scales the pair down uniformly instead of
/// clipping one side, and sub-unity commands pass through unscaled.
pub fn arcade_mix(throttle: f64, turn: f64) -> (f64, f64) {
    let left = throttle + turn;
    let right = throttle - turn;
    let mag = left.abs().max(right.abs()).max(1.0);
    (left / mag, right / mag)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVE_RPM: f64 = 600.0;

    #[test]
    fn axis_normalization_endpoints() {
        assert_eq!(normalize_axis(127), 1.0);
        assert_eq!(normalize_axis(-127), -1.0);
        assert_eq!(normalize_axis(0), 0.0);
    }

    #[test]
    fn outputs_bounded_over_full_axis_grid() {
        for l in -127..=127i16 {
            for r in -127..=127i16 {
                let (left, right) = arcade_mix(
                    normalize_axis(l as i8),
                    normalize_axis(r as i8),
                );
                let lp = left * DRIVE_RPM;
                let rp = right * DRIVE_RPM;
                assert!((-DRIVE_RPM..=DRIVE_RPM).contains(&lp), "l={l} r={r} lp={lp}");
                assert!((-DRIVE_RPM..=DRIVE_RPM).contains(&rp), "l={l} r={r} rp={rp}");
            }
        }
    }

    #[test]
    fn sub_unity_inputs_pass_through_unscaled() {
        // |t + u| <= 1 and |t - u| <= 1 means no scaling at all
        let (left, right) = arcade_mix(0.5, 0.25);
        assert_eq!(left, 0.75);
        assert_eq!(right, 0.25);

        let (left, right) = arcade_mix(-0.3, 0.3);
        assert_eq!(left, 0.0);
        assert_eq!(right, -0.6);
    }

    #[test]
    fn full_throttle_no_turn_drives_straight_at_full_speed() {
        let (left, right) = arcade_mix(normalize_axis(127), normalize_axis(0));
        assert_eq!(left * DRIVE_RPM, 600.0);
        assert_eq!(right * DRIVE_RPM, 600.0);
    }

    #[test]
    fn full_throttle_full_turn_pivots_without_overdrive() {
        // l = 2.0, r = 0.0 before scaling; mag = 2 halves the pair
        let (left, right) = arcade_mix(normalize_axis(127), normalize_axis(127));
        assert_eq!(left * DRIVE_RPM, 600.0);
        assert_eq!(right * DRIVE_RPM, 0.0);
    }

    #[test]
    fn saturation_scales_both_sides_uniformly() {
        let (left, right) = arcade_mix(1.0, 0.5);
        // pre-scale pair is (1.5, 0.5); ratio must survive the division
        assert_eq!(left, 1.0);
        assert!((right - (0.5 / 1.5)).abs() < 1e-12);
    }
}
