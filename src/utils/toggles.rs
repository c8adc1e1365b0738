/// Logical state of the three pneumatic toggles, owned by the chassis.
///
/// Each flag flips exactly once per rising edge of its bound button, so the
/// actuator level always equals the accumulated edge count mod 2 from the
/// state last forced by the disabled/connected hooks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PistonToggles {
    pub clamp: bool,
    pub arm: bool,
    pub hood: bool,
}

impl PistonToggles {
    pub fn flip_clamp(&mut self) -> bool {
        self.clamp = !self.clamp;
        self.clamp
    }

    pub fn flip_arm(&mut self) -> bool {
        self.arm = !self.arm;
        self.arm
    }

    pub fn flip_hood(&mut self) -> bool {
        self.hood = !self.hood;
        self.hood
    }

    /// Everything retracted, matching what the lifecycle hooks write.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_retracted() {
        let toggles = PistonToggles::default();
        assert!(!toggles.clamp);
        assert!(!toggles.arm);
        assert!(!toggles.hood);
    }

    #[test]
    fn n_edges_flip_exactly_n_times() {
        let mut toggles = PistonToggles::default();
        for i in 1..=5 {
            let state = toggles.flip_clamp();
            assert_eq!(state, i % 2 == 1);
        }
        assert!(toggles.clamp);
        // other pistons untouched
        assert!(!toggles.arm);
        assert!(!toggles.hood);
    }

    #[test]
    fn flips_are_independent_per_piston() {
        let mut toggles = PistonToggles::default();
        assert!(toggles.flip_arm());
        assert!(toggles.flip_hood());
        assert!(!toggles.flip_arm());
        assert_eq!(
            toggles,
            PistonToggles {
                clamp: false,
                arm: false,
                hood: true
            }
        );
    }

    #[test]
    fn clear_forces_retracted_from_any_state() {
        let mut toggles = PistonToggles::default();
        toggles.flip_clamp();
        toggles.flip_hood();
        toggles.clear();
        assert_eq!(toggles, PistonToggles::default());
    }
}
