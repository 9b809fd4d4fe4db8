use nebula_core::Phase;

/// One-shot latch that flips the run into `Phase::PostGalaxy` the first time
/// the explosion clock is seen strictly past the threshold.
#[derive(Debug, Clone)]
pub struct PhaseController {
    phase: Phase,
    threshold: f64,
}

impl PhaseController {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: Phase::PreGalaxy,
            threshold,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` exactly once per controller: on the observation that
    /// takes it from `PreGalaxy` to `PostGalaxy`.
    pub fn observe(&mut self, elapsed: f64) -> bool {
        if self.phase == Phase::PreGalaxy && elapsed > self.threshold {
            self.phase = Phase::PostGalaxy;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut ctl = PhaseController::new(10.0);
        assert!(!ctl.observe(9.999));
        assert!(!ctl.observe(10.0));
        assert_eq!(ctl.phase(), Phase::PreGalaxy);
        assert!(ctl.observe(10.0001));
        assert_eq!(ctl.phase(), Phase::PostGalaxy);
    }

    #[test]
    fn test_fires_once() {
        let mut ctl = PhaseController::new(10.0);
        let fired = [5.0, 11.0, 12.0, 100.0, 0.0, 50.0]
            .iter()
            .filter(|&&t| ctl.observe(t))
            .count();
        assert_eq!(fired, 1);
        assert_eq!(ctl.phase(), Phase::PostGalaxy);
    }

    #[test]
    fn test_nan_never_fires() {
        let mut ctl = PhaseController::new(10.0);
        assert!(!ctl.observe(f64::NAN));
        assert_eq!(ctl.phase(), Phase::PreGalaxy);
    }
}
