/// Index of a `.progress-bar` element, in document order.
pub type BarId = usize;

/// Largest increment a single processing tick may add.
pub const MAX_PROGRESS_STEP: f64 = 10.0;

/// Highest value the simulated progress may show; 100% is left to the server.
pub const MAX_PROGRESS_CAP: u8 = 99;

/// Simulated progress shown while the server analyses an upload.
///
/// The real completion comes from the response page, so ticks only ever move
/// the value up to the cap and then stop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProcessingProgress {
    #[default]
    Idle,
    Animating {
        percent: f64,
    },
    Capped {
        percent: f64,
    },
}

/// What a tick did to the progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressStep {
    /// Not animating; nothing to display.
    Ignored,
    Advanced(f64),
    /// Reached the cap; the ticker should stop.
    Capped(f64),
}

impl ProcessingProgress {
    /// Starts animating from zero. Returns false when already started.
    pub fn start(&mut self) -> bool {
        match self {
            ProcessingProgress::Idle => {
                *self = ProcessingProgress::Animating { percent: 0.0 };
                true
            }
            ProcessingProgress::Animating { .. } | ProcessingProgress::Capped { .. } => false,
        }
    }

    /// Adds `increment` and clamps to `cap` before the value is reported.
    /// Caps above [`MAX_PROGRESS_CAP`] are lowered to it.
    pub fn tick(&mut self, increment: f64, cap: f64) -> ProgressStep {
        let ProcessingProgress::Animating { percent } = *self else {
            return ProgressStep::Ignored;
        };
        let cap = cap.min(f64::from(MAX_PROGRESS_CAP));
        let increment = if increment.is_finite() {
            increment.clamp(0.0, MAX_PROGRESS_STEP)
        } else {
            0.0
        };
        let next = percent + increment;
        if next >= cap {
            *self = ProcessingProgress::Capped { percent: cap };
            ProgressStep::Capped(cap)
        } else {
            *self = ProcessingProgress::Animating { percent: next };
            ProgressStep::Advanced(next)
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match *self {
            ProcessingProgress::Idle => None,
            ProcessingProgress::Animating { percent } | ProcessingProgress::Capped { percent } => {
                Some(percent)
            }
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, ProcessingProgress::Capped { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_before_start_are_ignored() {
        let mut progress = ProcessingProgress::default();
        assert_eq!(progress.tick(5.0, 90.0), ProgressStep::Ignored);
        assert_eq!(progress.percent(), None);
    }

    #[test]
    fn overshoot_is_clamped_before_reporting() {
        let mut progress = ProcessingProgress::Animating { percent: 85.0 };
        assert_eq!(progress.tick(8.0, 90.0), ProgressStep::Capped(90.0));
        assert!(progress.is_capped());
        assert_eq!(progress.tick(8.0, 90.0), ProgressStep::Ignored);
        assert_eq!(progress.percent(), Some(90.0));
    }

    #[test]
    fn out_of_range_increments_are_bounded() {
        let mut progress = ProcessingProgress::default();
        assert!(progress.start());
        assert!(!progress.start());
        assert_eq!(progress.tick(-3.0, 90.0), ProgressStep::Advanced(0.0));
        assert_eq!(progress.tick(f64::NAN, 90.0), ProgressStep::Advanced(0.0));
        assert_eq!(progress.tick(250.0, 90.0), ProgressStep::Advanced(10.0));
    }

    #[test]
    fn cap_never_reaches_full_bar() {
        let mut progress = ProcessingProgress::Animating { percent: 95.0 };
        assert_eq!(progress.tick(9.0, 100.0), ProgressStep::Capped(99.0));
        assert_eq!(progress.percent(), Some(99.0));
    }
}
