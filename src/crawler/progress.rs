//! Completed/total progress lines for the fan-in loops

/// Number of progress lines logged over a whole phase
const PROGRESS_STEPS: usize = 20;

/// Counts resolved tasks and logs `label: done/total` at regular steps
///
/// Every completion is logged at debug level; every `total / 20` completions
/// (and the last one) are logged at info level.
#[derive(Debug)]
pub struct Progress {
    label: &'static str,
    total: usize,
    step: usize,
    done: usize,
}

impl Progress {
    pub fn new(label: &'static str, total: usize) -> Self {
        Self {
            label,
            total,
            step: (total / PROGRESS_STEPS).max(1),
            done: 0,
        }
    }

    /// Records one resolved task; returns whether an info line was logged
    pub fn advance(&mut self) -> bool {
        self.done += 1;

        if self.done % self.step == 0 || self.done == self.total {
            tracing::info!("{}: {}/{}", self.label, self.done, self.total);
            true
        } else {
            tracing::debug!("{}: {}/{}", self.label, self.done, self.total);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_phase_reports_every_task() {
        let mut progress = Progress::new("Fetching car links", 3);
        assert!((0..3).all(|_| progress.advance()));
    }

    #[test]
    fn test_large_phase_reports_in_steps() {
        let mut progress = Progress::new("Parsing car details", 1000);
        let reported = (0..1000).filter(|_| progress.advance()).count();
        assert_eq!(reported, PROGRESS_STEPS);
    }

    #[test]
    fn test_last_task_is_always_reported() {
        let mut progress = Progress::new("Parsing car details", 45);
        let reported: Vec<bool> = (0..45).map(|_| progress.advance()).collect();
        assert!(reported[44]);
        assert!(reported[1]);
        assert!(!reported[2]);
    }
}
