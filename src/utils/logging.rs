use log::{Level, log_enabled, warn};
use std::time::Instant;

use crate::collision::resolver::ResolutionReport;

/// Simple scoped timer for tracing the phases of a world step.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Emits the non-convergence diagnostic for a capped relaxation run.
pub fn warn_if_unconverged(report: &ResolutionReport, particle_count: usize) {
    if report.converged {
        return;
    }
    warn!(
        "collision resolution hit the {}-pass cap with {} particles \
         ({} corrections, {} degenerate)",
        report.passes, particle_count, report.corrections, report.degenerate
    );
}
