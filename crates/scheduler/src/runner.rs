use std::num::NonZeroU64;
use std::path::Path;
use std::time::Duration;

use engine::{CycleSummary, ReconcileError, Reconciler};
use tracing::debug;

use crate::stop::StopSignal;
use crate::summary::{RunSummary, StopReason};

/// Runs a cycle repeatedly with a fixed pause between runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scheduler {
    interval: Duration,
    max_cycles: Option<NonZeroU64>,
}

impl Scheduler {
    /// Creates a scheduler pausing `interval` between the end of one cycle
    /// and the start of the next.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_cycles: None,
        }
    }

    /// Creates a scheduler with a whole-second interval.
    #[must_use]
    pub const fn every_secs(seconds: NonZeroU64) -> Self {
        Self::new(Duration::from_secs(seconds.get()))
    }

    /// Ends the run after `limit` cycles. `None` runs until stopped.
    #[must_use]
    pub const fn max_cycles(mut self, limit: Option<NonZeroU64>) -> Self {
        self.max_cycles = limit;
        self
    }

    /// Returns the pause between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs `cycle` until `stop` fires or the cycle limit is reached.
    ///
    /// The first cycle starts immediately unless `stop` has already fired.
    /// The first cycle error ends the run and is returned unchanged.
    pub fn run<F, E>(&self, mut cycle: F, stop: &StopSignal) -> Result<RunSummary, E>
    where
        F: FnMut() -> Result<CycleSummary, E>,
    {
        let mut summary = RunSummary::default();
        loop {
            if stop.is_stopped() {
                return Ok(summary.finish(StopReason::Stopped));
            }

            let outcome = cycle()?;
            summary.record_cycle(&outcome);
            debug!(
                target: "dirmirror::scheduler",
                cycle = summary.cycles(),
                noop = outcome.is_noop(),
                "cycle completed"
            );

            if let Some(limit) = self.max_cycles
                && summary.cycles() >= limit.get()
            {
                return Ok(summary.finish(StopReason::CycleLimit));
            }

            if stop.wait_timeout(self.interval) {
                return Ok(summary.finish(StopReason::Stopped));
            }
        }
    }

    /// Mirrors `source` into `replica` once per interval.
    pub fn run_reconciler(
        &self,
        reconciler: &Reconciler,
        source: &Path,
        replica: &Path,
        stop: &StopSignal,
    ) -> Result<RunSummary, ReconcileError> {
        self.run(|| reconciler.reconcile(source, replica), stop)
    }
}
