use engine::CycleSummary;

/// Why a scheduler run ended without error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StopReason {
    /// The stop signal fired.
    #[default]
    Stopped,
    /// The configured cycle limit was reached.
    CycleLimit,
}

/// Outcome of a completed scheduler run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    cycles: u64,
    totals: CycleSummary,
    stop_reason: StopReason,
}

impl RunSummary {
    /// Number of cycles that ran to completion.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Counters summed over every completed cycle.
    #[must_use]
    pub const fn totals(&self) -> &CycleSummary {
        &self.totals
    }

    /// Why the run ended.
    #[must_use]
    pub const fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    pub(crate) fn record_cycle(&mut self, cycle: &CycleSummary) {
        self.cycles += 1;
        self.totals.merge(cycle);
    }

    pub(crate) fn finish(mut self, reason: StopReason) -> Self {
        self.stop_reason = reason;
        self
    }
}
