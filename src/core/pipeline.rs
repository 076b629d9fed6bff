//! Two-tier check orchestration.
//!
//! Every fast check runs. The slow tier runs only when the fast tier left no
//! errors behind; once it starts, all of its checks run regardless of each
//! other's outcome.

use crate::core::check::{CheckContext, CheckDescriptor, Tier};
use crate::core::state::ValidationState;
use serde::Serialize;

/// Where a run ended up before reporting.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Start,
    FastChecks,
    /// Fast tier produced errors; slow tier skipped.
    Abort,
    SlowChecks,
    Report,
}

/// Outcome of one pipeline run, handed to the reporter.
#[derive(Debug)]
pub struct PipelineRun {
    pub state: ValidationState,
    pub slow_tier_ran: bool,
    /// Names of executed checks, in execution order.
    pub executed: Vec<&'static str>,
    /// Phases visited, in order.
    pub phases: Vec<Phase>,
}

pub struct Pipeline {
    checks: Vec<CheckDescriptor>,
}

impl Pipeline {
    pub fn new(checks: Vec<CheckDescriptor>) -> Self {
        Self { checks }
    }

    /// The fixed production check set.
    pub fn standard() -> Self {
        Self::new(crate::checks::registry())
    }

    pub fn checks(&self) -> &[CheckDescriptor] {
        &self.checks
    }

    pub fn run(&self, ctx: &CheckContext<'_>) -> PipelineRun {
        let mut state = ValidationState::new();
        let mut executed = Vec::new();
        let mut phases = vec![Phase::Start, Phase::FastChecks];

        self.run_tier(Tier::Fast, ctx, &mut state, &mut executed);

        let slow_tier_ran = if state.has_errors() {
            phases.push(Phase::Abort);
            false
        } else {
            phases.push(Phase::SlowChecks);
            self.run_tier(Tier::Slow, ctx, &mut state, &mut executed);
            true
        };

        phases.push(Phase::Report);
        PipelineRun {
            state,
            slow_tier_ran,
            executed,
            phases,
        }
    }

    fn run_tier(
        &self,
        tier: Tier,
        ctx: &CheckContext<'_>,
        state: &mut ValidationState,
        executed: &mut Vec<&'static str>,
    ) {
        for check in self.checks.iter().filter(|c| c.tier == tier) {
            ctx.console.trace_check(check.name);
            check.run(ctx, state);
            executed.push(check.name);
        }
    }
}
