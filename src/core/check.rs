//! Check descriptors and the context checks run against.

use crate::core::config::Config;
use crate::core::console::Console;
use crate::core::executor::CommandExecutor;
use crate::core::state::ValidationState;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Relative cost class of a check.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Structural and pattern checks over the file tree.
    Fast,
    /// Checks that delegate to the build toolchain.
    Slow,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Slow => write!(f, "slow"),
        }
    }
}

/// Read-only inputs shared by every check in a run.
pub struct CheckContext<'a> {
    pub root: &'a Path,
    pub config: &'a Config,
    pub executor: &'a dyn CommandExecutor,
    pub console: Console,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        root: &'a Path,
        config: &'a Config,
        executor: &'a dyn CommandExecutor,
        console: Console,
    ) -> Self {
        Self {
            root,
            config,
            executor,
            console,
        }
    }
}

/// Records findings into the state and returns whether the check came out clean.
pub type CheckFn = fn(&CheckContext<'_>, &mut ValidationState) -> bool;

#[derive(Clone, Copy)]
pub struct CheckDescriptor {
    pub name: &'static str,
    pub tier: Tier,
    pub procedure: CheckFn,
}

impl CheckDescriptor {
    pub const fn new(name: &'static str, tier: Tier, procedure: CheckFn) -> Self {
        Self {
            name,
            tier,
            procedure,
        }
    }

    pub fn run(&self, ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
        (self.procedure)(ctx, state)
    }
}

impl fmt::Debug for CheckDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish()
    }
}
