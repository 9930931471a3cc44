#![deny(unsafe_code)]

mod config;
pub use config::*;
mod dp;
mod error;
pub use error::*;
pub mod ffi;
mod instance;
pub use instance::*;
mod reconstruct;
mod select;
mod solution;
pub use solution::*;
mod validate;
mod workspace;

use logging_timer::time;
use serde::{Deserialize, Serialize};
use validate::validate_inputs;
use workspace::Workspace;

#[repr(C)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: i32,
    pub value: i32,
}

impl Item {
    pub const fn new(weight: i32, value: i32) -> Self {
        Self { weight, value }
    }
}

impl From<(i32, i32)> for Item {
    fn from((weight, value): (i32, i32)) -> Self {
        Self { weight, value }
    }
}

/// Exact 0/1 knapsack solver. Holds no state between calls, so one solver can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> SolveResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, items: &[Item], capacity: i32) -> SolveResult<Solution> {
        self.run(Some(items), capacity)
    }

    /// Status-code form of `solve`. `out` is reset before anything else happens and is
    /// only populated when `Status::Ok` is returned.
    pub fn solve_status(
        &self,
        items: Option<&[Item]>,
        capacity: i32,
        out: Option<&mut Solution>,
    ) -> Status {
        let Some(out) = out else {
            return SolveError::MissingOutput.status();
        };
        out.release();
        match self.run(items, capacity) {
            Ok(solution) => {
                *out = solution;
                Status::Ok
            }
            Err(e) => {
                log::debug!("solve rejected: {}", e);
                e.status()
            }
        }
    }

    #[time]
    fn run(&self, items: Option<&[Item]>, capacity: i32) -> SolveResult<Solution> {
        let items = validate_inputs(items, capacity, &self.config)?;
        let mut workspace = Workspace::allocate(
            items.len(),
            capacity as usize,
            self.config.tie_break.tracks_weight(),
        )?;
        dp::fill(items, &mut workspace)?;
        let terminal = select::select_terminal(&workspace);
        reconstruct::reconstruct(items, &workspace.decisions, terminal)
    }
}

/// Solves with the default configuration.
pub fn solve(items: &[Item], capacity: i32) -> SolveResult<Solution> {
    Solver::default().solve(items, capacity)
}

pub fn solve_status(items: Option<&[Item]>, capacity: i32, out: Option<&mut Solution>) -> Status {
    Solver::default().solve_status(items, capacity, out)
}
