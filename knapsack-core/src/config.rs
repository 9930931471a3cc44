use crate::error::{SolveError, SolveResult};
use serde::{Deserialize, Serialize};

/// Hard ceiling on the number of items in one instance.
pub const MAX_ITEMS: usize = 100;
/// Hard ceiling on the knapsack capacity.
pub const MAX_CAPACITY: i32 = 100_000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Every weight must be at least 1.
    Positive,
    /// Zero weights are tolerated; negative weights are still rejected.
    NonNegative,
}

impl WeightPolicy {
    pub fn accepts(self, weight: i32) -> bool {
        match self {
            WeightPolicy::Positive => weight > 0,
            WeightPolicy::NonNegative => weight >= 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Among equal-value solutions prefer the lightest one.
    MinWeight,
    /// Backtrack from the capacity cell with no weight tracking.
    None,
}

impl TieBreak {
    pub fn tracks_weight(self) -> bool {
        self == TieBreak::MinWeight
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub max_items: usize,
    pub max_capacity: i32,
    pub weight_policy: WeightPolicy,
    pub tie_break: TieBreak,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            max_capacity: MAX_CAPACITY,
            weight_policy: WeightPolicy::Positive,
            tie_break: TieBreak::MinWeight,
        }
    }
}

impl SolverConfig {
    /// Limits may be tightened below the compiled ceilings but never raised above them.
    pub fn validate(&self) -> SolveResult<()> {
        if self.max_items == 0 || self.max_items > MAX_ITEMS {
            return Err(SolveError::InvalidConfig {
                reason: format!("max_items must be in [1, {}], got {}", MAX_ITEMS, self.max_items),
            });
        }
        if self.max_capacity < 0 || self.max_capacity > MAX_CAPACITY {
            return Err(SolveError::InvalidConfig {
                reason: format!(
                    "max_capacity must be in [0, {}], got {}",
                    MAX_CAPACITY, self.max_capacity
                ),
            });
        }
        Ok(())
    }
}
