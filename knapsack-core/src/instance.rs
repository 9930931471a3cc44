use crate::{error::SolveResult, Item, Solution, Solver};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: i32,
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: i32, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    pub fn solve(&self, solver: &Solver) -> SolveResult<Solution> {
        solver.solve(&self.items, self.capacity)
    }

    /// Total weight and value of a selection, summed wide enough that no selection overflows.
    pub fn evaluate(&self, indices: &[usize]) -> Result<(i64, i64)> {
        let mut seen = HashSet::with_capacity(indices.len());
        let mut total_weight = 0i64;
        let mut total_value = 0i64;
        for &index in indices {
            let item = self
                .items
                .get(index)
                .ok_or_else(|| anyhow!("Item ({}) is out of bounds", index))?;
            if !seen.insert(index) {
                return Err(anyhow!("Item ({}) is selected more than once", index));
            }
            total_weight += i64::from(item.weight);
            total_value += i64::from(item.value);
        }
        Ok((total_weight, total_value))
    }

    /// Checks that a solution is well formed, feasible and reports its own value.
    /// Optimality is not checked here.
    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        if !solution
            .selected_indices
            .windows(2)
            .all(|pair| pair[0] < pair[1])
        {
            return Err(anyhow!("Selected indices are not strictly ascending"));
        }
        let (total_weight, total_value) = self.evaluate(&solution.selected_indices)?;
        if total_weight > i64::from(self.capacity) {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        if total_value != i64::from(solution.optimal_value) {
            return Err(anyhow!(
                "Reported value ({}) does not match the value of the selection ({})",
                solution.optimal_value,
                total_value
            ));
        }
        Ok(())
    }
}
