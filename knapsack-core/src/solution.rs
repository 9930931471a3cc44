use serde::{Deserialize, Serialize};

/// Outcome of a successful solve. Owns its index list outright.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub optimal_value: i32,
    /// Strictly ascending indices into the solved item sequence.
    pub selected_indices: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the index list and zeroes the value. Safe to call any number of times.
    pub fn release(&mut self) {
        self.optimal_value = 0;
        self.selected_indices = Vec::new();
    }

    pub fn is_empty(&self) -> bool {
        self.selected_indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_indices.len()
    }
}
