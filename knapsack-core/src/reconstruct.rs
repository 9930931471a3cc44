use crate::{
    error::{SolveError, SolveResult},
    select::Terminal,
    workspace::DecisionMatrix,
    Item, Solution,
};
use logging_timer::time;

/// Walks the decision matrix from the last item back to the first, yielding taken items.
fn taken_items<'a>(
    items: &'a [Item],
    decisions: &'a DecisionMatrix,
    start: usize,
) -> impl Iterator<Item = usize> + 'a {
    let mut capacity = start;
    (0..items.len()).rev().filter(move |&index| {
        if decisions.is_taken(index, capacity) {
            capacity -= items[index].weight as usize;
            true
        } else {
            false
        }
    })
}

#[time]
pub(crate) fn reconstruct(
    items: &[Item],
    decisions: &DecisionMatrix,
    terminal: Terminal,
) -> SolveResult<Solution> {
    let count = taken_items(items, decisions, terminal.capacity).count();

    let mut selected_indices = Vec::new();
    selected_indices
        .try_reserve_exact(count)
        .map_err(|_| SolveError::AllocationFailure {
            buffer: "selected indices",
            len: count,
        })?;
    selected_indices.extend(taken_items(items, decisions, terminal.capacity));
    selected_indices.sort_unstable();

    Ok(Solution {
        optimal_value: terminal.value,
        selected_indices,
    })
}
