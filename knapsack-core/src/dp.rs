use crate::{
    error::{SolveError, SolveResult},
    workspace::Workspace,
    Item,
};
use logging_timer::time;

/// Sums in 64 bits and narrows, so an out-of-range total is detected instead of wrapped.
fn checked_value_add(lhs: i32, rhs: i32) -> Option<i32> {
    i32::try_from(i64::from(lhs) + i64::from(rhs)).ok()
}

/// Fills the decision matrix item by item. Row `i` only ever reads row `i - 1`.
#[time]
pub(crate) fn fill(items: &[Item], workspace: &mut Workspace) -> SolveResult<()> {
    let Workspace {
        width,
        values,
        weights,
        decisions,
    } = workspace;
    let width = *width;

    for (index, item) in items.iter().enumerate() {
        values.carry_forward();
        if let Some(weights) = weights.as_mut() {
            weights.carry_forward();
        }

        let item_weight = item.weight as usize;
        for capacity in item_weight..width {
            let base = capacity - item_weight;
            let candidate = checked_value_add(values.prev[base], item.value).ok_or(
                SolveError::ArithmeticOverflow {
                    item: index,
                    capacity,
                },
            )?;
            let current = values.curr[capacity];

            let improves = match weights.as_mut() {
                Some(weights) => {
                    let candidate_weight = weights.prev[base] + item_weight;
                    let better = candidate > current
                        || (candidate == current && candidate_weight < weights.curr[capacity]);
                    if better {
                        weights.curr[capacity] = candidate_weight;
                    }
                    better
                }
                None => candidate > current,
            };
            if improves {
                values.curr[capacity] = candidate;
                decisions.mark(index, capacity);
            }
        }

        values.swap();
        if let Some(weights) = weights.as_mut() {
            weights.swap();
        }
    }
    Ok(())
}
