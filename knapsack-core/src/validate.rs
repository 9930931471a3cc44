use crate::{
    config::SolverConfig,
    error::{InvalidItems, SolveError, SolveResult},
    Item,
};

/// Checks an instance against the configured limits before anything is allocated.
/// Rules are applied in a fixed order and the first violation is reported.
pub(crate) fn validate_inputs<'a>(
    items: Option<&'a [Item]>,
    capacity: i32,
    config: &SolverConfig,
) -> SolveResult<&'a [Item]> {
    let items = items.ok_or(SolveError::InvalidItems(InvalidItems::Missing))?;
    if items.is_empty() {
        return Err(SolveError::InvalidItems(InvalidItems::Empty));
    }
    if items.len() > config.max_items {
        return Err(SolveError::TooManyItems {
            count: items.len(),
            max: config.max_items,
        });
    }
    if capacity < 0 || capacity > config.max_capacity {
        return Err(SolveError::InvalidCapacity {
            capacity,
            max: config.max_capacity,
        });
    }
    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| !config.weight_policy.accepts(item.weight))
    {
        return Err(SolveError::InvalidItems(InvalidItems::Weight {
            index,
            weight: item.weight,
        }));
    }
    Ok(items)
}
