use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Terminal {
    pub capacity: usize,
    pub value: i32,
}

/// Picks the cell to backtrack from. With weight rows the best (value, weight) pair over
/// every capacity wins, earliest capacity first; without them the capacity cell is used.
pub(crate) fn select_terminal(workspace: &Workspace) -> Terminal {
    let values = workspace.values.last();
    let terminal = match workspace.weights.as_ref() {
        Some(weights) => {
            let weights = weights.last();
            let mut best = 0;
            for capacity in 1..workspace.width {
                if values[capacity] > values[best]
                    || (values[capacity] == values[best] && weights[capacity] < weights[best])
                {
                    best = capacity;
                }
            }
            Terminal {
                capacity: best,
                value: values[best],
            }
        }
        None => Terminal {
            capacity: workspace.width - 1,
            value: values[workspace.width - 1],
        },
    };
    log::debug!(
        "selected terminal cell {} with value {}",
        terminal.capacity,
        terminal.value
    );
    terminal
}
