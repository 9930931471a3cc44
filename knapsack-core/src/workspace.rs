use crate::error::{SolveError, SolveResult};

fn zeroed<T: Copy + Default>(buffer: &'static str, len: usize) -> SolveResult<Vec<T>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| SolveError::AllocationFailure { buffer, len })?;
    cells.resize(len, T::default());
    Ok(cells)
}

/// Two rows of `width` cells. `prev` holds the row of the last completed item.
pub(crate) struct Rows<T> {
    pub prev: Vec<T>,
    pub curr: Vec<T>,
}

impl<T: Copy + Default> Rows<T> {
    fn allocate(buffer: &'static str, width: usize) -> SolveResult<Self> {
        Ok(Self {
            prev: zeroed(buffer, width)?,
            curr: zeroed(buffer, width)?,
        })
    }

    /// Seeds the next row with the previous optimum so cells the item cannot reach keep it.
    pub fn carry_forward(&mut self) {
        self.curr.copy_from_slice(&self.prev);
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    pub fn last(&self) -> &[T] {
        &self.prev
    }
}

/// Per-item, per-capacity take flags stored row-major in a single buffer.
pub(crate) struct DecisionMatrix {
    rows: usize,
    width: usize,
    cells: Vec<bool>,
}

impl DecisionMatrix {
    fn allocate(rows: usize, width: usize) -> SolveResult<Self> {
        let len = rows
            .checked_mul(width)
            .ok_or(SolveError::DimensionOverflow { count: rows, width })?;
        Ok(Self {
            rows,
            width,
            cells: zeroed("decision matrix", len)?,
        })
    }

    fn offset(&self, item: usize, capacity: usize) -> usize {
        assert!(
            item < self.rows && capacity < self.width,
            "decision cell ({}, {}) outside {} x {} matrix",
            item,
            capacity,
            self.rows,
            self.width
        );
        item * self.width + capacity
    }

    pub fn is_taken(&self, item: usize, capacity: usize) -> bool {
        self.cells[self.offset(item, capacity)]
    }

    pub fn mark(&mut self, item: usize, capacity: usize) {
        let offset = self.offset(item, capacity);
        self.cells[offset] = true;
    }
}

/// Scratch buffers for a single solve. Dropped on every exit path.
pub(crate) struct Workspace {
    pub width: usize,
    pub values: Rows<i32>,
    pub weights: Option<Rows<usize>>,
    pub decisions: DecisionMatrix,
}

impl Workspace {
    pub fn allocate(count: usize, capacity: usize, track_weight: bool) -> SolveResult<Self> {
        let width = capacity
            .checked_add(1)
            .ok_or(SolveError::DimensionOverflow {
                count,
                width: capacity,
            })?;
        if count == 0 || count.checked_mul(width).is_none() {
            return Err(SolveError::DimensionOverflow { count, width });
        }
        log::debug!(
            "allocating workspace: {} items x {} cells (weight rows: {})",
            count,
            width,
            track_weight
        );

        let values = Rows::allocate("value row", width)?;
        let weights = if track_weight {
            Some(Rows::allocate("weight row", width)?)
        } else {
            None
        };
        let decisions = DecisionMatrix::allocate(count, width)?;
        Ok(Self {
            width,
            values,
            weights,
            decisions,
        })
    }
}
