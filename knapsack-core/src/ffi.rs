//! C ABI over [`Solver::solve_status`] and [`Solution::release`].
//!
//! Items are read as a `(weight, value)` array of [`Item`], which is `repr(C)`.
//! A populated [`KnapsackResult`] owns its index buffer until
//! [`knapsack_result_free`] is called on it.

use crate::{Item, Solution, SolveError, Solver, Status};

/// C-compatible solve result. All fields are zero/null when empty.
#[repr(C)]
#[derive(Debug)]
pub struct KnapsackResult {
    /// Total value of the selected items.
    pub optimal_value: i32,
    /// Number of entries behind `selected_indices`.
    pub selected_count: usize,
    /// Strictly ascending item indices, or null when nothing was selected.
    pub selected_indices: *mut usize,
}

impl KnapsackResult {
    pub const EMPTY: Self = Self {
        optimal_value: 0,
        selected_count: 0,
        selected_indices: std::ptr::null_mut(),
    };

    fn from_solution(solution: Solution) -> Self {
        let selected_count = solution.selected_indices.len();
        let selected_indices = if selected_count == 0 {
            std::ptr::null_mut()
        } else {
            Box::into_raw(solution.selected_indices.into_boxed_slice()) as *mut usize
        };
        Self {
            optimal_value: solution.optimal_value,
            selected_count,
            selected_indices,
        }
    }

    /// Borrows the index list. Empty when the buffer is null.
    #[allow(unsafe_code)]
    pub fn indices(&self) -> &[usize] {
        if self.selected_indices.is_null() {
            return &[];
        }
        // SAFETY: a non-null buffer was produced by `from_solution` with this length.
        unsafe { std::slice::from_raw_parts(self.selected_indices, self.selected_count) }
    }
}

impl Default for KnapsackResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Solves with the default configuration and returns a [`Status`] code.
///
/// `items` must point to `count` items. A null `items` is reported as invalid items.
/// `out_result` is overwritten with an empty result before anything else and is only
/// populated on `Status::Ok`. A previous buffer held by `out_result` is not freed.
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn knapsack_solve_status(
    items: *const Item,
    count: usize,
    capacity: i32,
    out_result: *mut KnapsackResult,
) -> i32 {
    if out_result.is_null() {
        return SolveError::MissingOutput.status().code();
    }
    // SAFETY: out_result is non-null and writable per caller contract.
    let out = unsafe { &mut *out_result };
    *out = KnapsackResult::EMPTY;

    let items = if items.is_null() {
        None
    } else {
        // SAFETY: items points to count valid knapsack items.
        Some(unsafe { std::slice::from_raw_parts(items, count) })
    };
    let mut solution = Solution::new();
    let status = Solver::default().solve_status(items, capacity, Some(&mut solution));
    if status.is_ok() {
        *out = KnapsackResult::from_solution(solution);
    }
    status.code()
}

/// Boolean form of [`knapsack_solve_status`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn knapsack_solve(
    items: *const Item,
    count: usize,
    capacity: i32,
    out_result: *mut KnapsackResult,
) -> bool {
    knapsack_solve_status(items, count, capacity, out_result) == Status::Ok.code()
}

/// Releases the index buffer and zeroes the result. Null and empty results are no-ops,
/// so calling this twice is safe.
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn knapsack_result_free(result: *mut KnapsackResult) {
    if result.is_null() {
        return;
    }
    // SAFETY: result is non-null and writable per caller contract.
    let result = unsafe { &mut *result };
    if !result.selected_indices.is_null() {
        let slice =
            std::ptr::slice_from_raw_parts_mut(result.selected_indices, result.selected_count);
        // SAFETY: the buffer came from `Box::<[usize]>::into_raw` with this length and
        // has not been freed, since freeing nulls the pointer.
        drop(unsafe { Box::from_raw(slice) });
    }
    *result = KnapsackResult::EMPTY;
}
