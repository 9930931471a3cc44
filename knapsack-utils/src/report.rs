use crate::jsonify;
use knapsack_core::Solution;
use serde::Serialize;

#[derive(Serialize)]
struct OkReport<'a> {
    status: &'static str,
    optimal_value: i32,
    selected_indices: &'a [usize],
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    status: &'static str,
    message: &'a str,
}

pub fn text_report(solution: &Solution) -> String {
    let indices = solution
        .selected_indices
        .iter()
        .map(|i| format!(" {}", i))
        .collect::<String>();
    format!(
        "Optimal value: {}\nSelected indices ({}):{}\n",
        solution.optimal_value,
        solution.len(),
        indices
    )
}

pub fn json_report(solution: &Solution) -> serde_json::Result<String> {
    jsonify(&OkReport {
        status: "ok",
        optimal_value: solution.optimal_value,
        selected_indices: &solution.selected_indices,
    })
}

pub fn json_error_report(message: &str) -> serde_json::Result<String> {
    jsonify(&ErrorReport {
        status: "error",
        message,
    })
}
