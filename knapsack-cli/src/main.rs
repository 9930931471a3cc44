use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knapsack_core::{Solution, Solver, SolverConfig};
use knapsack_utils::{
    json_error_report, json_report, load_config, load_instance, load_solution, text_report,
};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("knapsack")
        .about("Solves 0/1 knapsack instances exactly")
        .arg_required_else_help(true)
        .arg(
            arg!(--verbose "Log solver timings to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves an instance")
                .arg(
                    arg!(<INPUT> "Instance text or json, path to a file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print a machine-readable report").action(ArgAction::SetTrue))
                .arg(
                    arg!(--config [CONFIG] "Solver config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies that a solution is feasible and optimal")
                .arg(
                    arg!(<INPUT> "Instance text or json, path to a file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Solver config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(input: String, config: Option<String>, json: bool) -> Result<()> {
    match (solve_instance(&input, config.as_deref()), json) {
        (Ok(solution), true) => println!("{}", json_report(&solution)?),
        (Ok(solution), false) => print!("{}", text_report(&solution)),
        (Err(e), true) => {
            println!("{}", json_error_report(&e.to_string())?);
            return Err(e);
        }
        (Err(e), false) => return Err(e),
    }
    Ok(())
}

pub fn verify(input: String, solution: String, config: Option<String>) -> Result<()> {
    if input == "-" && solution == "-" {
        return Err(anyhow!("INPUT and SOLUTION cannot both be read from stdin"));
    }
    let solver = build_solver(config.as_deref())?;
    let instance = load_instance(&input)?;
    let solution = load_solution(&solution)?;

    instance
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    let optimum = instance
        .solve(&solver)
        .map_err(|e| anyhow!("Knapsack solve failed: {}", e))?;
    if solution.optimal_value != optimum.optimal_value {
        return Err(anyhow!(
            "Invalid solution: value ({}) is not the optimum ({})",
            solution.optimal_value,
            optimum.optimal_value
        ));
    }
    println!("Solution is valid");
    Ok(())
}

fn build_solver(config: Option<&str>) -> Result<Solver> {
    let config = match config {
        Some(src) => load_config(src)?,
        None => SolverConfig::default(),
    };
    Ok(Solver::new(config)?)
}

fn solve_instance(input: &str, config: Option<&str>) -> Result<Solution> {
    let solver = build_solver(config)?;
    let instance = load_instance(input)?;
    log::info!(
        "solving {} items with capacity {}",
        instance.items.len(),
        instance.capacity
    );
    instance
        .solve(&solver)
        .map_err(|e| anyhow!("Knapsack solve failed: {}", e))
}
