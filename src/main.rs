//! Knight's Tour CLI - Run solvers from JSON configuration.

use std::path::PathBuf;

use knights_tour::{
    compute::{BacktrackingSolver, Comparison, CulturalSolver, TourSolver, compare},
    schema::{AlgorithmChoice, RunConfig, TourResult},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [algorithm]", args[0]);
        eprintln!();
        eprintln!("Search for a Knight's Tour using settings from a JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration file");
        eprintln!("  algorithm    backtracking | cultural | compare (overrides the config)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let mut config = RunConfig::from_path(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", config_path.display(), e);
        std::process::exit(1);
    });

    if let Some(choice) = args.get(2) {
        config.algorithm = choice.parse().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let n = config.board_size;
    let (row, col) = config.start;

    println!("Knight's Tour");
    println!("=============");
    println!("Board: {}x{} ({} squares)", n, n, config.solver().total_squares());
    println!("Start: ({}, {})", row, col);
    println!();

    match config.algorithm {
        AlgorithmChoice::Backtracking => {
            let result = BacktrackingSolver::new(n).run(row, col);
            print_result(&result);
        }
        AlgorithmChoice::Cultural => {
            let mut solver = CulturalSolver::with_config(n, config.cultural.clone());
            let max_generations = config.cultural.max_generations;
            let result = solver.run_with_callback(row, col, |progress| {
                // Print progress every 10%
                if progress.generation % (max_generations / 10).max(1) == 0 {
                    println!(
                        "  Generation {}/{}: best={}/{}, avg={:.2}",
                        progress.generation,
                        progress.max_generations,
                        progress.best_score,
                        progress.total_squares,
                        progress.avg_score
                    );
                }
            });
            println!();
            print_result(&result);
        }
        AlgorithmChoice::Compare => {
            let comparison = compare(n, config.start, &config.cultural);
            print_comparison(&comparison);
        }
    }
}

fn print_result(result: &TourResult) {
    println!("{}", result.algorithm);
    println!("  Success: {}", if result.success { "Yes" } else { "No" });
    println!("  Steps: {}", result.progress_label());
    println!("  Time: {:.4}s", result.time);
    if !result.path.is_empty() {
        let squares: Vec<String> = result.path.iter().map(|sq| sq.to_string()).collect();
        println!("  Path: {}", squares.join(" -> "));
    }
}

fn print_comparison(comparison: &Comparison) {
    for result in comparison.results() {
        print_result(result);
        println!();
    }
    println!("Faster: {}", comparison.faster());
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
