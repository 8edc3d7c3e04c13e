//! Quick cultural algorithm performance test

use knights_tour::{
    compute::{BacktrackingSolver, CulturalSolver, TourSolver},
    schema::CulturalConfig,
};
use std::time::Instant;

fn main() {
    println!("=== Cultural Algorithm Performance Test ===\n");

    // Test different board sizes
    for board_size in [5, 6, 8] {
        println!("Board size: {}x{}", board_size, board_size);

        let config = CulturalConfig {
            population_size: 150,
            max_generations: 500,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut solver = CulturalSolver::with_config(board_size, config);
        let result = solver.run(0, 0);
        let elapsed = start.elapsed();

        let total_evals = solver.generations() * solver.config().population_size;
        let evals_per_sec = total_evals as f64 / elapsed.as_secs_f64();

        println!("  Generations:    {}", solver.generations());
        println!("  Evaluations:    {}", total_evals);
        println!("  Elapsed:        {:.2}s", elapsed.as_secs_f64());
        println!("  Evals/sec:      {:.1}", evals_per_sec);
        println!("  Best:           {}", result.progress_label());
        println!("  Stop reason:    {:?}", solver.stop_reason());
        println!();
    }

    println!("=== Backtracking Scalability (from corner) ===\n");

    for board_size in [8, 16, 32, 50] {
        let start = Instant::now();
        let mut solver = BacktrackingSolver::new(board_size);
        let result = solver.run(0, 0);
        let elapsed = start.elapsed();

        println!(
            "{}x{}: success={} nodes={} backtracks={} in {:.4}s",
            board_size,
            board_size,
            result.success,
            solver.nodes_visited(),
            solver.backtracks(),
            elapsed.as_secs_f64()
        );
    }
}
