// Demonstration: learn a policy on a randomly generated negative grid.
//
// Build/run from this repo root:
//   RUST_LOG=debug cargo run --example q_learning_demo -- --episodes 10000 --seed 42

use std::env;

use gridq::algorithms::rl::{PolicyGrid, PolicyRollout, ValueGrid};
use gridq::{GridFactory, QLearningConfig, QLearningTrainer, State};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let factory = GridFactory {
        height: 8,
        width: 8,
        start: State::new(0, 0),
        goal: State::new(7, 7),
        obstacles: 10,
        step_cost: Some(-0.1),
    };
    let mut grid = match factory.build(&mut StdRng::seed_from_u64(seed)) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Cannot build grid: {}", e);
            std::process::exit(2);
        }
    };

    println!("rewards:");
    print!("{}", ValueGrid::new(grid.rewards(), grid.height(), grid.width()));

    let config = QLearningConfig {
        episodes,
        start: factory.start,
        seed: Some(seed),
        ..QLearningConfig::default()
    };
    let mut trainer = QLearningTrainer::new(config);
    let report = trainer.train(&mut grid);

    println!("update counts:");
    print!(
        "{}",
        ValueGrid::new(&report.update_distribution, grid.height(), grid.width())
    );
    println!("final values:");
    print!("{}", ValueGrid::new(&report.values, grid.height(), grid.width()));
    println!("final policy:");
    print!("{}", PolicyGrid::new(&report.policy, grid.height(), grid.width()));

    let max_steps = grid.height() * grid.width();
    let rollout = PolicyRollout::follow(&mut grid, &report.policy, factory.start, max_steps);
    println!(
        "greedy rollout: {} steps, reward {:.2}, terminal: {}",
        rollout.steps(),
        rollout.total_reward,
        rollout.reached_terminal
    );
    println!("{}", report);
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
