//! Headless shootout simulator
//!
//! Runs a batch of penalty kicks through the real system chain without a
//! window and prints the outcome of each shot plus the final tally.
//!
//! Usage: simulate [--shots N] [--seed S] [--aim-seed S]

use spotkick::scoring::Outcome;
use spotkick::simulation::{random_scripts, run_shootout};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let shots = args
        .iter()
        .position(|a| a == "--shots")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<usize>().ok()))
        .unwrap_or(10);

    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u64>().ok()))
        .unwrap_or_else(rand::random);

    let aim_seed = args
        .iter()
        .position(|a| a == "--aim-seed")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u64>().ok()))
        .unwrap_or(seed ^ 0x5eed);

    println!("Spotkick shootout simulation");
    println!("============================");
    println!("Shots: {}  keeper seed: {}  aim seed: {}", shots, seed, aim_seed);
    println!();

    let scripts = random_scripts(shots, aim_seed);
    let tally = run_shootout(seed, &scripts);

    for (i, (script, outcome)) in scripts.iter().zip(tally.outcomes.iter()).enumerate() {
        let delta = script.drag_end - script.drag_start;
        let lateral = delta.x * spotkick::DRAG_SCALE;
        println!(
            "Shot {:>2}: drag ({:+6.1}, {:+6.1}) px  lateral {:+.2}  -> {}",
            i + 1,
            delta.x,
            delta.y,
            lateral,
            match outcome {
                Outcome::Goal => "GOAL",
                Outcome::Save => "SAVED",
            }
        );
    }

    println!();
    println!(
        "Final: {} goals, {} saves ({:.0}% scored)",
        tally.goals,
        tally.saves,
        tally.goal_rate() * 100.0
    );
}
