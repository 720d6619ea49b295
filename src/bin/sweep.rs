//! Aim sweep tool
//!
//! Sweeps horizontal drag distances through the headless runner, many
//! keeper seeds per offset, and reports the goal rate per lateral offset
//! as a CSV table plus a PNG heat strip (red = saved, green = scored).
//!
//! Usage: sweep [--step PX] [--seeds N] [--out DIR]

use bevy::math::Vec2;
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::path::PathBuf;

use spotkick::simulation::{ShotScript, run_shootout};
use spotkick::{DRAG_SCALE, SHOT_SCALE};

/// Sweep range in drag pixels, either side of center
const SWEEP_RANGE: f32 = 250.0;

/// Heat strip cell size in pixels
const CELL_W: u32 = 8;
const CELL_H: u32 = 48;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let step = args
        .iter()
        .position(|a| a == "--step")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<f32>().ok()))
        .unwrap_or(10.0);

    let seeds = args
        .iter()
        .position(|a| a == "--seeds")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u64>().ok()))
        .unwrap_or(48);

    let out_dir = args
        .iter()
        .position(|a| a == "--out")
        .and_then(|i| args.get(i + 1).cloned())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sweep"));

    let mut offsets = Vec::new();
    let mut dx = -SWEEP_RANGE;
    while dx <= SWEEP_RANGE {
        offsets.push(dx);
        dx += step;
    }

    println!("Spotkick aim sweep");
    println!("==================");
    println!(
        "{} offsets, {} keeper seeds each ({} shots total)",
        offsets.len(),
        seeds,
        offsets.len() as u64 * seeds
    );

    // Each offset is independent: one headless shootout per keeper seed
    let rates: Vec<(f32, f32)> = offsets
        .par_iter()
        .map(|&dx| {
            let script = ShotScript {
                drag_start: Vec2::new(400.0, 400.0),
                drag_end: Vec2::new(400.0 + dx, 400.0),
            };
            let mut goals = 0u32;
            for seed in 0..seeds {
                let tally = run_shootout(seed, &[script]);
                goals += tally.goals;
            }
            (dx, goals as f32 / seeds as f32)
        })
        .collect();

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        eprintln!("Failed to create output dir: {}", e);
        std::process::exit(1);
    }

    // CSV: drag pixels, preview-scale lateral, shot magnitude, goal rate
    let csv_path = out_dir.join("sweep.csv");
    let mut csv = String::from("drag_px,lateral,shot_magnitude,goal_rate\n");
    for (dx, rate) in &rates {
        let lateral = dx * DRAG_SCALE;
        csv.push_str(&format!(
            "{:.1},{:.3},{:.3},{:.3}\n",
            dx,
            lateral,
            (lateral * SHOT_SCALE).abs(),
            rate
        ));
    }
    if let Err(e) = std::fs::write(&csv_path, csv) {
        eprintln!("Failed to write {}: {}", csv_path.display(), e);
        std::process::exit(1);
    }

    // PNG heat strip: one cell per offset
    let png_path = out_dir.join("sweep.png");
    let mut img = RgbImage::new(rates.len() as u32 * CELL_W, CELL_H);
    for (i, (_, rate)) in rates.iter().enumerate() {
        let r = (220.0 * (1.0 - rate)) as u8 + 20;
        let g = (220.0 * rate) as u8 + 20;
        let color = Rgb([r, g, 40]);
        for x in 0..CELL_W {
            for y in 0..CELL_H {
                img.put_pixel(i as u32 * CELL_W + x, y, color);
            }
        }
    }
    if let Err(e) = img.save(&png_path) {
        eprintln!("Failed to write {}: {}", png_path.display(), e);
        std::process::exit(1);
    }

    println!("Wrote {}", csv_path.display());
    println!("Wrote {}", png_path.display());

    // Console summary at the interesting boundaries
    for (dx, rate) in &rates {
        let lateral = (dx * DRAG_SCALE * SHOT_SCALE).abs();
        if (lateral - 0.5).abs() < 0.06 || (lateral - 1.5).abs() < 0.06 {
            println!(
                "  drag {:+6.1} px  magnitude {:.2}  goal rate {:.0}%",
                dx,
                lateral,
                rate * 100.0
            );
        }
    }
}
