//! Headless runs of the explosion at several frame rates and seeds.
//! Reports when the galaxy spawned and how far the explosion had reached.

use nebula_core::{length, SimConfig};
use nebula_sim::universe::Simulation;

/// Clock value each run is driven to
const RUN_UNTIL: f64 = 15.0;

struct RunReport {
    seed: u64,
    fps: f64,
    frames: u64,
    spawn_frame: Option<u64>,
    spawn_clock: f64,
    explosion_radius: f32,
    galaxy_particles: usize,
    galaxy_min_radius: f32,
    galaxy_max_radius: f32,
}

fn run(seed: u64, fps: f64) -> RunReport {
    let config = SimConfig { seed, ..SimConfig::default() };
    let params = config.parameters.clone();
    let mut sim = Simulation::new(config);
    let delta = 1.0 / fps;

    let mut frames = 0u64;
    let mut spawn_frame = None;
    let mut spawn_clock = 0.0;
    while sim.elapsed() < RUN_UNTIL {
        frames += 1;
        if sim.tick(delta, &params).galaxy_spawned {
            spawn_frame = Some(frames);
            spawn_clock = sim.elapsed();
        }
    }

    let (galaxy_particles, galaxy_min_radius, galaxy_max_radius) = match sim.galaxy() {
        Some(g) => {
            // Walk the flat buffer the way a vertex upload would see it
            let radii: Vec<f32> = g
                .buffers()
                .flat_positions()
                .chunks_exact(3)
                .map(|p| length([p[0], p[1], p[2]]))
                .collect();
            let min = radii.iter().copied().fold(f32::MAX, f32::min);
            let max = radii.iter().copied().fold(0.0, f32::max);
            (g.len(), min, max)
        }
        None => (0, 0.0, 0.0),
    };

    RunReport {
        seed,
        fps,
        frames,
        spawn_frame,
        spawn_clock,
        explosion_radius: sim.explosion().buffers().max_radius(),
        galaxy_particles,
        galaxy_min_radius,
        galaxy_max_radius,
    }
}

fn main() {
    let seeds = [42u64, 1000, 7919];
    let frame_rates = [24.0, 30.0, 60.0, 144.0, 240.0];

    eprintln!(
        "Simulating {} runs to clock {:.0}...",
        seeds.len() * frame_rates.len(),
        RUN_UNTIL
    );

    let reports: Vec<RunReport> = seeds
        .iter()
        .flat_map(|&seed| frame_rates.iter().map(move |&fps| run(seed, fps)))
        .collect();

    println!("════════════════════════════════════════════════════════════════════════");
    println!(
        "{:>6} {:>5} {:>7} {:>12} {:>10} {:>10} {:>9} {:>15}",
        "seed", "fps", "frames", "spawn frame", "spawn t", "explosion", "galaxy", "galaxy radii"
    );
    println!("════════════════════════════════════════════════════════════════════════");
    for r in &reports {
        let spawn = r
            .spawn_frame
            .map_or_else(|| "never".to_string(), |f| f.to_string());
        println!(
            "{:>6} {:>5.0} {:>7} {:>12} {:>10.4} {:>10.1} {:>9} {:>7.1}-{:<7.1}",
            r.seed,
            r.fps,
            r.frames,
            spawn,
            r.spawn_clock,
            r.explosion_radius,
            r.galaxy_particles,
            r.galaxy_min_radius,
            r.galaxy_max_radius,
        );
    }

    let missed = reports.iter().filter(|r| r.spawn_frame.is_none()).count();
    eprintln!("Done. {} of {} runs spawned a galaxy.", reports.len() - missed, reports.len());
}
