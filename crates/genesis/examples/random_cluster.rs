//! Seeded random cluster demo
//!
//! Synthesizes a cluster from a fixed seed, runs it through the engine
//! facade, and reports what survived. Same seed, same printout, every
//! run.
//!
//! Run with: cargo run --package genesis --example random_cluster

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use genesis::random::{random_system, SynthesisRanges};
use gravity::Simulation;

fn main() {
    println!("Random Cluster Demo\n");
    println!("{}", "=".repeat(60));

    let seed = 42;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let ranges = SynthesisRanges::drifting();

    let bodies = random_system(&mut rng, 30, &ranges);

    println!("\nSeed: {}", seed);
    println!("Synthesized {} bodies", bodies.len());
    println!(
        "  masses   within [{:.1e}, {:.1e}] kg",
        ranges.mass.0, ranges.mass.1
    );
    println!("  spawn box ±{:.1e} m per axis", ranges.position_extent);
    println!(
        "  densities within [{:.0}, {:.0}] kg/m³",
        ranges.density.0, ranges.density.1
    );

    let mut sim = Simulation::new(bodies, 3.0e5).expect("synthesized bodies are valid");

    let initial_count = sim.body_count();
    let initial_mass = sim.state().total_mass();

    println!("\n{}", "=".repeat(60));
    println!("Running 2000 steps...\n");

    let mut merges = 0;
    let mut previous = initial_count;

    for _ in 0..2000 {
        sim.step();

        let count = sim.body_count();
        if count < previous {
            merges += previous - count;
            println!(
                "t={:.3e} s: merge, {} bodies remain",
                sim.time(),
                count
            );
            previous = count;
        }
    }

    let heaviest = sim
        .bodies()
        .iter()
        .max_by(|a, b| a.mass.total_cmp(&b.mass));

    println!("{}", "=".repeat(60));
    println!("Simulation complete!\n");

    println!("Final statistics:");
    println!("  Final time:   {:.3e} s", sim.time());
    println!("  Bodies:       {} (started {})", sim.body_count(), initial_count);
    println!("  Merges:       {}", merges);
    println!(
        "  Total mass:   {:.4e} kg (started {:.4e})",
        sim.state().total_mass(),
        initial_mass
    );
    println!(
        "  Center of mass: ({:.3e}, {:.3e}) m",
        sim.state().center_of_mass().x,
        sim.state().center_of_mass().y
    );

    if let Some(body) = heaviest {
        println!(
            "  Heaviest body:  {:.4e} kg at ({:.3e}, {:.3e}) m",
            body.mass, body.position.x, body.position.y
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
}
