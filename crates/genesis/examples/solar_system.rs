//! Solar system orbit demo
//!
//! Runs the nine-body solar preset in 100-day steps and reports orbital
//! radii, speeds, and conservation totals. With a step this coarse the
//! inner planets pick up energy quickly; the outer system stays put.
//!
//! Run with: cargo run --package genesis --example solar_system

use genesis::presets::{solar_system, SOLAR_TIME_STEP};
use gravity::forces::{DirectGravity, ForceModel};
use gravity::Simulation;

const AU: f64 = 1.496e11;
const YEAR: f64 = 365.25 * 86_400.0;

const NAMES: [&str; 9] = [
    "Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

fn print_table(sim: &Simulation) {
    println!("{:<10} {:>10} {:>12}", "Body", "r (AU)", "v (km/s)");
    for (name, body) in NAMES.iter().zip(sim.bodies()) {
        println!(
            "{:<10} {:>10.3} {:>12.2}",
            name,
            body.position.coords.magnitude() / AU,
            body.speed() / 1.0e3
        );
    }
}

fn main() {
    println!("Solar System Demo: Nine Bodies, 100-Day Steps\n");
    println!("{}", "=".repeat(60));

    let mut sim =
        Simulation::new(solar_system(), SOLAR_TIME_STEP).expect("solar preset is valid");

    // Same configuration the engine integrates with, for energy totals
    let force = DirectGravity::new();

    let initial_momentum = sim.state().total_momentum();
    let initial_mass = sim.state().total_mass();
    let initial_energy = sim.state().kinetic_energy() + force.potential_energy(sim.state());

    println!("\nInitial state:");
    print_table(&sim);

    let years = 12.0;
    let steps = (years * YEAR / SOLAR_TIME_STEP) as usize;

    println!("\nRunning {} steps ({} years)...", steps, years);
    sim.run(steps);

    println!("\n{}", "=".repeat(60));
    println!("After {:.1} years:\n", sim.time() / YEAR);
    print_table(&sim);

    let momentum_drift = (sim.state().total_momentum() - initial_momentum).magnitude();
    let final_energy = sim.state().kinetic_energy() + force.potential_energy(sim.state());
    let energy_drift = (final_energy - initial_energy).abs() / initial_energy.abs();

    println!("\nFinal statistics:");
    println!("  Bodies:          {}", sim.body_count());
    println!(
        "  Total mass:      {:.4e} kg (started {:.4e})",
        sim.state().total_mass(),
        initial_mass
    );
    println!("  Momentum drift:  {:.3e} kg·m/s", momentum_drift);
    println!(
        "  Total energy:    {:.4e} J (started {:.4e})",
        final_energy, initial_energy
    );
    println!("  Energy drift:    {:.2}% of initial", energy_drift * 100.0);

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
}
