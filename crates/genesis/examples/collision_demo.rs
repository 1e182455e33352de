//! Collision and merge demo
//!
//! Drops a ring of planet-scale bodies toward a common center and drives
//! the engine pieces directly so every detected pair can be reported
//! before it is merged: Euler step, then detection, then resolution.
//!
//! Run with: cargo run --package genesis --example collision_demo

use nalgebra::{Point2, Vector2};

use gravity::body::{Body, Color};
use gravity::collisions::{detect_collisions, resolve_collisions};
use gravity::forces::DirectGravity;
use gravity::integrator::{Euler, Integrator};
use gravity::state::SystemState;

fn main() {
    println!("Collision Demo: Infalling Ring\n");
    println!("{}", "=".repeat(60));

    // Six bodies on a ring, falling inward with a slight tangential drift
    // so they arrive off-center and sweep through each other
    let ring_radius = 1.0e11;
    let infall_speed = 4.0e3;

    let mut bodies = Vec::new();
    for i in 0..6 {
        let angle = (i as f64) * std::f64::consts::TAU / 6.0;
        let mass = 1.0e28 * (1.0 + 0.2 * i as f64);

        let x = ring_radius * angle.cos();
        let y = ring_radius * angle.sin();

        // Inward plus a tangential nudge
        let vx = -infall_speed * angle.cos() - 0.3e3 * angle.sin();
        let vy = -infall_speed * angle.sin() + 0.3e3 * angle.cos();

        bodies.push(Body::with_radius(
            mass,
            Point2::new(x, y),
            Vector2::new(vx, vy),
            5.0e9,
            Color::new(40 * i as u8, 255 - 40 * i as u8, 128),
        ));

        println!(
            "  Body {}: mass={:.2e} kg, pos=({:+.2e}, {:+.2e}) m",
            i, mass, x, y
        );
    }

    let mut state = SystemState::new(bodies);
    let initial_mass = state.total_mass();
    let initial_momentum = state.total_momentum();

    println!("\nInitial body count: {}", state.body_count());
    println!("Initial total mass: {:.4e} kg", initial_mass);

    let integrator = Euler;
    let force = DirectGravity::new();
    let dt = 86_400.0; // one day

    println!("\n{}", "=".repeat(60));
    println!("Starting simulation...\n");

    let mut merge_count = 0;

    for _ in 0..600 {
        integrator.step(&mut state, dt, &force);

        let events = detect_collisions(&state);
        if !events.is_empty() {
            println!(
                "t={:5.0} days: {} overlapping pair(s)",
                state.time / 86_400.0,
                events.len()
            );

            for event in &events {
                println!(
                    "    bodies {} and {}: separation={:.3e} m, contact at {:.3e} m",
                    event.first, event.second, event.separation, event.contact_distance
                );
            }

            merge_count += resolve_collisions(&mut state, &events);

            println!(
                "    merged, {} bodies remain, total mass {:.4e} kg\n",
                state.body_count(),
                state.total_mass()
            );
        }

        if state.body_count() == 1 {
            break;
        }
    }

    let momentum_drift = (state.total_momentum() - initial_momentum).magnitude();

    println!("{}", "=".repeat(60));
    println!("Simulation complete!\n");

    println!("Final statistics:");
    println!("  Final time:      {:.0} days", state.time / 86_400.0);
    println!("  Bodies:          {}", state.body_count());
    println!("  Merges:          {}", merge_count);
    println!(
        "  Total mass:      {:.4e} kg (started {:.4e})",
        state.total_mass(),
        initial_mass
    );
    println!("  Momentum drift:  {:.3e} kg·m/s", momentum_drift);

    println!("\nSurvivors:");
    for (i, body) in state.bodies.iter().enumerate() {
        println!(
            "  Body {}: mass={:.3e} kg, r={:.3e} m, radius={:.3e} m",
            i,
            body.mass,
            body.position.coords.magnitude(),
            body.radius
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
}
