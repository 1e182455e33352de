//! Collision resolution through momentum-conserving mergers
//!
//! When two bodies collide they merge into a single body that conserves:
//! - Total mass
//! - Total momentum
//! - Total volume (constant-density spheres)

use crate::body::{radius_from_mass_density, Body};
use crate::collisions::CollisionEvent;
use crate::state::SystemState;

/// Merge two bodies into one.
///
/// The merged body conserves:
/// - Mass: `m = m_a + m_b`
/// - Momentum: velocity is the mass-weighted average
///   `(m_a·v_a + m_b·v_b)/(m_a + m_b)`
/// - Volume: density is the combined mass over the combined volume,
///   `(m_a + m_b)/(m_a/ρ_a + m_b/ρ_b)`, and the radius is re-derived
///   from that density, which works out to `(r_a³ + r_b³)^(1/3)`
///
/// Position and color come from the more massive operand; a tie goes to
/// `a`.
///
/// # Examples
///
/// ```
/// use gravity::collisions::merge_bodies;
/// use gravity::{Body, Color};
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::with_radius(
///     3.0,
///     Point2::new(1.0, 0.0),
///     Vector2::new(0.0, 5.0),
///     0.1,
///     Color::new(255, 0, 0),
/// );
/// let b = Body::with_radius(
///     1.0,
///     Point2::new(1.1, 0.0),
///     Vector2::new(0.0, 1.0),
///     0.1,
///     Color::new(0, 0, 255),
/// );
///
/// let merged = merge_bodies(&a, &b);
///
/// // Mass sums exactly; momentum is conserved
/// assert_eq!(merged.mass, 4.0);
/// assert!((merged.velocity.y - 4.0).abs() < 1e-12);
///
/// // The heavier body keeps position and color
/// assert_eq!(merged.position, a.position);
/// assert_eq!(merged.color, a.color);
/// ```
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    let mass = a.mass + b.mass;

    // Momentum-conserving velocity
    let velocity = (a.momentum() + b.momentum()) / mass;

    // The heavier operand wins position and color; ties go to `a`
    let winner = if a.mass >= b.mass { a } else { b };

    // Combined mass over combined volume
    let density = mass / (a.volume() + b.volume());

    Body {
        mass,
        position: winner.position,
        velocity,
        density,
        radius: radius_from_mass_density(mass, density),
        color: winner.color,
    }
}

/// Apply detected collisions to the state, merging overlapping pairs.
///
/// Events must come from detection on the current collection. They are
/// processed in detection order (ascending index pairs): the first event
/// claiming a body wins and later events touching either participant are
/// skipped, so a body merges at most once per sweep. The collection is
/// then rebuilt in one pass: the merged body lands in the lower source
/// slot, the higher slot disappears, and the collection shrinks by
/// exactly one per merge.
///
/// # Returns
///
/// The number of merges performed.
///
/// # Examples
///
/// ```
/// use gravity::collisions::{detect_collisions, resolve_collisions};
/// use gravity::state::SystemState;
/// use gravity::{Body, Color};
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(vec![
///     Body::with_radius(
///         2.0,
///         Point2::new(0.0, 0.0),
///         Vector2::new(0.0, 0.0),
///         0.6,
///         Color::new(255, 0, 0),
///     ),
///     Body::with_radius(
///         1.0,
///         Point2::new(1.0, 0.0),
///         Vector2::new(0.0, 0.0),
///         0.6,
///         Color::new(0, 0, 255),
///     ),
/// ]);
///
/// let events = detect_collisions(&system);
/// let merges = resolve_collisions(&mut system, &events);
///
/// assert_eq!(merges, 1);
/// assert_eq!(system.body_count(), 1);
/// assert_eq!(system.bodies[0].mass, 3.0);
/// ```
pub fn resolve_collisions(state: &mut SystemState, events: &[CollisionEvent]) -> usize {
    if events.is_empty() {
        return 0;
    }

    let n = state.bodies.len();
    let mut consumed = vec![false; n];
    let mut replacements: Vec<Option<Body>> = vec![None; n];
    let mut merges = 0;

    for event in events {
        // First-detected-pair-wins: anything already claimed sits out
        if consumed[event.first] || consumed[event.second] {
            continue;
        }

        let merged = merge_bodies(&state.bodies[event.first], &state.bodies[event.second]);
        consumed[event.first] = true;
        consumed[event.second] = true;
        replacements[event.first] = Some(merged);
        merges += 1;
    }

    if merges > 0 {
        let mut rebuilt = Vec::with_capacity(n - merges);
        for (i, body) in state.bodies.iter().enumerate() {
            if let Some(merged) = replacements[i] {
                rebuilt.push(merged);
            } else if !consumed[i] {
                rebuilt.push(*body);
            }
        }
        state.bodies = rebuilt;
    }

    merges
}
