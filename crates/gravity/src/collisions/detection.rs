//! Collision detection via the direct O(n²) pair sweep

use crate::body::Body;
use crate::state::SystemState;

/// A detected overlap between two bodies
///
/// Indices refer to the state's body collection at detection time, with
/// `first < second` always. Events become stale as soon as the
/// collection changes; resolution must run before the next step.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    /// Index of the lower-indexed body
    pub first: usize,
    /// Index of the higher-indexed body
    pub second: usize,
    /// Separation at detection time (m)
    pub separation: f64,
    /// Sum of the two radii (m)
    pub contact_distance: f64,
}

/// Check one pair of bodies for overlap.
///
/// Two bodies collide when the distance between their positions is
/// strictly less than the sum of their radii.
pub fn check_pair(first: usize, second: usize, a: &Body, b: &Body) -> Option<CollisionEvent> {
    let separation = a.distance_to(b);
    let contact_distance = a.radius + b.radius;

    if separation < contact_distance {
        Some(CollisionEvent {
            first,
            second,
            separation,
            contact_distance,
        })
    } else {
        None
    }
}

/// Detect every overlapping pair in the system.
///
/// Pairs are visited in ascending `(first, second)` order and events are
/// returned in that order; resolution relies on it as the documented
/// first-detected-pair-wins ordering.
///
/// # Examples
///
/// ```
/// use gravity::collisions::detect_collisions;
/// use gravity::state::SystemState;
/// use gravity::{Body, Color};
/// use nalgebra::{Point2, Vector2};
///
/// let system = SystemState::new(vec![
///     Body::with_radius(
///         1.0,
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
/// // Separation 1.0 < combined radius 1.2
/// let events = detect_collisions(&system);
/// assert_eq!(events.len(), 1);
/// assert_eq!((events[0].first, events[0].second), (0, 1));
/// ```
pub fn detect_collisions(state: &SystemState) -> Vec<CollisionEvent> {
    let n = state.bodies.len();

    (0..n)
        .flat_map(|i| {
            ((i + 1)..n)
                .filter_map(move |j| check_pair(i, j, &state.bodies[i], &state.bodies[j]))
        })
        .collect()
}
