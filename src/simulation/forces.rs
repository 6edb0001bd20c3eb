//! Force / acceleration contributors for the gravity engine
//!
//! Defines the acceleration trait, the set that sums several terms,
//! and exact pairwise Newtonian gravity

use crate::simulation::states::{Body, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector for the target body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration of `target` against every body in `bodies`
    /// Terms are summed in registration order
    pub fn accumulate(&self, target: &Body, bodies: &[Body]) -> NVec2 {
        let mut a = NVec2::zeros();
        for term in &self.terms {
            a += term.acceleration(target, bodies);
        }
        a
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on one body
/// `bodies` is the full collection and may contain `target` itself
pub trait Acceleration {
    fn acceleration(&self, target: &Body, bodies: &[Body]) -> NVec2;
}

/// Exact O(n^2) Newtonian gravity
///
/// The resultant force on the target is
/// `sum G * m1 * m2 / r^3 * r_vec` over every other body, with `r_vec`
/// pointing from the target to the other body, divided by the target mass.
///
/// With `eps2 == 0` two bodies on the same position give a zero distance and
/// a non-finite acceleration. A positive `eps2` replaces `r^2` with `r^2 + eps2`.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, target: &Body, bodies: &[Body]) -> NVec2 {
        let mi = target.mass();
        let mut resultant = NVec2::zeros();

        for other in bodies {
            // a body never pulls on itself
            if other.id == target.id {
                continue;
            }

            // displacement from the target towards the other body
            let r = other.x - target.x;

            // |r|^2, optionally softened
            let d2 = r.norm_squared() + self.eps2;

            // r_vec / |r|^3 has magnitude 1 / |r|^2
            let inv_r = d2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            resultant += self.G * mi * other.mass() * inv_r3 * r;
        }

        // a = F / m
        resultant / mi
    }
}
