//! Time-varying positions.
//!
//! The simulation's integrator lives elsewhere; shapes only need something
//! that can report a position for a timestamp. `Stationary` and `Linear`
//! cover constant and uniformly moving quantities.

use crate::error::VectorError;
use crate::math::Vector;

/// A vector-valued quantity sampled by simulation time.
pub trait Particle {
    fn dimension(&self) -> usize;

    /// Position at `time`. Always has `dimension()` components.
    fn position_at(&self, time: f64) -> Vector;
}

impl Particle for Vector {
    fn dimension(&self) -> usize {
        Vector::dimension(self)
    }

    fn position_at(&self, _time: f64) -> Vector {
        self.clone()
    }
}

/// Never moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Stationary(pub Vector);

impl Particle for Stationary {
    fn dimension(&self) -> usize {
        self.0.dimension()
    }

    fn position_at(&self, _time: f64) -> Vector {
        self.0.clone()
    }
}

/// `origin + time * velocity`
#[derive(Clone, Debug, PartialEq)]
pub struct Linear {
    origin: Vector,
    velocity: Vector,
}

impl Linear {
    pub fn new(origin: Vector, velocity: Vector) -> Result<Self, VectorError> {
        if origin.dimension() != velocity.dimension() {
            return Err(VectorError::DimensionMismatch {
                op: "Linear::new",
                left: origin.dimension(),
                right: velocity.dimension(),
            });
        }
        Ok(Self { origin, velocity })
    }

    pub fn origin(&self) -> &Vector {
        &self.origin
    }

    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }
}

impl Particle for Linear {
    fn dimension(&self) -> usize {
        self.origin.dimension()
    }

    fn position_at(&self, time: f64) -> Vector {
        let mut pos = self.origin.clone();
        // dimensions agree by construction
        for (x, v) in pos.iter_mut().zip(self.velocity.iter()) {
            *x += time * v;
        }
        pos
    }
}
