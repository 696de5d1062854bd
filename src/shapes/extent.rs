use std::fmt;
use std::sync::Arc;

use crate::kinematics::Particle;
use crate::math::Vector;

/// The vector that defines a shape's geometry (ellipse radii, box half
/// extents).
///
/// A `Sampled` extent follows a particle and caches the value it had at
/// the last `advance_time`; queries only ever read that cache.
#[derive(Clone)]
pub enum Extent {
    Constant(Vector),
    Sampled {
        particle: Arc<dyn Particle + Send + Sync>,
        time: f64,
        current: Vector,
    },
}

impl Extent {
    pub fn constant(v: Vector) -> Self {
        Extent::Constant(v)
    }

    /// Follow `particle`, initially sampled at time `0.0`.
    pub fn sampled<P>(particle: P) -> Self
    where
        P: Particle + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(particle))
    }

    pub fn from_shared(particle: Arc<dyn Particle + Send + Sync>) -> Self {
        let current = particle.position_at(0.0);
        Extent::Sampled {
            particle,
            time: 0.0,
            current,
        }
    }

    pub fn current(&self) -> &Vector {
        match self {
            Extent::Constant(v) => v,
            Extent::Sampled { current, .. } => current,
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            Extent::Constant(v) => v.dimension(),
            Extent::Sampled { particle, .. } => particle.dimension(),
        }
    }

    /// Time of the cached sample; `None` for constants.
    pub fn time(&self) -> Option<f64> {
        match self {
            Extent::Constant(_) => None,
            Extent::Sampled { time, .. } => Some(*time),
        }
    }

    pub fn is_time_varying(&self) -> bool {
        matches!(self, Extent::Sampled { .. })
    }

    pub fn advance_time(&mut self, to: f64) {
        if let Extent::Sampled {
            particle,
            time,
            current,
        } = self
        {
            *current = particle.position_at(to);
            *time = to;
            log::trace!("extent resampled at t={}: {}", to, current);
        }
    }

    /// A constant copy of the current sample with every component made
    /// non-negative.
    pub(crate) fn abs_snapshot(&self) -> Vector {
        self.current().map(f64::abs)
    }
}

impl From<Vector> for Extent {
    fn from(v: Vector) -> Self {
        Extent::Constant(v)
    }
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Extent::Sampled { time, current, .. } => f
                .debug_struct("Sampled")
                .field("time", time)
                .field("current", current)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::Linear;

    #[test]
    fn constant_ignores_time() {
        let mut e = Extent::constant(Vector::from([1.0, 2.0]));
        e.advance_time(5.0);
        assert_eq!(e.current().as_slice(), &[1.0, 2.0]);
        assert_eq!(e.time(), None);
        assert!(!e.is_time_varying());
    }

    #[test]
    fn sampled_follows_particle() {
        let p = Linear::new(Vector::from([1.0, 1.0]), Vector::from([1.0, 0.0])).unwrap();
        let mut e = Extent::sampled(p);
        assert_eq!(e.time(), Some(0.0));
        assert_eq!(e.current().as_slice(), &[1.0, 1.0]);

        e.advance_time(2.0);
        assert_eq!(e.time(), Some(2.0));
        assert_eq!(e.current().as_slice(), &[3.0, 1.0]);
        assert_eq!(e.dimension(), 2);
    }
}
