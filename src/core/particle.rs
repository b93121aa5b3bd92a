/// State of a single hard sphere, advanced lazily to the time of its own
/// most recent event.
///
/// Fields:
/// - `r`: periodically reduced position, kept in `[-L/2, L/2)` per axis
/// - `r_ext`: periodically extended position; receives the same increments
///   as `r` but is never wrapped, so `r_ext - r` stays an integer multiple
///   of the box length per axis
/// - `v`: velocity; mutated only by collision processing and velocity
///   initialization
/// - `t`: simulation time at which `r`/`r_ext`/`v` are valid
/// - `count`: collision counter used to detect outdated event predictions
/// - `cell`: index of the grid cell currently holding this particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle<const D: usize> {
    /// Periodically reduced position.
    pub r: [f64; D],
    /// Periodically extended (unwrapped) position.
    pub r_ext: [f64; D],
    /// Velocity.
    pub v: [f64; D],
    /// Time of the last event this particle took part in.
    pub t: f64,
    /// Collision participation counter (for event invalidation).
    pub count: u64,
    /// Cell which the particle belongs to.
    pub cell: [u32; D],
}

impl<const D: usize> Particle<D> {
    /// A particle at rest at the coordinate origin at time zero.
    pub fn zeroed() -> Self {
        Self {
            r: [0.0; D],
            r_ext: [0.0; D],
            v: [0.0; D],
            t: 0.0,
            count: 0,
            cell: [0; D],
        }
    }

    /// Advance the particle along its free-flight trajectory to absolute
    /// time `t`. Both the reduced and the extended position receive the
    /// same increment; periodic wrapping is applied separately by the
    /// cell boundary processor.
    #[inline]
    pub fn advance(&mut self, t: f64) {
        let dt = t - self.t;
        for d in 0..D {
            let dr = self.v[d] * dt;
            self.r[d] += dr;
            self.r_ext[d] += dr;
        }
        self.t = t;
    }

    /// Increment the collision counter (used for event invalidation).
    #[inline]
    pub fn bump_count(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Returns the particle's kinetic energy `1/2 |v|^2` (unit mass).
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * vsq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_particle_is_at_rest() {
        let p = Particle::<3>::zeroed();
        assert_eq!(p.r, [0.0; 3]);
        assert_eq!(p.v, [0.0; 3]);
        assert_eq!(p.t, 0.0);
        assert_eq!(p.count, 0);
        assert_eq!(p.cell, [0; 3]);
    }

    #[test]
    fn advance_moves_both_positions() {
        let mut p = Particle::<3>::zeroed();
        p.r = [1.0, -2.0, 0.5];
        p.r_ext = [1.0, -2.0, 0.5];
        p.v = [2.0, 0.0, -1.0];
        p.t = 1.0;
        p.advance(2.5);
        assert_eq!(p.t, 2.5);
        assert_eq!(p.r, [4.0, -2.0, -1.0]);
        assert_eq!(p.r_ext, [4.0, -2.0, -1.0]);
        // velocity untouched by free flight
        assert_eq!(p.v, [2.0, 0.0, -1.0]);
    }

    #[test]
    fn advance_keeps_wrap_offset() {
        // r_ext differs from r by one box length; the offset must survive
        let mut p = Particle::<2>::zeroed();
        p.r = [0.25, 0.0];
        p.r_ext = [10.25, 0.0];
        p.v = [1.0, 1.0];
        p.advance(0.5);
        assert!((p.r_ext[0] - p.r[0] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn bump_count_increments() {
        let mut p = Particle::<3>::zeroed();
        p.bump_count();
        p.bump_count();
        assert_eq!(p.count, 2);
    }

    #[test]
    fn kinetic_energy_computed() {
        // v = (3,4,0), |v|^2 = 25; KE = 12.5 at unit mass
        let mut p = Particle::<3>::zeroed();
        p.v = [3.0, 4.0, 0.0];
        assert!((p.kinetic_energy() - 12.5).abs() < 1e-12);
    }
}
