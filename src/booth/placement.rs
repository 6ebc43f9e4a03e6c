// SPDX-License-Identifier: GPL-3.0-only

//! Scattered initial placement for new polaroids

use crate::constants::placement::{OFFSET_MIN, OFFSET_SPAN, ROTATION_SPREAD_DEG};
use crate::store::Position;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    /// Degrees, in `[-ROTATION_SPREAD_DEG / 2, ROTATION_SPREAD_DEG / 2)`
    pub rotation: f64,
}

impl Placement {
    /// Draw a placement from `rng`
    ///
    /// `x` and `y` fall in `[50, 150)`, rotation in `[-5, 5)` degrees.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random::<f64>() * OFFSET_SPAN + OFFSET_MIN;
        let y = rng.random::<f64>() * OFFSET_SPAN + OFFSET_MIN;
        let rotation = (rng.random::<f64>() - 0.5) * ROTATION_SPREAD_DEG;
        Self {
            position: Position::new(x, y),
            rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_placement_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let placement = Placement::random(&mut rng);
            assert!((50.0..150.0).contains(&placement.position.x));
            assert!((50.0..150.0).contains(&placement.position.y));
            assert!((-5.0..5.0).contains(&placement.rotation));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = Placement::random(&mut StdRng::seed_from_u64(42));
        let b = Placement::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
