//! src/hit.rs
//! ----------
//! Nearest-hit bookkeeping shared by every primitive test.

use crate::{
    algebra::Vec3,
    fixed::{Fixed, BIG_DIST, EPS_T_MIN},
    material::Material,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitRecord {
    pub t: Fixed,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
    pub hit: bool,
}

impl HitRecord {
    /// Empty record that accepts anything up to `BIG_DIST`.
    pub fn new() -> Self {
        Self::within(BIG_DIST)
    }

    /// Empty record that only accepts hits nearer than `max_t`.
    pub fn within(max_t: Fixed) -> Self {
        Self {
            t: max_t,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
            hit: false,
        }
    }

    /// A candidate distance wins only if it clears the epsilon and is
    /// strictly nearer than what is already held, so on a tie the primitive
    /// tested first keeps the hit. The floor goes through this too, so it
    /// loses ties to a sphere; rejecting only `t > rec.t` for the floor
    /// would let it win them instead.
    pub fn accepts(&self, t: Fixed) -> bool {
        t >= EPS_T_MIN && t < self.t
    }

    pub fn with_hit(self, t: Fixed, point: Vec3, normal: Vec3, material: Material) -> Self {
        Self { t, point, normal, material, hit: true }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_is_a_miss() {
        let rec = HitRecord::new();
        assert!(!rec.hit);
        assert_eq!(rec.t, BIG_DIST);
    }

    #[test]
    fn test_accepts_window() {
        let rec = HitRecord::within(1000);
        assert!(!rec.accepts(EPS_T_MIN - 1));
        assert!(rec.accepts(EPS_T_MIN));
        assert!(rec.accepts(999));
        assert!(!rec.accepts(1000));
    }
}
