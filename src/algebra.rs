use crate::fixed::{self, Fixed, SCALE};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vec3(pub Fixed, pub Fixed, pub Fixed);


impl Vec3 {
    pub const ZERO: Self = Self(0, 0, 0);
    pub const UP: Self = Self(0, SCALE, 0);

    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, s: Fixed) -> Self {
        Self(fixed::scale(self.0, s), fixed::scale(self.1, s), fixed::scale(self.2, s))
    }
    pub fn dot(self, v: Self) -> Fixed {
        let wide = self.0 as i64 * v.0 as i64
            + self.1 as i64 * v.1 as i64
            + self.2 as i64 * v.2 as i64;
        fixed::narrow(wide)
    }
    pub fn neg(self) -> Self { Self(-self.0, -self.1, -self.2) }

    /// Squared length is narrowed once by `dot`, so it is scaled back up
    /// before the root to land on fixed scale again.
    pub fn length(self) -> Fixed {
        fixed::isqrt(self.dot(self) as i64 * SCALE as i64) as Fixed
    }

    /// Unit vector, or zero for a zero-length input.
    pub fn normalize(self) -> Self {
        let l = self.length();
        if l == 0 {
            return Self::ZERO;
        }
        Self(
            fixed::div_scale(self.0, l),
            fixed::div_scale(self.1, l),
            fixed::div_scale(self.2, l),
        )
    }

    /// Mirror `self` about the unit normal `n`.
    pub fn reflect(self, n: Self) -> Self {
        self.sub(n.scale(2 * self.dot(n)))
    }
}


impl From<[Fixed; 3]> for Vec3 {
    fn from(a: [Fixed; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

/* Custom helper so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[Fixed; 3]>::deserialize(d)?;
    Ok(arr.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_add_sub_are_unscaled() {
        let a = Vec3(1, -2, 3);
        let b = Vec3(10, 20, -30);
        assert_eq!(a.add(b), Vec3(11, 18, -27));
        assert_eq!(a.sub(b), Vec3(-9, -22, 33));
        assert_eq!(a.neg(), Vec3(-1, 2, -3));
    }

    #[test]
    fn test_dot_and_scale() {
        assert_eq!(Vec3(1024, 2048, -1024).dot(Vec3(512, 512, 512)), 1024);
        assert_eq!(Vec3(2048, -1024, 512).scale(512), Vec3(1024, -512, 256));
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec3(3072, 4096, 0).length(), 5120);
        assert_eq!(Vec3(0, 0, -4096).length(), 4096);
        assert_eq!(Vec3::ZERO.length(), 0);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        // too short to survive the narrowing in `dot`
        assert_eq!(Vec3(1, 0, 0).normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_axis_and_triangle() {
        assert_eq!(Vec3(0, 0, 1024).normalize(), Vec3(0, 0, 1024));
        assert_eq!(Vec3(0, -9000, 0).normalize(), Vec3(0, -1024, 0));
        assert_eq!(Vec3(3072, 4096, 0).normalize(), Vec3(614, 819, 0));
    }

    #[test]
    fn test_normalized_length_is_close_to_scale() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut checked = 0;
        while checked < 10_000 {
            let v = Vec3(
                rng.gen_range(-4096..=4096),
                rng.gen_range(-4096..=4096),
                rng.gen_range(-4096..=4096),
            );
            if v.length() < SCALE {
                continue;
            }
            let l = v.normalize().length();
            assert!((l - SCALE).abs() <= 4, "{v:?} normalized to length {l}");
            checked += 1;
        }
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let n = Vec3::UP;
        assert_eq!(Vec3(0, -1024, 0).reflect(n), Vec3(0, 1024, 0));
        assert_eq!(Vec3(724, -724, 0).reflect(n), Vec3(724, 724, 0));
        assert_eq!(Vec3(0, 0, 1024).reflect(Vec3(0, 0, -1024)), Vec3(0, 0, -1024));
    }
}
