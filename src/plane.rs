use crate::algebra::Vec3;
use crate::color::Rgb;
use crate::fixed::{self, Fixed, SCALE};
use crate::hit::HitRecord;
use crate::material::Material;

/// Checker cells are `2^CHECKER_SHIFT` raw units wide.
pub const CHECKER_SHIFT: u32 = 11;

/// Infinite horizontal floor at height `y`, checkered in x/z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plane {
    pub y   : Fixed,
    pub odd : Rgb,
    pub even: Rgb,
}

impl Plane {
    /// Color of the checker cell containing `p`.
    pub fn checker(&self, p: Vec3) -> Rgb {
        if ((p.0 >> CHECKER_SHIFT) + (p.2 >> CHECKER_SHIFT)) & 1 != 0 {
            self.odd
        } else {
            self.even
        }
    }

    /// Only rays heading down can reach the floor, which also keeps the
    /// division below away from zero.
    pub fn intersect(&self, ro: Vec3, rd: Vec3, rec: HitRecord) -> HitRecord {
        if rd.1 >= 0 {
            return rec;
        }

        let t = fixed::div_scale(self.y - ro.1, rd.1);
        if !rec.accepts(t) {
            return rec;
        }

        let point = ro.add(rd.scale(t));
        rec.with_hit(
            t,
            point,
            Vec3(0, SCALE, 0),
            Material::matte(self.checker(point)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: Plane = Plane { y: -1536, odd: Rgb(0xFFFFFF), even: Rgb(0x444444) };

    #[test]
    fn test_upward_and_level_rays_miss() {
        let rec = HitRecord::new();
        assert_eq!(FLOOR.intersect(Vec3::ZERO, Vec3(0, SCALE, 0), rec), rec);
        assert_eq!(FLOOR.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), rec), rec);
    }

    #[test]
    fn test_downward_hit() {
        let rec = FLOOR.intersect(Vec3::ZERO, Vec3(0, -724, 724), HitRecord::new());
        assert!(rec.hit);
        assert_eq!(rec.t, 2172);
        assert_eq!(rec.point, Vec3(0, -1536, 1535));
        assert_eq!(rec.normal, Vec3(0, SCALE, 0));
        assert_eq!(rec.material, Material::matte(Rgb(0x444444)));
    }

    #[test]
    fn test_checker_cells() {
        assert_eq!(FLOOR.checker(Vec3(0, -1536, 0)), FLOOR.even);
        assert_eq!(FLOOR.checker(Vec3(2048, -1536, 0)), FLOOR.odd);
        assert_eq!(FLOOR.checker(Vec3(2048, -1536, 2048)), FLOOR.even);
        assert_eq!(FLOOR.checker(Vec3(-1, -1536, 0)), FLOOR.odd);
    }

    #[test]
    fn test_equal_distance_keeps_earlier_hit() {
        let earlier = HitRecord::within(2172);
        assert_eq!(FLOOR.intersect(Vec3::ZERO, Vec3(0, -724, 724), earlier), earlier);
    }

    #[test]
    fn test_floor_below_is_required() {
        let above = Vec3(0, -4096, 0);
        let rec = FLOOR.intersect(above, Vec3(0, -SCALE, 0), HitRecord::new());
        assert!(!rec.hit);
    }
}
