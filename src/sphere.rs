//! src/sphere.rs
//! -------------
//! Sphere with constant radius, optionally bobbing up and down over time.

use crate::{
    algebra::Vec3,
    fixed::{self, Fixed, SCALE, SHIFT},
    hit::HitRecord,
    material::Material,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sphere {
    pub name     : String,
    pub center   : Vec3,
    pub radius   : Fixed,
    pub material : Material,
    /// Vertical animation amplitude; 0 keeps the sphere still.
    pub bob      : Fixed,
    /// Height the bob oscillates around.
    pub base_y   : Fixed,
}

impl Sphere {
    pub fn new(name: impl Into<String>, center: Vec3, radius: Fixed, material: Material) -> Self {
        Self {
            name: name.into(),
            center,
            radius,
            material,
            bob: 0,
            base_y: center.1,
        }
    }

    pub fn with_bob(mut self, amplitude: Fixed) -> Self {
        self.bob = amplitude;
        self
    }

    /// Squared radius at raw scale, truncated to a multiple of `SCALE`.
    /// `dot(oc, oc)` is one `SCALE` smaller, so the effective surface sits
    /// at `radius * sqrt(SCALE)` raw units from the center.
    pub fn radius_sq(&self) -> i64 {
        let r = self.radius as i64;
        r * r / SCALE as i64 * SCALE as i64
    }

    /// Intersect a ray (ro + t·rd) with `rd` unit length.
    /// Returns `rec` unchanged unless this sphere is the nearest hit so far.
    pub fn intersect(&self, ro: Vec3, rd: Vec3, rec: HitRecord) -> HitRecord {
        let oc = ro.sub(self.center);
        let b  = oc.dot(rd) as i64;
        let c  = oc.dot(oc) as i64 - self.radius_sq();
        let h  = ((b * b) >> SHIFT) - c;
        if h < 0 { return rec; }

        let sqrt_h = fixed::isqrt(h * SCALE as i64);
        let mut t = -b - sqrt_h;
        if t < fixed::EPS_T_MIN as i64 { t = -b + sqrt_h; }
        let t = t.clamp(Fixed::MIN as i64, fixed::BIG_DIST as i64) as Fixed;
        if !rec.accepts(t) { return rec; }

        let point  = ro.add(rd.scale(t));
        let normal = point.sub(self.center).normalize();
        rec.with_hit(t, point, normal, self.material)
    }

    /// Move to this frame's bob height for `sin`, a fixed-point sine.
    pub fn bob_to(&mut self, sin: Fixed) {
        if self.bob != 0 {
            self.center.1 = self.base_y + fixed::scale(sin, self.bob);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn red(center: Vec3, radius: Fixed) -> Sphere {
        Sphere::new("red", center, radius, Material::matte(Rgb(0xFF0000)))
    }

    #[test]
    fn test_radius_sq_keeps_raw_scale() {
        assert_eq!(red(Vec3::ZERO, 1024).radius_sq(), 1_048_576);
        assert_eq!(red(Vec3::ZERO, 700).radius_sq(), 489_472);
    }

    #[test]
    fn test_ray_at_center_from_outside() {
        let s = red(Vec3(0, 0, 40_000), 1024);
        let rec = s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), HitRecord::new());
        assert!(rec.hit);
        assert!(rec.t > 0 && rec.t < 40_000, "t = {}", rec.t);
        assert_eq!(rec.t, 7232);
        assert_eq!(rec.point, Vec3(0, 0, 7232));
        assert_eq!(rec.normal, Vec3(0, 0, -SCALE));
        assert_eq!(rec.material.color, Rgb(0xFF0000));
    }

    #[test]
    fn test_inside_takes_far_root() {
        let s = red(Vec3(0, 0, 4096), 1024);
        let rec = s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), HitRecord::new());
        assert!(rec.hit);
        assert_eq!(rec.t, 36_864);
        assert_eq!(rec.normal, Vec3(0, 0, SCALE));
    }

    #[test]
    fn test_miss_leaves_record_alone() {
        let s = red(Vec3(0, 0, 200_000), 1024);
        let before = HitRecord::new();
        assert_eq!(s.intersect(Vec3::ZERO, Vec3(0, SCALE, 0), before), before);
    }

    #[test]
    fn test_behind_origin_is_rejected() {
        let s = red(Vec3(0, 0, -200_000), 1024);
        let rec = s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), HitRecord::new());
        assert!(!rec.hit);
    }

    #[test]
    fn test_nearer_record_wins() {
        let s = red(Vec3(0, 0, 40_000), 1024);
        let nearer = HitRecord::within(5000);
        assert_eq!(s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), nearer), nearer);
    }

    #[test]
    fn test_equal_distance_keeps_earlier_hit() {
        let s = red(Vec3(0, 0, 40_000), 1024);
        let tie = HitRecord::within(7232);
        assert_eq!(s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), tie), tie);

        let just_farther = HitRecord::within(7233);
        assert_eq!(s.intersect(Vec3::ZERO, Vec3(0, 0, SCALE), just_farther).t, 7232);
    }

    #[test]
    fn test_bob() {
        let mut s = red(Vec3(-1536, -512, 3500), 700).with_bob(300);
        s.bob_to(SCALE);
        assert_eq!(s.center, Vec3(-1536, -212, 3500));
        s.bob_to(-SCALE);
        assert_eq!(s.center.1, -812);
        s.bob_to(0);
        assert_eq!(s.center.1, -512);

        let mut still = red(Vec3(0, 7, 0), 100);
        still.bob_to(SCALE);
        assert_eq!(still.center.1, 7);
    }
}
