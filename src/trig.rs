//! src/trig.rs
//! -----------
//! Degree-indexed sine/cosine in fixed point, for targets without an FPU.

use crate::fixed::Fixed;

/// Fixed-point trig lookup. Degrees wrap, results are scaled by `SCALE`.
pub trait Trig {
    fn sin(&self, degrees: i32) -> Fixed;

    fn cos(&self, degrees: i32) -> Fixed {
        self.sin(degrees.wrapping_add(90))
    }
}

/// `round(sin(d°) * 1024)` for d in 0..=90.
const QUARTER_WAVE: [Fixed; 91] = [
    0, 18, 36, 54, 71, 89, 107, 125, 143, 160, 178, 195, 213, 230, 248, 265, 282, 299, 316, 333,
    350, 367, 384, 400, 416, 433, 449, 465, 481, 496, 512, 527, 543, 558, 573, 587, 602, 616, 630,
    644, 658, 672, 685, 698, 711, 724, 737, 749, 761, 773, 784, 796, 807, 818, 828, 839, 849, 859,
    868, 878, 887, 896, 904, 912, 920, 928, 935, 943, 949, 956, 962, 968, 974, 979, 984, 989, 994,
    998, 1002, 1005, 1008, 1011, 1014, 1016, 1018, 1020, 1022, 1023, 1023, 1024, 1024,
];

/// Quarter-wave table mirrored into the other three quadrants.
#[derive(Clone, Copy, Debug, Default)]
pub struct SineTable;

impl Trig for SineTable {
    fn sin(&self, degrees: i32) -> Fixed {
        let d = degrees.rem_euclid(360) as usize;
        match d {
            0..=90 => QUARTER_WAVE[d],
            91..=180 => QUARTER_WAVE[180 - d],
            181..=270 => -QUARTER_WAVE[d - 180],
            _ => -QUARTER_WAVE[360 - d],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::SCALE;

    #[test]
    fn test_cardinal_angles() {
        let t = SineTable;
        assert_eq!(t.sin(0), 0);
        assert_eq!(t.sin(90), SCALE);
        assert_eq!(t.sin(180), 0);
        assert_eq!(t.sin(270), -SCALE);
        assert_eq!(t.cos(0), SCALE);
        assert_eq!(t.cos(90), 0);
        assert_eq!(t.cos(180), -SCALE);
    }

    #[test]
    fn test_wraps_degrees() {
        let t = SineTable;
        assert_eq!(t.sin(30), 512);
        assert_eq!(t.sin(390), 512);
        assert_eq!(t.sin(-330), 512);
        assert_eq!(t.sin(-30), -512);
        assert_eq!(t.cos(360 + 60), 512);
    }

    #[test]
    fn test_symmetry() {
        let t = SineTable;
        for d in 0..360 {
            assert_eq!(t.sin(d), -t.sin(-d), "odd at {d}");
            assert_eq!(t.sin(d), t.sin(180 - d), "mirror at {d}");
            let s = t.sin(d) as i64;
            let c = t.cos(d) as i64;
            let unit = (s * s + c * c) >> 10;
            assert!((unit - SCALE as i64).abs() <= 3, "sin²+cos² = {unit} at {d}");
        }
    }
}
