//! src/fixed.rs
//! ------------
//! Q21.10 fixed-point scalars. A raw value `v` stands for `v / SCALE`.
//!
//! Every product goes through an `i64` before it is shifted back down, so
//! scene coordinates up to roughly 2^21 can be multiplied by intensities
//! and reflectances without wrapping.

/// Raw fixed-point scalar.
pub type Fixed = i32;

pub const SHIFT: u32 = 10;
pub const SCALE: Fixed = 1 << SHIFT;

/// Nearest distance accepted as a hit.
pub const EPS_T_MIN: Fixed = 20;
/// Offset along the normal for shadow ray origins.
pub const EPS_SHADOW_BIAS: Fixed = 50;
/// Offset along the normal for reflection ray origins.
pub const EPS_REFLECT_BIAS: Fixed = 20;

/// "No hit yet" distance.
pub const BIG_DIST: Fixed = 999_999_999;

/// Deepest recursion level that may still spawn a reflection ray.
pub const MAX_DEPTH: u32 = 2;

/// `(a * b) >> SHIFT`
#[inline]
pub fn scale(a: Fixed, b: Fixed) -> Fixed {
    narrow(a as i64 * b as i64)
}

/// `(a * SCALE) / b`, truncating toward zero. `b` must not be zero.
#[inline]
pub fn div_scale(a: Fixed, b: Fixed) -> Fixed {
    ((a as i64 * SCALE as i64) / b as i64) as Fixed
}

/// Brings a widened product (or sum of products) back to fixed scale.
#[inline]
pub fn narrow(wide: i64) -> Fixed {
    (wide >> SHIFT) as Fixed
}

/// Floor square root, digit by digit in base 4. Non-positive input yields 0.
pub fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut n = n;
    let mut res: i64 = 0;
    let mut bit: i64 = 1 << 62;

    while bit > n {
        bit >>= 2;
    }

    while bit != 0 {
        if n >= res + bit {
            n -= res + bit;
            res = (res >> 1) + bit;
        } else {
            res >>= 1;
        }
        bit >>= 2;
    }
    res
}
