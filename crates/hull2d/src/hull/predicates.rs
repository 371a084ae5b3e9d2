//! Orientation predicates and segment intersection.
//!
//! Inputs are f32, products are taken in f64, and the zero band is the f32
//! machine epsilon: near-zero areas absorb the rounding noise of the narrower
//! input type and count as exactly collinear.

use super::types::Point;

/// Zero band for signed areas and determinants.
pub const AREA_EPS: f64 = f32::EPSILON as f64;

/// Sign of the doubled area of triangle `abc`: `1` for CCW, `-1` for CW,
/// `0` when collinear within [`AREA_EPS`].
#[inline]
pub fn area_sign(a: &Point, b: &Point, c: &Point) -> i32 {
    let area2 = f64::from(b.x - a.x) * f64::from(c.y - a.y)
        - f64::from(c.x - a.x) * f64::from(b.y - a.y);
    if area2 > AREA_EPS {
        1
    } else if area2 < -AREA_EPS {
        -1
    } else {
        0
    }
}

/// `c` strictly left of the directed line `a → b`.
#[inline]
pub fn left(a: &Point, b: &Point, c: &Point) -> bool {
    area_sign(a, b, c) > 0
}

/// `c` left of or on the directed line `a → b`.
#[inline]
pub fn left_on(a: &Point, b: &Point, c: &Point) -> bool {
    area_sign(a, b, c) >= 0
}

#[inline]
pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
    area_sign(a, b, c) == 0
}

/// Closed segments `a0a1` and `b0b1` share a point.
///
/// Parallel segments (|denominator| below [`AREA_EPS`]) are reported as
/// disjoint, including collinear overlapping ones.
pub fn seg_seg_intersect(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> bool {
    let (a0x, a0y) = (f64::from(a0.x), f64::from(a0.y));
    let (a1x, a1y) = (f64::from(a1.x), f64::from(a1.y));
    let (b0x, b0y) = (f64::from(b0.x), f64::from(b0.y));
    let (b1x, b1y) = (f64::from(b1.x), f64::from(b1.y));

    let denom = a0x * (b1y - b0y) + a1x * (b0y - b1y) + b1x * (a1y - a0y) + b0x * (a0y - a1y);
    if denom.abs() < AREA_EPS {
        return false;
    }

    // s runs along a0a1, t along b0b1.
    let s = (a0x * (b1y - b0y) + b0x * (a0y - b1y) + b1x * (b0y - a0y)) / denom;
    let t = -(a0x * (b0y - a1y) + a1x * (a0y - b0y) + b0x * (a1y - a0y)) / denom;

    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}
