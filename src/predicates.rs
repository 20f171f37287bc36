// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sign-exact geometric predicates.
//!
//! `orient2d` and `incircle` delegate to the `robust` crate's adaptive
//! precision implementation of Shewchuk's predicates: fast
//! floating-point arithmetic with an error bound, falling back to exact
//! arithmetic only when the fast path's result could be ambiguous. The
//! sign of the returned value is always mathematically correct for the
//! given IEEE-754 doubles; the magnitude is unspecified.

use crate::point::Point;
use robust::Coord;

#[inline]
fn coord(p: Point) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Sign equals the sign of the signed area of `a -> b -> c`: positive
/// if `c` is left of the directed line `a -> b`, negative if right,
/// zero if collinear.
#[inline]
pub fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

/// Positive when `d` lies strictly inside the circumcircle of the
/// positively oriented triangle `a, b, c`; negative when strictly
/// outside; zero on the circle.
#[inline]
pub fn incircle(a: Point, b: Point, c: Point, d: Point) -> f64 {
    robust::incircle(coord(a), coord(b), coord(c), coord(d))
}

/// `true` iff `d` lies strictly inside the circumcircle of `a, b, c`
/// (which must be positively oriented).
#[inline]
pub fn in_circle(a: Point, b: Point, c: Point, d: Point) -> bool {
    incircle(a, b, c, d) > 0.0
}

/// Closed-form circumcenter and circumscribed-circle diameter of
/// `a, b, c`. Undefined (may produce NaN/infinite coordinates) for
/// collinear input; callers never invoke this in that case.
///
/// Ported from the determinant-ratio formula in the original's
/// `circleCenter`.
pub fn circumcenter(a: Point, b: Point, c: Point) -> (Point, f64) {
    let aa = a.x * a.x + a.y * a.y;
    let bb = b.x * b.x + b.y * b.y;
    let cc = c.x * c.x + c.y * c.y;

    let dy_bc = b.y - c.y;
    let dy_ca = c.y - a.y;
    let dy_ab = a.y - b.y;

    let d = 2.0 * (a.x * dy_bc + b.x * dy_ca + c.x * dy_ab);

    let cx = (aa * dy_bc + bb * dy_ca + cc * dy_ab) / d;
    let cy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;

    let center = Point::new(cx, cy);
    let dx = a.x - cx;
    let dy = a.y - cy;
    let radius = (dx * dx + dy * dy).sqrt();
    (center, 2.0 * radius)
}

/// Interior angle at the shared vertex of two contiguous edge vectors
/// `e = b - a` and `f = c - b`, computed from the arc-cosine of the
/// normalized dot product of their reverses (`a - b` and `b - c`).
///
/// The cosine argument is clamped into `[-1, 1]` before calling `acos`:
/// floating round-off can otherwise push a nearly-straight angle's
/// argument a hair outside that domain and produce `NaN`.
pub fn angle_between(a: Point, b: Point, c: Point) -> f64 {
    let ex = b.x - a.x;
    let ey = b.y - a.y;
    let fx = c.x - b.x;
    let fy = c.y - b.y;

    let dot = -(ex * fx + ey * fy);
    let len_e = (ex * ex + ey * ey).sqrt();
    let len_f = (fx * fx + fy * fy).sqrt();
    let cosine = clamp::clamp(dot / (len_e * len_f), -1.0, 1.0);
    cosine.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn orient2d_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(orient2d(a, b, Point::new(0.5, 1.0)) > 0.0);
        assert!(orient2d(a, b, Point::new(0.5, -1.0)) < 0.0);
        assert_eq!(orient2d(a, b, Point::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn incircle_unit_circle() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(-1.0, 0.0);
        assert!(in_circle(a, b, c, Point::new(0.0, 0.0)));
        assert!(!in_circle(a, b, c, Point::new(0.0, -5.0)));
    }

    #[test]
    fn circumcenter_right_triangle() {
        let (center, diameter) = circumcenter(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        );
        assert_relative_eq!(center.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(diameter, 2.0 * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn angle_between_right_angle_vertex() {
        // a=(1,0), b=(0,0), c=(0,1): the interior angle at the shared
        // vertex b between ray b->a and ray b->c is a right angle.
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert_relative_eq!(
            angle_between(a, b, c),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-9
        );
    }
}
