// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Guibas-Stolfi divide-and-conquer builder: recursively
//! triangulates a sorted slice of points and merges the two halves
//! along their lower common tangent, deleting edges that violate the
//! empty-circumcircle property as it zips the seam shut.
//!
//! Ported from `triangulate`/`triangulateDT` in the original C source.

use crate::point::Point;
use crate::predicates;
use crate::quadedge::{EdgeId, EdgeTable};

/// `+1` if `p` is right of the directed edge `orig(e) -> dest(e)`, `-1`
/// if left, `0` if collinear. Defined as the sign of
/// `-orient2d(orig, dest, p)`; the flip is part of the contract the
/// merge step's case analysis depends on.
fn point_compare_edge(points: &[Point], edges: &EdgeTable, p: usize, e: EdgeId) -> i32 {
    let orig = points[edges.orig(e)];
    let dest = points[edges.dest(e)];
    let det = -predicates::orient2d(orig, dest, points[p]);
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

fn in_circle(points: &[Point], i_p: usize, i_a: usize, i_b: usize, i_c: usize) -> bool {
    predicates::in_circle(points[i_a], points[i_b], points[i_c], points[i_p])
}

/// Triangulates the index range `[lo, hi)` of `points` (which must
/// already be sorted ascending by `(x, y)`), allocating into `edges`.
/// Returns `(left_outgoing, right_outgoing)`: the leftmost and
/// rightmost hull edges of the resulting subdivision, each directed
/// outward from the hull.
pub(crate) fn triangulate_range(
    points: &[Point],
    edges: &mut EdgeTable,
    lo: usize,
    hi: usize,
) -> (EdgeId, EdgeId) {
    let n = hi - lo;
    if n == 2 {
        let e = edges.make_edge(lo, lo + 1);
        return (e, edges.sym(e));
    }
    if n == 3 {
        let a = edges.make_edge(lo, lo + 1);
        let b = edges.make_edge(lo + 1, lo + 2);
        edges.splice(edges.sym(a), b);

        return match point_compare_edge(points, edges, lo + 2, a) {
            1 => {
                edges.connect(b, a);
                (a, edges.sym(b))
            }
            -1 => {
                let c = edges.connect(b, a);
                (edges.sym(c), c)
            }
            _ => (a, edges.sym(b)),
        };
    }

    let m = lo + (n + 1) / 2;
    let (ldo, mut ldi) = triangulate_range(points, edges, lo, m);
    let (mut rdi, rdo) = triangulate_range(points, edges, m, hi);

    // Lower common tangent: walk ldi/rdi along their hulls until the
    // edge from orig(ldi) to orig(rdi) is the lower tangent.
    loop {
        if point_compare_edge(points, edges, edges.orig(rdi), ldi) == 1 {
            ldi = edges.onext(edges.sym(ldi));
        } else if point_compare_edge(points, edges, edges.orig(ldi), rdi) == -1 {
            rdi = edges.oprev(edges.sym(rdi));
        } else {
            break;
        }
    }

    let mut base = edges.connect(edges.sym(ldi), rdi);
    let mut ldo = ldo;
    let mut rdo = rdo;
    if edges.orig(ldi) == edges.orig(ldo) {
        ldo = base;
    }
    if edges.orig(rdi) == edges.orig(rdo) {
        rdo = edges.sym(base);
    }

    // Zip the seam shut, pruning edges that fail the incircle test.
    loop {
        let mut rcand = edges.onext(edges.sym(base));
        let mut lcand = edges.oprev(base);

        let v_rcand = point_compare_edge(points, edges, edges.dest(rcand), base) == 1;
        let v_lcand = point_compare_edge(points, edges, edges.dest(lcand), base) == 1;
        if !v_rcand && !v_lcand {
            break;
        }

        if v_rcand {
            while point_compare_edge(points, edges, edges.dest(edges.onext(rcand)), base) == 1
                && in_circle(
                    points,
                    edges.dest(edges.onext(rcand)),
                    edges.dest(base),
                    edges.orig(base),
                    edges.dest(rcand),
                )
            {
                let tmp = edges.onext(rcand);
                edges.delete_edge(rcand);
                rcand = tmp;
            }
        }
        if v_lcand {
            while point_compare_edge(points, edges, edges.dest(edges.oprev(lcand)), base) == 1
                && in_circle(
                    points,
                    edges.dest(edges.oprev(lcand)),
                    edges.dest(base),
                    edges.orig(base),
                    edges.dest(lcand),
                )
            {
                let tmp = edges.oprev(lcand);
                edges.delete_edge(lcand);
                lcand = tmp;
            }
        }

        if !v_rcand
            || (v_rcand
                && in_circle(
                    points,
                    edges.dest(lcand),
                    edges.dest(rcand),
                    edges.orig(rcand),
                    edges.orig(lcand),
                ))
        {
            base = edges.connect(lcand, edges.sym(base));
        } else {
            base = edges.connect(edges.sym(base), edges.sym(rcand));
        }
    }

    (ldo, rdo)
}
