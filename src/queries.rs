// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Derived, read-only queries over a built quad-edge table: edge and
//! triangle enumeration, minimum interior angle, and the dual Voronoi
//! diagram. None of these mutate the edge table; they only walk it.

use smallvec::SmallVec;

use crate::point::Point;
use crate::predicates;
use crate::quadedge::{EdgeId, EdgeTable};

/// An undirected edge between two point-store indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEndpoints {
    pub a: usize,
    pub b: usize,
}

/// A bounded triangular face, named by its three point-store indices in
/// the order the face cycle was walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [usize; 3],
}

/// A Voronoi cell's neighbor across one of its three edges: either
/// another cell (by index into the centers returned alongside) or the
/// unbounded "outside".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoronoiNeighbor {
    Cell(usize),
    Outside,
}

pub(crate) fn enumerate_edges(edges: &EdgeTable) -> Vec<EdgeEndpoints> {
    edges
        .live_pairs()
        .map(|e| EdgeEndpoints {
            a: edges.orig(e),
            b: edges.dest(e),
        })
        .collect()
}

pub(crate) fn enumerate_triangles(points: &[Point], edges: &EdgeTable) -> Vec<Triangle> {
    walk_faces_with_points(points, edges)
        .into_iter()
        .map(|(tri, _)| tri)
        .collect()
}

/// `pointCompareEdge(p, e) == 1`: whether `p` lies strictly right of the
/// directed edge `orig(e) -> dest(e)`, the test used to tell the single
/// outer (unbounded) face apart from a bounded triangular one.
fn hull_side(points: &[Point], edges: &EdgeTable, p: usize, e: EdgeId) -> bool {
    let orig = points[edges.orig(e)];
    let dest = points[edges.dest(e)];
    -predicates::orient2d(orig, dest, points[p]) > 0.0
}

/// Walks every face cycle `e <- sym(onext(e))`, returning the bounded
/// triangular faces together with their bounding edge ids, so callers
/// needing both (Voronoi) don't have to walk twice. The outer face is
/// identified once, via [`hull_side`] on the first unvisited edge, and
/// excluded from the result.
fn walk_faces_with_points(
    points: &[Point],
    edges: &EdgeTable,
) -> Vec<(Triangle, SmallVec<[EdgeId; 3]>)> {
    let n = edges.len();
    let mut visited = vec![false; n];
    let mut faces = Vec::new();
    let mut outside_found = false;

    for start in edges.live_edges() {
        if visited[start] {
            continue;
        }

        let is_outside =
            !outside_found && hull_side(points, edges, edges.dest(edges.onext(start)), start);

        let mut cycle_edges: SmallVec<[EdgeId; 3]> = SmallVec::new();
        let mut cycle_verts: SmallVec<[usize; 3]> = SmallVec::new();
        let mut e = start;
        loop {
            visited[e] = true;
            cycle_edges.push(e);
            cycle_verts.push(edges.orig(e));
            e = edges.sym(edges.onext(e));
            if e == start {
                break;
            }
        }

        if is_outside {
            outside_found = true;
            continue;
        }

        if cycle_verts.len() == 3 {
            faces.push((
                Triangle {
                    vertices: [cycle_verts[0], cycle_verts[1], cycle_verts[2]],
                },
                cycle_edges,
            ));
        }
    }

    faces
}

/// Minimum interior angle over every bounded triangular face, or `+inf`
/// when there are fewer than three points or no successful build.
pub(crate) fn minimum_angle(points: &[Point], edges: &EdgeTable) -> f64 {
    let mut min_angle = f64::INFINITY;
    for (tri, _) in walk_faces_with_points(points, edges) {
        for i in 0..3 {
            let a = points[tri.vertices[i]];
            let b = points[tri.vertices[(i + 1) % 3]];
            let c = points[tri.vertices[(i + 2) % 3]];
            let angle = predicates::angle_between(a, b, c);
            min_angle = min_angle.min(angle);
        }
    }
    min_angle
}

/// The dual Voronoi diagram: one circumcenter per bounded triangular
/// face, plus for each face the neighbor across each of its three
/// edges (`sym` of that edge's enclosing face, or `Outside`).
pub struct VoronoiDiagram {
    pub centers: Vec<Point>,
    pub neighbors: Vec<[VoronoiNeighbor; 3]>,
}

pub(crate) fn voronoi(points: &[Point], edges: &EdgeTable) -> VoronoiDiagram {
    let faces = walk_faces_with_points(points, edges);
    let n_tri = faces.len();

    // Map every live half-edge id to the triangle it bounds, or to a
    // sentinel marking the outer (unbounded) face.
    let table_len = edges.len();
    let mut edge_to_face = vec![usize::MAX; table_len];
    for (tri_idx, (_, cycle)) in faces.iter().enumerate() {
        for &e in cycle {
            edge_to_face[e] = tri_idx;
        }
    }

    let mut centers = Vec::with_capacity(n_tri);
    let mut neighbors = Vec::with_capacity(n_tri);

    for (tri, cycle) in &faces {
        let (center, _diameter) = predicates::circumcenter(
            points[tri.vertices[0]],
            points[tri.vertices[1]],
            points[tri.vertices[2]],
        );
        centers.push(center);

        let mut face_neighbors = [VoronoiNeighbor::Outside; 3];
        for (i, &e) in cycle.iter().enumerate() {
            let across = edges.sym(e);
            face_neighbors[i] = match edge_to_face.get(across).copied() {
                Some(idx) if idx != usize::MAX => VoronoiNeighbor::Cell(idx),
                _ => VoronoiNeighbor::Outside,
            };
        }
        neighbors.push(face_neighbors);
    }

    VoronoiDiagram { centers, neighbors }
}

/// Extension factor for rays projected from a Voronoi cell through the
/// hull out to "outside"; a rendering convenience carried over from the
/// original (Open Question 2), never relied upon by core correctness.
const OUTSIDE_RAY_FACTOR: f64 = 100.0;

/// One line segment per (cell, edge) pair: either connecting two
/// adjacent Voronoi centers, or a ray from a boundary cell's center out
/// past the hull when the neighbor is `Outside`.
pub(crate) fn voronoi_lines(
    points: &[Point],
    edges: &EdgeTable,
    diagram: &VoronoiDiagram,
) -> Vec<(Point, Point)> {
    let faces = walk_faces_with_points(points, edges);
    let mut lines = Vec::new();

    for (tri_idx, (_tri, cycle)) in faces.iter().enumerate() {
        let center = diagram.centers[tri_idx];
        for (i, &e) in cycle.iter().enumerate() {
            match diagram.neighbors[tri_idx][i] {
                VoronoiNeighbor::Cell(other) => {
                    lines.push((center, diagram.centers[other]));
                }
                VoronoiNeighbor::Outside => {
                    let a = points[edges.orig(e)];
                    let b = points[edges.dest(e)];
                    lines.push((center, project_ray(center, a, b)));
                }
            }
        }
    }

    lines
}

fn project_ray(center: Point, a: Point, b: Point) -> Point {
    let dx = b.x - a.x;
    let (xp, yp) = if dx == 0.0 {
        (a.x, center.y)
    } else {
        let m = (b.y - a.y) / dx;
        let p = a.y - a.x * m;
        let det = 1.0 / (1.0 + m * m);
        (
            (center.x + m * (center.y - p)) * det,
            (p + m * (m * center.y + center.x)) * det,
        )
    };

    let mut factor = OUTSIDE_RAY_FACTOR;
    if predicates::orient2d(center, a, b) > 0.0 {
        factor = -factor;
    }

    Point::new(
        center.x + factor * (xp - center.x),
        center.y + factor * (yp - center.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::triangulate_range;
    use crate::quadedge::EdgeTable;

    fn sorted(points: Vec<Point>) -> Vec<Point> {
        let mut points = points;
        points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(a.y.partial_cmp(&b.y).unwrap()));
        points
    }

    #[test]
    fn right_triangle_one_face_min_angle_quarter_pi() {
        let points = sorted(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        let mut edges = EdgeTable::with_capacity(16);
        triangulate_range(&points, &mut edges, 0, points.len());

        let tris = enumerate_triangles(&points, &edges);
        assert_eq!(tris.len(), 1);
        let min_angle = minimum_angle(&points, &edges);
        assert!((min_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn unit_square_two_triangles() {
        let points = sorted(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        let mut edges = EdgeTable::with_capacity(16);
        triangulate_range(&points, &mut edges, 0, points.len());

        let tris = enumerate_triangles(&points, &edges);
        assert_eq!(tris.len(), 2);
        assert_eq!(enumerate_edges(&edges).len(), 5);
    }

    #[test]
    fn collinear_has_no_triangles() {
        let points = sorted(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        let mut edges = EdgeTable::with_capacity(16);
        triangulate_range(&points, &mut edges, 0, points.len());
        assert_eq!(enumerate_triangles(&points, &edges).len(), 0);
    }
}
