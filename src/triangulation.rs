// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The public handle over a point set and its (possibly stale) Delaunay
//! triangulation: owns the [`PointStore`] and [`EdgeTable`], enforces
//! the rebuild-on-mutate contract, and exposes the derived queries.

use tracing::{debug, instrument};

use crate::builder;
use crate::point::{Point, PointStore};
use crate::quadedge::EdgeTable;
use crate::queries::{self, EdgeEndpoints, Triangle, VoronoiDiagram};

/// Initial edge-table capacity hint: `ceil(3 * n * ln(n))`, a loose
/// upper bound on the number of directed half-edges a planar
/// triangulation of `n` points can hold. Used only to size the first
/// allocation; the table still grows on demand past this if needed.
fn capacity_hint(n: usize) -> usize {
    if n < 2 {
        return 2;
    }
    let n_f = n as f64;
    (3.0 * n_f * n_f.ln()).ceil().max(2.0) as usize
}

/// Owns a point set and the quad-edge table of its Delaunay
/// triangulation. Any mutation to the point set (`add`, `delete`,
/// `update`) drops the current triangulation rather than repairing it
/// incrementally; the next query re-triangulates from scratch.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    points: PointStore,
    edges: EdgeTable,
    valid: bool,
}

impl Triangulation {
    /// Builds a triangulation over `points`. When `remove_duplicates` is
    /// set, coincident points collapse to one representative first (see
    /// [`PointStore::new`]).
    pub fn new(points: Vec<Point>, remove_duplicates: bool) -> Self {
        let points = PointStore::new(points, remove_duplicates);
        let mut t = Triangulation {
            points,
            edges: EdgeTable::with_capacity(2),
            valid: false,
        };
        t.rebuild();
        t
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    pub fn point(&self, index: usize) -> Point {
        self.points.get(index)
    }

    /// Whether the edge table reflects the current point set. `true`
    /// after `new`/`rebuild` builds successfully; stays `false` after a
    /// mutator runs and before the next rebuild (closed automatically
    /// by every query method), and also for trivial input (fewer than
    /// two points), which `rebuild` leaves unbuilt.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Re-triangulates from scratch. Called automatically by every
    /// query method when `is_valid()` is false; exposed directly for
    /// callers that want to force the rebuild at a known point (e.g.
    /// to measure it standalone).
    #[instrument(skip(self), fields(n = self.points.len()))]
    pub fn rebuild(&mut self) {
        self.points.sort();
        let n = self.points.len();
        self.edges = EdgeTable::with_capacity(capacity_hint(n));
        if n >= 2 {
            builder::triangulate_range(self.points.as_slice(), &mut self.edges, 0, n);
            self.valid = true;
        }
        debug!(edges = self.edges.live_count(), valid = self.valid, "triangulation rebuilt");
    }

    fn ensure_valid(&mut self) {
        if !self.valid {
            self.rebuild();
        }
    }

    /// Appends `point` unless it lies within
    /// [`MIN_DIST`](crate::point::MIN_DIST) of an existing point.
    /// Invalidates the current triangulation regardless of outcome's
    /// idempotence; the rebuild controller does not track whether a
    /// mutation was a no-op.
    pub fn add_point(&mut self, point: Point) -> bool {
        let added = self.points.add(point);
        self.valid = false;
        added
    }

    pub fn delete_point(&mut self, index: usize) {
        self.points.delete_at(index);
        self.valid = false;
    }

    pub fn update_point(&mut self, index: usize, point: Point) {
        self.points.update_at(index, point);
        self.valid = false;
    }

    pub fn nearest_point_index(&self, query: Point) -> Option<usize> {
        self.points.nearest_index(query)
    }

    pub fn edges(&mut self) -> Vec<EdgeEndpoints> {
        self.ensure_valid();
        queries::enumerate_edges(&self.edges)
    }

    pub fn triangles(&mut self) -> Vec<Triangle> {
        self.ensure_valid();
        queries::enumerate_triangles(self.points.as_slice(), &self.edges)
    }

    /// Smallest interior angle over every triangular face, in radians.
    /// `+inf` for fewer than three points.
    pub fn minimum_angle(&mut self) -> f64 {
        self.ensure_valid();
        queries::minimum_angle(self.points.as_slice(), &self.edges)
    }

    pub fn voronoi(&mut self) -> VoronoiDiagram {
        self.ensure_valid();
        queries::voronoi(self.points.as_slice(), &self.edges)
    }

    pub fn voronoi_lines(&mut self) -> Vec<(Point, Point)> {
        self.ensure_valid();
        let diagram = queries::voronoi(self.points.as_slice(), &self.edges);
        queries::voronoi_lines(self.points.as_slice(), &self.edges, &diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_immediately() {
        let t = Triangulation::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            true,
        );
        assert!(t.is_valid());
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn trivial_input_stays_invalid() {
        let t = Triangulation::new(vec![Point::new(0.0, 0.0)], true);
        assert!(!t.is_valid());
        let empty = Triangulation::new(vec![], true);
        assert!(!empty.is_valid());
    }

    #[test]
    fn mutation_invalidates_until_next_query() {
        let mut t = Triangulation::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            true,
        );
        t.add_point(Point::new(1.0, 1.0));
        assert!(!t.is_valid());
        let tris = t.triangles();
        assert!(t.is_valid());
        assert_eq!(tris.len(), 2);
    }

    #[test]
    fn duplicate_points_are_deduplicated() {
        let t = Triangulation::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ],
            true,
        );
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn delete_then_rebuild_drops_a_vertex() {
        let mut t = Triangulation::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            true,
        );
        t.delete_point(0);
        let edges = t.edges();
        assert_eq!(t.len(), 3);
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn capacity_hint_grows_with_n() {
        assert!(capacity_hint(100) > capacity_hint(10));
        assert!(capacity_hint(1) >= 2);
    }
}
