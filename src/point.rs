// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-dimensional point and the ordered store that owns all points
//! referenced by a [`Triangulation`](crate::Triangulation).

use cgmath::Point2;
#[cfg(feature = "serde_serialize")]
use serde::{Deserialize, Serialize};

/// Minimum Euclidean distance between two distinct stored points.
pub const MIN_DIST: f64 = 1e-10;
const MIN_DIST_SQ: f64 = MIN_DIST * MIN_DIST;

/// A point in the plane, referenced everywhere downstream by its index
/// into a [`PointStore`] rather than by value or reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde_serialize", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance2(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

fn compare_points(a: &Point, b: &Point) -> std::cmp::Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}

/// Owns the dynamically-sized, ordered sequence of points a
/// [`Triangulation`](crate::Triangulation) is built over.
///
/// Invariants: no two stored points lie within [`MIN_DIST`] of each
/// other (enforced on initial dedup and on [`PointStore::add`]); while a
/// triangulation built from this store is valid, the sequence is sorted
/// ascending by `(x, y)`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde_serialize", derive(Serialize, Deserialize))]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Builds a store from `points`. When `remove_duplicates` is set,
    /// the input is sorted and runs of coincident points collapse to a
    /// single representative.
    pub fn new(points: Vec<Point>, remove_duplicates: bool) -> Self {
        let mut points = points;
        if remove_duplicates && points.len() > 1 {
            points.sort_by(compare_points);
            points.dedup_by(|a, b| a.x == b.x && a.y == b.y);
        }
        PointStore { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Sorts the store ascending by `(x, then y)`; a precondition of the
    /// divide-and-conquer builder.
    pub(crate) fn sort(&mut self) {
        self.points.sort_by(compare_points);
    }

    /// Index of the stored point nearest `query`, or `None` when empty.
    pub fn nearest_index(&self, query: Point) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.distance2(&query)
                    .partial_cmp(&b.distance2(&query))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(idx, _)| idx)
    }

    /// Squared distance from `query` to the nearest stored point, or
    /// `+inf` when empty.
    pub fn distance_to_nearest(&self, query: Point) -> f64 {
        self.nearest_index(query)
            .map(|idx| self.points[idx].distance2(&query))
            .unwrap_or(f64::INFINITY)
    }

    /// Appends `point` unless an existing point lies within
    /// [`MIN_DIST`] of it. Returns whether the point was added.
    pub fn add(&mut self, point: Point) -> bool {
        if self.distance_to_nearest(point) <= MIN_DIST_SQ {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Removes the point at `index`, shifting the tail down one slot.
    pub fn delete_at(&mut self, index: usize) {
        self.points.remove(index);
    }

    /// Overwrites the coordinates of the point at `index`.
    pub fn update_at(&mut self, index: usize, point: Point) {
        self.points[index] = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_collapses_coincident_points() {
        let store = PointStore::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ],
            true,
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn nearest_index_picks_closest() {
        let store = PointStore::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(1.0, 1.0)],
            false,
        );
        assert_eq!(store.nearest_index(Point::new(0.9, 0.9)), Some(2));
    }

    #[test]
    fn nearest_index_empty_is_none() {
        let store = PointStore::new(vec![], false);
        assert_eq!(store.nearest_index(Point::new(0.0, 0.0)), None);
        assert_eq!(store.distance_to_nearest(Point::new(0.0, 0.0)), f64::INFINITY);
    }

    #[test]
    fn add_rejects_near_duplicate() {
        let mut store = PointStore::new(vec![Point::new(0.0, 0.0)], false);
        assert!(!store.add(Point::new(1e-12, 0.0)));
        assert_eq!(store.len(), 1);
        assert!(store.add(Point::new(1.0, 0.0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_and_update() {
        let mut store = PointStore::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
            false,
        );
        store.delete_at(1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Point::new(2.0, 0.0));
        store.update_at(0, Point::new(5.0, 5.0));
        assert_eq!(store.get(0), Point::new(5.0, 5.0));
    }
}
