// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random point-set generators backing the `-p` CLI distributions.
//! Ported from `random_uniform_points`/`random_points`/`random_polygon`
//! in the original's `inputs.c`; `uniform_circle` has no counterpart
//! there and is modeled on `uniform` scaled into an ellipse instead.

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::point::Point;

/// `n` points drawn independently per axis from `[-a, a] x [-b, b]`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize, a: f64, b: f64) -> Vec<Point> {
    let ux = Uniform::new_inclusive(-a, a);
    let uy = Uniform::new_inclusive(-b, b);
    (0..n)
        .map(|_| Point::new(ux.sample(rng), uy.sample(rng)))
        .collect()
}

/// `n` points scaled into an axis-aligned ellipse of half-extents
/// `(a, b)`: a uniform square sample is rejected until it falls inside
/// the unit disk, then scaled.
pub fn uniform_circle<R: Rng + ?Sized>(rng: &mut R, n: usize, a: f64, b: f64) -> Vec<Point> {
    let u = Uniform::new_inclusive(-1.0, 1.0);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let x = u.sample(rng);
        let y = u.sample(rng);
        if x * x + y * y <= 1.0 {
            out.push(Point::new(x * a, y * b));
        }
    }
    out
}

/// `n` points in a Gaussian mixture around 1-6 uniformly placed
/// centroids, each with its own per-axis sigma. Ported from
/// `random_points`.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Point> {
    let n_centroids = rng.gen_range(1..=6usize);
    let range = 0.7 * (1.0 - 1.0 / n_centroids as f64);
    let centroid_dist = Uniform::new_inclusive(-range, range);
    let sigma_dist = Uniform::new_inclusive(0.1, 0.4);

    let centroids: Vec<(f64, f64)> = (0..n_centroids)
        .map(|_| (centroid_dist.sample(rng), centroid_dist.sample(rng)))
        .collect();
    let sigmas: Vec<(f64, f64)> = (0..n_centroids)
        .map(|_| (sigma_dist.sample(rng), sigma_dist.sample(rng)))
        .collect();

    (0..n)
        .map(|i| {
            let (cx, cy) = centroids[i % n_centroids];
            let (sx, sy) = sigmas[i % n_centroids];
            let x = Normal::new(cx, sx).unwrap().sample(rng);
            let y = Normal::new(cy, sy).unwrap().sample(rng);
            Point::new(x, y)
        })
        .collect()
}

/// `dx/(|dx|+|dy|)` folded into one monotonic angular ordering key per
/// quadrant pair, avoiding `atan2`. See the original's `pseudoangle`.
fn pseudoangle(dx: f64, dy: f64) -> f64 {
    let p = dx / (dx.abs() + dy.abs());
    if dy < 0.0 {
        3.0 + p
    } else {
        1.0 - p
    }
}

/// `n` points scattered from a zero-mean Gaussian, sorted into a simple
/// (non-self-intersecting) polygon boundary by pseudoangle around the
/// origin, then Laplacian-smoothed in place for `smoothing_iterations`
/// rounds. Ported from `random_polygon`.
pub fn polygon<R: Rng + ?Sized>(rng: &mut R, n: usize, smoothing_iterations: usize) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let sigma_dist = Uniform::new_inclusive(0.0, 1.0);
    let sigma_x = sigma_dist.sample(rng).max(1e-6);
    let sigma_y = sigma_dist.sample(rng).max(1e-6);

    let mut coords: Vec<Point> = (0..n)
        .map(|_| {
            let x = Normal::new(0.0, sigma_x).unwrap().sample(rng);
            let y = Normal::new(0.0, sigma_y).unwrap().sample(rng);
            Point::new(x, y)
        })
        .collect();

    coords.sort_by(|a, b| {
        pseudoangle(b.x, b.y)
            .partial_cmp(&pseudoangle(a.x, a.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if n >= 3 {
        for _ in 0..smoothing_iterations {
            let start = rng.gen_range(0..n);
            for i in 1..n - 1 {
                let cur = (start + i) % n;
                let prev = (start + i + n - 1) % n;
                let next = (start + i + 1) % n;
                let x = (2.0 * coords[cur].x + coords[prev].x + coords[next].x) * 0.25;
                let y = (2.0 * coords[cur].y + coords[prev].y + coords[next].y) * 0.25;
                coords[cur] = Point::new(x, y);
            }
        }
    }

    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_hc::Hc128Rng;

    fn rng() -> Hc128Rng {
        Hc128Rng::seed_from_u64(42)
    }

    #[test]
    fn uniform_stays_within_bounds() {
        let mut rng = rng();
        let pts = uniform(&mut rng, 200, 2.0, 3.0);
        assert_eq!(pts.len(), 200);
        for p in pts {
            assert!(p.x.abs() <= 2.0);
            assert!(p.y.abs() <= 3.0);
        }
    }

    #[test]
    fn uniform_circle_stays_within_ellipse() {
        let mut rng = rng();
        let pts = uniform_circle(&mut rng, 100, 2.0, 1.0);
        assert_eq!(pts.len(), 100);
        for p in pts {
            let nx = p.x / 2.0;
            let ny = p.y / 1.0;
            assert!(nx * nx + ny * ny <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn normal_generates_requested_count() {
        let mut rng = rng();
        let pts = normal(&mut rng, 150);
        assert_eq!(pts.len(), 150);
    }

    #[test]
    fn polygon_generates_requested_count_and_is_deterministic() {
        let pts_a = polygon(&mut rng(), 30, 4);
        let pts_b = polygon(&mut rng(), 30, 4);
        assert_eq!(pts_a.len(), 30);
        assert_eq!(pts_a, pts_b);
    }

    #[test]
    fn polygon_with_zero_points_is_empty() {
        let pts = polygon(&mut rng(), 0, 4);
        assert!(pts.is_empty());
    }
}
