// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plain-text point/edge I/O in the format spec §6 fixes bit-exactly:
//! an input file is a count line followed by one `x y` line per point;
//! an output file is a `"N M"` header followed by `N` point lines and
//! then `M` endpoint lines (two consecutive lines per rendered edge).

use std::io::Write as _;
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::point::Point;

/// Parses a point-count line followed by that many `x y` lines.
/// Returns `Error::Parse` with a 1-based line number on malformed
/// input, matching the original's plain `fscanf` point loader.
pub fn read_points(text: &str) -> Result<Vec<Point>> {
    let mut lines = text.lines().enumerate();

    let (_, count_line) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        message: "missing point count".to_string(),
    })?;
    let count: usize = count_line.trim().parse().map_err(|_| Error::Parse {
        line: 1,
        message: format!("expected an integer point count, got {count_line:?}"),
    })?;

    let mut points = Vec::with_capacity(count);
    for (idx, line) in lines.by_ref().take(count) {
        points.push(parse_point_line(idx + 1, line)?);
    }

    if points.len() != count {
        return Err(Error::Parse {
            line: points.len() + 2,
            message: format!("expected {count} points, found {}", points.len()),
        });
    }

    Ok(points)
}

fn parse_point_line(line_no: usize, line: &str) -> Result<Point> {
    let mut fields = line.split_whitespace();
    let parse_one = |field: Option<&str>| -> Result<f64> {
        field
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| Error::Parse {
                line: line_no,
                message: format!("expected \"x y\", got {line:?}"),
            })
    };
    let x = parse_one(fields.next())?;
    let y = parse_one(fields.next())?;
    Ok(Point::new(x, y))
}

/// Reads and parses a point file from `path`.
pub fn read_points_file(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    read_points(&text)
}

/// Serializes `points` and `lines` (endpoint pairs, e.g. triangulation
/// edges or Voronoi segments) into the `"N M"` header format.
pub fn format_output(points: &[Point], lines: &[(Point, Point)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", points.len(), lines.len() * 2));
    for p in points {
        out.push_str(&format_point(*p));
    }
    for (a, b) in lines {
        out.push_str(&format_point(*a));
        out.push_str(&format_point(*b));
    }
    out
}

/// Formats a point's coordinates the way C's `%lf` does: fixed-point,
/// six digits after the decimal point.
fn format_point(p: Point) -> String {
    format!("{:.6} {:.6}\n", p.x, p.y)
}

/// Writes the formatted output to `path`. A failure to open or write
/// the path is logged as a warning and otherwise ignored, per spec §7
/// ("missing output path" is a recoverable, non-fatal condition).
pub fn write_output_file(path: impl AsRef<Path>, points: &[Point], lines: &[(Point, Point)]) {
    let path = path.as_ref();
    let contents = format_output(points, lines);
    let result = std::fs::File::create(path).and_then(|mut f| f.write_all(contents.as_bytes()));
    if let Err(err) = result {
        warn!(path = %path.display(), error = %err, "could not write output file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_small_point_set() {
        let text = "3\n0 0\n1 0\n0 1\n";
        let points = read_points(text).unwrap();
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    }

    #[test]
    fn rejects_bad_count_line() {
        let err = read_points("not-a-number\n0 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_malformed_point_line() {
        let err = read_points("1\nonly-one-field\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_short_point_list() {
        let err = read_points("2\n0 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn format_output_header_matches_counts() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let lines = vec![(points[0], points[1])];
        let text = format_output(&points, &lines);
        let mut it = text.lines();
        assert_eq!(it.next(), Some("2 2"));
    }
}
