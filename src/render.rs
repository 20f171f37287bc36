// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Textual stand-in for interactive rendering. The spec treats
//! rendering, keystroke capture, and on-screen animation as an external
//! collaborator outside the triangulation core's scope; this prints a
//! one-shot summary instead of opening a window.

use std::time::Duration;

use tracing::info;

use crate::triangulation::Triangulation;

/// A single textual snapshot of a triangulation, in lieu of a drawn
/// frame: point/edge/triangle counts, minimum angle, and build time.
pub fn summarize(t: &mut Triangulation, build_time: Duration) -> String {
    let edges = t.edges().len();
    let triangles = t.triangles().len();
    let min_angle = t.minimum_angle();
    format!(
        "points={} edges={} triangles={} min_angle={:.6}rad build_time={:.3}ms",
        t.len(),
        edges,
        triangles,
        min_angle,
        build_time.as_secs_f64() * 1000.0
    )
}

/// Prints `summarize`'s output, honoring `-d` (disable entirely) and
/// `-t` (an artificial pause between phases, for demo pacing only —
/// never affects the computed triangulation).
pub fn show(t: &mut Triangulation, build_time: Duration, disabled: bool, pause_ms: u64) {
    if disabled {
        return;
    }
    if pause_ms > 0 {
        std::thread::sleep(Duration::from_millis(pause_ms));
    }
    let summary = summarize(t, build_time);
    info!("{summary}");
    println!("{summary}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn summarize_reports_counts() {
        let mut t = Triangulation::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            true,
        );
        let summary = summarize(&mut t, Duration::from_millis(1));
        assert!(summary.contains("points=3"));
        assert!(summary.contains("triangles=1"));
    }

    #[test]
    fn disabled_show_does_not_panic() {
        let mut t = Triangulation::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            true,
        );
        show(&mut t, Duration::from_millis(0), true, 0);
    }
}
