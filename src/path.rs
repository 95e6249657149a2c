// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting whole paths into lines and arcs.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{fit_biarcs, Arc, BiarcParams, CubicBez, Line, ParamCurve, PathPrimitive, Point};

/// A segment of a path to be approximated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A line segment, passed through unchanged.
    Line(Line),
    /// A cubic Bézier segment, approximated with biarcs.
    Cubic(CubicBez),
}

impl PathSeg {
    /// The start point of the segment.
    pub fn start(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p0,
            PathSeg::Cubic(c) => c.p0,
        }
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p1,
            PathSeg::Cubic(c) => c.p3,
        }
    }
}

impl From<Line> for PathSeg {
    fn from(line: Line) -> PathSeg {
        PathSeg::Line(line)
    }
}

impl From<CubicBez> for PathSeg {
    fn from(c: CubicBez) -> PathSeg {
        PathSeg::Cubic(c)
    }
}

/// A consumer of approximated primitives.
///
/// Implement this to stream output straight into a writer or geometry
/// store instead of collecting it.
pub trait PrimitiveSink {
    /// Receive a line.
    fn line(&mut self, line: Line);

    /// Receive a circular arc.
    fn arc(&mut self, arc: Arc);

    /// Receive either kind of primitive.
    fn primitive(&mut self, primitive: PathPrimitive) {
        match primitive {
            PathPrimitive::Line(line) => self.line(line),
            PathPrimitive::Arc(arc) => self.arc(arc),
        }
    }
}

impl PrimitiveSink for Vec<PathPrimitive> {
    fn line(&mut self, line: Line) {
        self.push(PathPrimitive::Line(line));
    }

    fn arc(&mut self, arc: Arc) {
        self.push(PathPrimitive::Arc(arc));
    }
}

impl<A: smallvec::Array<Item = PathPrimitive>> PrimitiveSink for SmallVec<A> {
    fn line(&mut self, line: Line) {
        self.push(PathPrimitive::Line(line));
    }

    fn arc(&mut self, arc: Arc) {
        self.push(PathPrimitive::Arc(arc));
    }
}

/// Counts from [`approximate_path`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathStats {
    /// Number of input segments.
    pub segments: usize,
    /// Number of lines emitted.
    pub lines: usize,
    /// Number of arcs emitted.
    pub arcs: usize,
    /// Number of cubic segments that hit the depth limit.
    pub depth_limited: usize,
}

impl PathStats {
    /// Total number of primitives emitted.
    #[inline]
    pub fn primitives(&self) -> usize {
        self.lines + self.arcs
    }
}

/// Approximate every segment of a path, sending the results to `sink`.
///
/// Lines pass through unchanged and cubics are fitted with
/// [`fit_biarcs`]. Output is emitted in input order; since each segment's
/// approximation starts and ends exactly on that segment's end points, a
/// connected input path gives a connected output chain.
pub fn approximate_path<I>(segments: I, params: &BiarcParams, sink: &mut impl PrimitiveSink) -> PathStats
where
    I: IntoIterator<Item = PathSeg>,
{
    let mut stats = PathStats::default();
    for seg in segments {
        stats.segments += 1;
        match seg {
            PathSeg::Line(line) => {
                stats.lines += 1;
                sink.line(line);
            }
            PathSeg::Cubic(c) => {
                let fit = fit_biarcs(&c, params);
                if fit.depth_limited {
                    stats.depth_limited += 1;
                }
                for prim in fit.primitives {
                    match prim {
                        PathPrimitive::Line(_) => stats.lines += 1,
                        PathPrimitive::Arc(_) => stats.arcs += 1,
                    }
                    sink.primitive(prim);
                }
            }
        }
    }
    log::trace!(
        "approximated {} segments with {} lines and {} arcs",
        stats.segments,
        stats.lines,
        stats.arcs
    );
    stats
}

/// Approximate a path and collect the primitives.
pub fn approximate_path_to_vec<I>(segments: I, params: &BiarcParams) -> Vec<PathPrimitive>
where
    I: IntoIterator<Item = PathSeg>,
{
    let mut out = Vec::new();
    approximate_path(segments, params, &mut out);
    out
}

/// Does the chain of primitives connect end to start, `eps` allowing?
pub fn is_connected(primitives: &[PathPrimitive], eps: f64) -> bool {
    primitives
        .windows(2)
        .all(|pair| pair[0].end().distance(pair[1].start()) <= eps)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use smallvec::SmallVec;

    use crate::{
        approximate_path, approximate_path_to_vec, is_connected, Arc, BiarcParams, CubicBez, Line,
        ParamCurve, PathPrimitive, PathSeg, PathStats, Point, PrimitiveSink,
    };

    fn rounded_corner_path() -> Vec<PathSeg> {
        vec![
            Line::new((0.0, 0.0), (0.0, 100.0)).into(),
            CubicBez::new((0.0, 100.0), (0.0, 200.0), (100.0, 200.0), (100.0, 100.0)).into(),
            Line::new((100.0, 100.0), (100.0, 0.0)).into(),
            CubicBez::new((100.0, 0.0), (66.0, 0.0), (33.0, 0.0), (0.0, 0.0)).into(),
        ]
    }

    #[test]
    fn mixed_path() {
        let mut out: Vec<PathPrimitive> = Vec::new();
        let stats = approximate_path(rounded_corner_path(), &BiarcParams::default(), &mut out);
        assert_eq!(
            stats,
            PathStats {
                segments: 4,
                lines: 3,
                arcs: 2,
                depth_limited: 0,
            }
        );
        assert_eq!(stats.primitives(), out.len());
        assert!(is_connected(&out, 0.0));
        assert_eq!(out[0].start(), Point::new(0.0, 0.0));
        assert_eq!(out[out.len() - 1].end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn sinks_agree() {
        let params = BiarcParams::new(5.0);
        let v = approximate_path_to_vec(rounded_corner_path(), &params);
        let mut sv: SmallVec<[PathPrimitive; 8]> = SmallVec::new();
        approximate_path(rounded_corner_path(), &params, &mut sv);
        assert_eq!(v.as_slice(), sv.as_slice());
    }

    #[derive(Default)]
    struct Counter {
        lines: usize,
        sweep: f64,
    }

    impl PrimitiveSink for Counter {
        fn line(&mut self, _line: Line) {
            self.lines += 1;
        }

        fn arc(&mut self, arc: Arc) {
            self.sweep += arc.sweep_decidegrees();
        }
    }

    #[test]
    fn custom_sink() {
        let mut counter = Counter::default();
        approximate_path(rounded_corner_path(), &BiarcParams::default(), &mut counter);
        assert_eq!(counter.lines, 3);
        // The arch turns clockwise through a half circle.
        assert!((counter.sweep + 1800.0).abs() < 1e-6);
    }

    #[test]
    fn empty_path() {
        let out = approximate_path_to_vec(core::iter::empty(), &BiarcParams::default());
        assert!(out.is_empty());
        assert!(is_connected(&out, 0.0));
    }

    #[test]
    fn seg_endpoints() {
        let path = rounded_corner_path();
        for pair in path.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }
}
