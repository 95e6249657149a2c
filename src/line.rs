// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::Range;

use crate::{Nearest, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point, Vec2};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.arclen(0.0)
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, displacement): (Point, Vec2)) -> Self {
        Line::new(origin, origin + displacement)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        Line {
            p0: self.eval(range.start),
            p1: self.eval(range.end),
        }
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveArclen for Line {
    #[inline]
    fn arclen(&self, _accuracy: f64) -> f64 {
        (self.p1 - self.p0).hypot()
    }
}

impl ParamCurveNearest for Line {
    #[inline]
    fn nearest(&self, p: Point, _accuracy: f64) -> Nearest {
        let d = self.p1 - self.p0;
        let v = p - self.p0;

        // Projection parameter of `p` onto the segment. This is infinite or
        // NaN when the segment has zero length; the clamp below sends
        // `-inf` and NaN to 0 and `inf` to 1.
        let t = d.dot(v) / d.hypot2();
        #[allow(clippy::manual_clamp)]
        let t = t.max(0.).min(1.);

        let distance_sq = (v - t * d).hypot2();

        Nearest { distance_sq, t }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point};

    #[test]
    fn line_reversed() {
        let l = Line::new((0.0, 0.0), (1.0, 1.0));
        let f = l.reversed();

        assert_eq!(l.p0, f.p1);
        assert_eq!(l.p1, f.p0);

        // Reversing it again should result in the original line
        assert_eq!(l, f.reversed());
    }

    #[test]
    fn line_arclen() {
        let l = Line::new((0.0, 0.0), (1.0, 1.0));
        let true_len = 2.0f64.sqrt();
        assert!((l.arclen(0.0) - true_len).abs() < 1e-15);
        assert!((l.length() - true_len).abs() < 1e-15);
    }

    #[test]
    fn line_eval_endpoints() {
        let l = Line::new((2.0, -1.0), (7.5, 3.25));
        assert_eq!(l.eval(0.0), l.p0);
        assert_eq!(l.start(), l.p0);
        assert_eq!(l.end(), l.p1);
        assert_eq!(l.midpoint(), Point::new(4.75, 1.125));
    }

    #[test]
    fn line_nearest() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        let n = l.nearest(Point::new(3.0, 4.0), 0.0);
        assert!((n.t - 0.3).abs() < 1e-12);
        assert!((n.distance_sq - 16.0).abs() < 1e-12);

        let n = l.nearest(Point::new(-3.0, 4.0), 0.0);
        assert_eq!(n.t, 0.0);
        assert!((n.distance_sq - 25.0).abs() < 1e-12);

        let n = l.nearest(Point::new(13.0, -4.0), 0.0);
        assert_eq!(n.t, 1.0);
        assert!((n.distance_sq - 25.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_line_nearest() {
        let p = Point::new(5.0, 5.0);
        let l = Line::new(p, p);
        let n = l.nearest(Point::new(8.0, 9.0), 0.0);
        assert_eq!(n.t, 0.0);
        assert!((n.distance_sq - 25.0).abs() < 1e-12);
    }
}
