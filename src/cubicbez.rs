// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Range;

use crate::{BiarcParams, ParamCurve, Point, Primitives, Vec2};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// The intermediate points of one de Casteljau pass at parameter `t`.
///
/// Evaluation and subdivision both read from this, so the point that
/// [`CubicBez::eval`] reports is the very same value that
/// [`CubicBez::split`] uses as the shared endpoint of the two halves.
struct DeCasteljau {
    p01: Point,
    p23: Point,
    p012: Point,
    p123: Point,
    p0123: Point,
}

impl DeCasteljau {
    #[inline]
    fn new(c: &CubicBez, t: f64) -> Self {
        let p01 = c.p0.lerp(c.p1, t);
        let p12 = c.p1.lerp(c.p2, t);
        let p23 = c.p2.lerp(c.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);
        DeCasteljau {
            p01,
            p23,
            p012,
            p123,
            p0123,
        }
    }
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Evaluate the curve with the Bernstein polynomial form.
    ///
    /// This agrees with [`eval`](ParamCurve::eval), which uses repeated
    /// linear interpolation, to within floating point roundoff.
    #[inline]
    pub fn eval_bernstein(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// Split the curve at parameter `t` into two curves covering the same shape.
    ///
    /// The end point of the first half and the start point of the second are
    /// both exactly `self.eval(t)`.
    #[inline]
    pub fn split(&self, t: f64) -> (CubicBez, CubicBez) {
        let d = DeCasteljau::new(self, t);
        (
            CubicBez::new(self.p0, d.p01, d.p012, d.p0123),
            CubicBez::new(d.p0123, d.p123, d.p23, self.p3),
        )
    }

    /// The tangent at the start point, `p1 - p0`.
    #[inline]
    pub fn start_tangent(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The tangent at the end point, `p3 - p2`, pointing along the direction of travel.
    #[inline]
    pub fn end_tangent(&self) -> Vec2 {
        self.p3 - self.p2
    }

    /// Approximate this segment with lines and circular arcs.
    ///
    /// This is a convenience for [`fit_biarcs`](crate::fit_biarcs) that
    /// discards the depth-limit report.
    #[inline]
    pub fn to_biarcs(&self, params: &BiarcParams) -> Primitives {
        crate::fit_biarcs(self, params).primitives
    }

    /// Is this cubic Bezier curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bezier curve [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl From<[Point; 4]> for CubicBez {
    #[inline]
    fn from([p0, p1, p2, p3]: [Point; 4]) -> Self {
        CubicBez { p0, p1, p2, p3 }
    }
}

impl ParamCurve for CubicBez {
    /// Evaluate by de Casteljau's construction.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        DeCasteljau::new(self, t).p0123
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p3
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        if t0 == 0.0 {
            return self.split(t1).0;
        }
        let right = self.split(t0).1;
        if t1 == 1.0 {
            return right;
        }
        right.split((t1 - t0) / (1.0 - t0)).0
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        self.split(0.5)
    }
}
