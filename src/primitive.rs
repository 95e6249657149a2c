// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output primitives of biarc approximation.

use core::ops::Range;

use crate::{Arc, Line, Nearest, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point};

/// A line or a circular arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathPrimitive {
    /// A line segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl PathPrimitive {
    /// Returns the arc, if this primitive is one.
    #[inline]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            PathPrimitive::Arc(arc) => Some(arc),
            PathPrimitive::Line(_) => None,
        }
    }

    /// Returns the line, if this primitive is one.
    #[inline]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            PathPrimitive::Line(line) => Some(line),
            PathPrimitive::Arc(_) => None,
        }
    }

    /// Is this primitive [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            PathPrimitive::Line(line) => line.is_finite(),
            PathPrimitive::Arc(arc) => arc.is_finite(),
        }
    }
}

impl From<Line> for PathPrimitive {
    #[inline(always)]
    fn from(line: Line) -> PathPrimitive {
        PathPrimitive::Line(line)
    }
}

impl From<Arc> for PathPrimitive {
    #[inline(always)]
    fn from(arc: Arc) -> PathPrimitive {
        PathPrimitive::Arc(arc)
    }
}

impl ParamCurve for PathPrimitive {
    fn eval(&self, t: f64) -> Point {
        match self {
            PathPrimitive::Line(line) => line.eval(t),
            PathPrimitive::Arc(arc) => arc.eval(t),
        }
    }

    fn subsegment(&self, range: Range<f64>) -> PathPrimitive {
        match self {
            PathPrimitive::Line(line) => PathPrimitive::Line(line.subsegment(range)),
            PathPrimitive::Arc(arc) => PathPrimitive::Arc(arc.subsegment(range)),
        }
    }

    fn start(&self) -> Point {
        match self {
            PathPrimitive::Line(line) => line.p0,
            PathPrimitive::Arc(arc) => arc.p0,
        }
    }

    fn end(&self) -> Point {
        match self {
            PathPrimitive::Line(line) => line.p1,
            PathPrimitive::Arc(arc) => arc.p1,
        }
    }
}

impl ParamCurveArclen for PathPrimitive {
    fn arclen(&self, accuracy: f64) -> f64 {
        match self {
            PathPrimitive::Line(line) => line.arclen(accuracy),
            PathPrimitive::Arc(arc) => arc.arclen(accuracy),
        }
    }
}

impl ParamCurveNearest for PathPrimitive {
    fn nearest(&self, p: Point, accuracy: f64) -> Nearest {
        match self {
            PathPrimitive::Line(line) => line.nearest(p, accuracy),
            PathPrimitive::Arc(arc) => arc.nearest(p, accuracy),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use crate::{Arc, Line, ParamCurve, ParamCurveArclen, ParamCurveNearest, PathPrimitive, Point};

    #[test]
    fn dispatch() {
        let line: PathPrimitive = Line::new((0.0, 0.0), (30.0, 40.0)).into();
        let arc: PathPrimitive = Arc::new((0.0, 0.0), (50.0, 50.0), (50.0, 0.0), -FRAC_PI_2).into();

        assert_eq!(line.start(), Point::new(0.0, 0.0));
        assert_eq!(line.end(), Point::new(30.0, 40.0));
        assert_eq!(arc.end(), Point::new(50.0, 50.0));
        assert!((line.arclen(0.0) - 50.0).abs() < 1e-12);
        assert!((arc.arclen(0.0) - 25.0 * PI).abs() < 1e-12);

        assert!(line.as_line().is_some() && line.as_arc().is_none());
        assert!(arc.as_arc().is_some() && arc.as_line().is_none());
        assert!(line.is_finite() && arc.is_finite());

        let n = arc.nearest(Point::new(50.0, 75.0), 0.01);
        assert!((n.distance_sq - 625.0).abs() < 1e-9);
        let n = line.nearest(Point::new(30.0, 40.0), 0.0);
        assert_eq!(n.distance_sq, 0.0);
    }

    #[test]
    fn subsegment_keeps_kind() {
        let line: PathPrimitive = Line::new((0.0, 0.0), (10.0, 0.0)).into();
        let arc: PathPrimitive = Arc::new((0.0, 0.0), (50.0, 50.0), (50.0, 0.0), -FRAC_PI_2).into();
        assert!(matches!(line.subsegment(0.25..0.5), PathPrimitive::Line(_)));
        let half = arc.subsegment(0.0..0.5);
        let PathPrimitive::Arc(half) = half else {
            panic!("arc subsegment should be an arc");
        };
        assert!((half.sweep_angle + FRAC_PI_2 / 2.0).abs() < 1e-12);
    }
}
