// Copyright 2019 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arc segments.

use core::f64::consts::PI;
use core::ops::Range;

use crate::common::{between, normalize_angle, TAU};
use crate::{BiarcParams, Line, Nearest, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circular arc segment.
///
/// The arc starts at `p0` and turns around `center` by `sweep_angle` radians,
/// ending at `p1`. Positive sweeps turn from the positive X axis towards the
/// positive Y axis. Both end points are stored, so chained primitives share
/// their joints exactly rather than through a rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's start point.
    pub p0: Point,
    /// The arc's end point.
    pub p1: Point,
    /// The center of the arc's circle.
    pub center: Point,
    /// The signed angle subtended by the arc, in radians.
    pub sweep_angle: f64,
}

impl Arc {
    /// Create a new arc.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>, center: impl Into<Point>, sweep_angle: f64) -> Arc {
        Arc {
            p0: p0.into(),
            p1: p1.into(),
            center: center.into(),
            sweep_angle,
        }
    }

    /// Create the arc from `p0` to `p1` that is tangent to the lines
    /// `p0 → corner` and `corner → p1`.
    ///
    /// The corner is expected to be equidistant from both end points. The
    /// center lies on the line through `corner` and the midpoint of the
    /// chord, on the far side of the chord, and the sweep turns through the
    /// side of the circle facing the corner.
    ///
    /// Returns `None` when no stable circle exists: the corner sits on the
    /// chord midpoint, the center is not finite or lies outside
    /// `params.max_center_coordinate`, or the radius is below
    /// `params.min_arc_radius`.
    pub fn from_tangent_corner(p0: Point, corner: Point, p1: Point, params: &BiarcParams) -> Option<Arc> {
        let mid = p0.midpoint(p1);
        let to_mid = mid - corner;
        let apex = to_mid.hypot();
        if !(apex > 0.0) {
            return None;
        }
        // The half-chord is the geometric mean of the two pieces of the
        // center-to-corner line that the chord cuts.
        let center = mid + to_mid.unit() * ((mid - p0).hypot2() / apex);
        let max = params.max_center_coordinate;
        if !center.is_finite() || center.x.abs() > max || center.y.abs() > max {
            return None;
        }
        if center.distance(p0) < params.min_arc_radius {
            return None;
        }

        let a0 = normalize_angle((p0 - center).atan2());
        let a_corner = normalize_angle((corner - center).atan2());
        let a1 = normalize_angle((p1 - center).atan2());
        let mut sweep_angle = normalize_angle(a1 - a0);
        if normalize_angle(a_corner - a0) > sweep_angle {
            sweep_angle -= TAU;
        }
        Some(Arc {
            p0,
            p1,
            center,
            sweep_angle,
        })
    }

    /// The radius, measured from the start point.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.p0.distance(self.center)
    }

    /// The chord between the end points.
    #[inline]
    pub fn chord(&self) -> Line {
        Line::new(self.p0, self.p1)
    }

    /// Is this arc too short to be drawn as an arc?
    ///
    /// An arc whose chord is shorter than `equal_tolerance`, or shorter than
    /// `equal_tolerance * radius / 10`, is liable to be taken for a full
    /// circle by consumers that reconstruct arcs from their end points.
    pub fn is_degenerate(&self, equal_tolerance: f64) -> bool {
        let chord_sq = self.p0.distance_squared(self.p1);
        let tol_sq = equal_tolerance * equal_tolerance;
        chord_sq < tol_sq || chord_sq < tol_sq * self.p0.distance_squared(self.center) / 100.0
    }

    /// The sweep angle in tenths of a degree.
    #[inline]
    pub fn sweep_decidegrees(&self) -> f64 {
        self.sweep_angle * (1800.0 / PI)
    }

    /// Returns a copy of this arc traversed in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Arc {
        Arc {
            p0: self.p1,
            p1: self.p0,
            center: self.center,
            sweep_angle: -self.sweep_angle,
        }
    }

    /// Is this arc [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.center.is_finite() && self.sweep_angle.is_finite()
    }
}

impl ParamCurve for Arc {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        if t == 0.0 {
            self.p0
        } else if t == 1.0 {
            self.p1
        } else {
            self.p0.rotate_about(self.center, t * self.sweep_angle)
        }
    }

    fn subsegment(&self, range: Range<f64>) -> Arc {
        Arc {
            p0: self.eval(range.start),
            p1: self.eval(range.end),
            center: self.center,
            sweep_angle: self.sweep_angle * (range.end - range.start),
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

impl ParamCurveArclen for Arc {
    #[inline]
    fn arclen(&self, _accuracy: f64) -> f64 {
        self.radius() * self.sweep_angle.abs()
    }
}

impl ParamCurveNearest for Arc {
    /// Distance from `p` to the arc.
    ///
    /// `p` is projected radially onto the arc's circle. If the projection
    /// falls within the arc's angular span, widened by `accuracy` radians at
    /// both ends, that projection is the nearest position; otherwise the
    /// nearer end point is.
    fn nearest(&self, p: Point, accuracy: f64) -> Nearest {
        let r = self.radius();
        let v = p - self.center;
        if !(r > 0.0) {
            return Nearest {
                distance_sq: p.distance_squared(self.p0),
                t: 0.0,
            };
        }
        if v.hypot2() == 0.0 {
            // Every point of the circle is equally far from its center.
            return Nearest {
                distance_sq: r * r,
                t: 0.0,
            };
        }
        let projected = self.center + v.unit() * r;
        let mut th = (projected - self.center).atan2() - (self.p0 - self.center).atan2();
        // Measure the angle in the same turning direction as the sweep.
        if th * self.sweep_angle < 0.0 {
            th += if th > 0.0 { -TAU } else { TAU };
        }
        if between(th, 0.0, self.sweep_angle, accuracy) {
            #[allow(clippy::manual_clamp)]
            let t = (th / self.sweep_angle).max(0.0).min(1.0);
            Nearest {
                distance_sq: p.distance_squared(projected),
                t,
            }
        } else {
            let d0 = p.distance_squared(self.p0);
            let d1 = p.distance_squared(self.p1);
            if d0 <= d1 {
                Nearest {
                    distance_sq: d0,
                    t: 0.0,
                }
            } else {
                Nearest {
                    distance_sq: d1,
                    t: 1.0,
                }
            }
        }
    }
}
