// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Biarc construction for a single cubic Bézier.
//!
//! A biarc is a pair of circular arcs meeting tangentially at a junction
//! point. Given the end points and end tangents of a cubic, there is a
//! one-parameter family of biarcs matching them; this module picks the
//! member whose two tangent lengths keep the same ratio as the cubic's
//! control arms, which reduces to one quadratic equation.
//!
//! Nothing here recurses or measures error; see [`fit_biarcs`] for the
//! driver that splits the cubic until the biarcs are accurate enough.
//!
//! [`fit_biarcs`]: crate::fit_biarcs

use core::f64::consts::PI;

use arrayvec::ArrayVec;

use crate::{Arc, CubicBez, FitError, PathPrimitive, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Tuning parameters for biarc approximation.
///
/// All distances are in the units of the input coordinates. The defaults
/// are tuned for inputs measured in units where a tenth is a small feature;
/// the zero-tests are absolute, not scaled by the curve, so curves at a very
/// different scale should be rescaled before fitting or given adjusted
/// thresholds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiarcParams {
    /// Maximum accepted deviation between the curve and its approximation.
    pub tolerance: f64,
    /// Number of times a curve may be halved before a fit is accepted as is.
    pub max_depth: usize,
    /// Angular slack, in radians, for the parallel-tangent tests and for
    /// deciding whether a point projects into an arc's span.
    pub straight_tolerance: f64,
    /// Length below which a tangent or a chord counts as zero.
    pub straight_distance_tolerance: f64,
    /// Arcs with a smaller radius than this are not constructed.
    pub min_arc_radius: f64,
    /// Arcs whose center has a coordinate beyond this magnitude are not constructed.
    pub max_center_coordinate: f64,
    /// Arcs with a chord shorter than this are emitted as lines.
    pub equal_tolerance: f64,
    /// Junction equation coefficients below this magnitude count as zero.
    pub quadratic_epsilon: f64,
    /// Number of sample intervals in the first round of error estimation.
    pub estimate_samples: usize,
    /// Maximum number of error estimation rounds; each round doubles the samples.
    pub estimate_rounds: usize,
    /// Error estimation stops once two rounds agree to within this distance.
    pub estimate_convergence: f64,
}

impl Default for BiarcParams {
    fn default() -> Self {
        BiarcParams {
            tolerance: 100.0,
            max_depth: 4,
            straight_tolerance: 0.01,
            straight_distance_tolerance: 0.01,
            min_arc_radius: 0.1,
            max_center_coordinate: 1.0e6,
            equal_tolerance: 0.01,
            quadratic_epsilon: 1e-10,
            estimate_samples: 10,
            estimate_rounds: 4,
            estimate_convergence: 0.01,
        }
    }
}

impl BiarcParams {
    /// Create parameters with the given tolerance and defaults otherwise.
    pub fn new(tolerance: f64) -> Self {
        BiarcParams {
            tolerance,
            ..Default::default()
        }
    }

    /// Builder method for setting the tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method for setting the maximum subdivision depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidParams`] naming the first offending field
    /// when the tolerance is not a positive finite number, a threshold is
    /// negative or NaN, or a sample count is zero or would overflow once
    /// doubled for every estimation round.
    pub fn validate(&self) -> Result<(), FitError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(FitError::InvalidParams("tolerance"));
        }
        let thresholds = [
            (self.straight_tolerance, "straight_tolerance"),
            (self.straight_distance_tolerance, "straight_distance_tolerance"),
            (self.min_arc_radius, "min_arc_radius"),
            (self.max_center_coordinate, "max_center_coordinate"),
            (self.equal_tolerance, "equal_tolerance"),
            (self.quadratic_epsilon, "quadratic_epsilon"),
            (self.estimate_convergence, "estimate_convergence"),
        ];
        for (value, name) in thresholds {
            if !(value >= 0.0) {
                return Err(FitError::InvalidParams(name));
            }
        }
        if self.estimate_samples == 0 {
            return Err(FitError::InvalidParams("estimate_samples"));
        }
        if self.estimate_rounds == 0 {
            return Err(FitError::InvalidParams("estimate_rounds"));
        }
        // The last round samples `estimate_samples * 2^(estimate_rounds - 1)` intervals.
        let mut samples = self.estimate_samples;
        for _ in 1..self.estimate_rounds {
            samples = samples
                .checked_mul(2)
                .ok_or(FitError::InvalidParams("estimate_samples"))?;
        }
        Ok(())
    }
}

/// Outcome of solving for the biarc junction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Junction {
    /// Tangent lengths at the start (`alpha`) and end (`beta`).
    Solved {
        /// Distance from the start point to the first arc's tangent corner.
        alpha: f64,
        /// Distance from the end point to the second arc's tangent corner.
        beta: f64,
    },
    /// No biarc with positive tangent lengths exists for this input.
    Unsolvable,
}

/// Solve for the tangent lengths of a biarc.
///
/// `chord` is the vector from the end point back to the start point,
/// `start` and `end` are the unit tangents in the direction of travel, and
/// `ratio` is the desired `alpha / beta`. The two tangent corners are then
/// `start_point + alpha * start` and `end_point - beta * end`, and the
/// junction is the point on the segment between them at distance `alpha`
/// from the first.
///
/// Requiring the corners to be `alpha + beta` apart gives
/// `a β² + b β + c = 0`; coefficients smaller than `epsilon` count as zero.
pub fn solve_junction(chord: Vec2, start: Vec2, end: Vec2, ratio: f64, epsilon: f64) -> Junction {
    let c = chord.hypot2();
    let b = 2.0 * chord.dot(ratio * start + end);
    let a = 2.0 * ratio * (start.dot(end) - 1.0);

    let a_small = a.abs() < epsilon;
    let c_small = c.abs() < epsilon;
    let beta = if a_small && b != 0.0 {
        -c / b
    } else if c_small && a != 0.0 {
        -b / a
    } else if !a_small {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Junction::Unsolvable;
        }
        let sq = discriminant.sqrt();
        let beta0 = (-b - sq) / (2.0 * a);
        let beta1 = (-b + sq) / (2.0 * a);
        if beta0 * beta1 > 0.0 {
            return Junction::Unsolvable;
        }
        beta0.max(beta1)
    } else {
        // Every coefficient vanishes.
        return Junction::Unsolvable;
    };
    let alpha = beta * ratio;
    if !(beta > 0.0 && alpha > 0.0 && beta.is_finite() && alpha.is_finite()) {
        return Junction::Unsolvable;
    }
    Junction::Solved { alpha, beta }
}

/// Two arcs joined tangentially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Biarc {
    /// The arc from the curve's start point to the junction, then the arc
    /// from the junction to the curve's end point.
    pub arcs: [Arc; 2],
}

/// Result of attempting a direct biarc fit of one cubic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BiarcShape {
    /// The cubic is straight enough to be its chord.
    Line,
    /// The tangent-matched biarc.
    Biarc(Biarc),
    /// No biarc could be constructed; the cubic needs to be split.
    Unsolvable,
}

impl Biarc {
    /// Try to match a biarc to the end points and end tangents of `c`.
    ///
    /// The accuracy of the result is not checked.
    pub fn fit(c: &CubicBez, params: &BiarcParams) -> BiarcShape {
        let zero = params.straight_distance_tolerance;
        let straight = params.straight_tolerance;

        let chord = c.p0 - c.p3;
        let chord_len = chord.hypot();
        let start = c.start_tangent();
        let end = c.end_tangent();
        let start_len = start.hypot();
        let end_len = end.hypot();

        // At a cusp one tangent vanishes; aim it at the far control point instead.
        let (start, end, ratio) = match (start_len < zero, end_len < zero) {
            (true, true) => return BiarcShape::Line,
            (false, true) => (start, c.p3 - c.p1, 2.0 * start_len / chord_len),
            (true, false) => (c.p2 - c.p0, end, chord_len / (2.0 * end_len)),
            (false, false) => (start, end, start_len / end_len),
        };
        let start = start.unit();
        let end = end.unit();

        // Both control points coincide with the far end point.
        if start == Vec2::ZERO || end == Vec2::ZERO {
            return BiarcShape::Line;
        }
        let turn = (start.atan2() - end.atan2()).rem_euclid(PI);
        let parallel = turn < straight || PI - turn < straight;
        if parallel && (chord_len < zero || 1.0 - (start.dot(chord) / chord_len).abs() < straight) {
            return BiarcShape::Line;
        }
        if chord_len == 0.0 {
            log::debug!("closed cubic {c:?} has no biarc");
            return BiarcShape::Unsolvable;
        }

        let (alpha, beta) = match solve_junction(chord, start, end, ratio, params.quadratic_epsilon) {
            Junction::Solved { alpha, beta } => (alpha, beta),
            Junction::Unsolvable => {
                log::debug!("no junction for {c:?}");
                return BiarcShape::Unsolvable;
            }
        };
        let corner0 = c.p0 + alpha * start;
        let corner1 = c.p3 - beta * end;
        let sum = alpha + beta;
        let junction = (corner0.to_vec2() * (beta / sum) + corner1.to_vec2() * (alpha / sum)).to_point();

        match (
            Arc::from_tangent_corner(c.p0, corner0, junction, params),
            Arc::from_tangent_corner(junction, corner1, c.p3, params),
        ) {
            (Some(arc0), Some(arc1)) => BiarcShape::Biarc(Biarc { arcs: [arc0, arc1] }),
            _ => {
                log::debug!("no stable circle for {c:?} through junction {junction:?}");
                BiarcShape::Unsolvable
            }
        }
    }

    /// The point where the two arcs meet.
    #[inline]
    pub fn junction(&self) -> Point {
        self.arcs[0].p1
    }

    /// The primitives to emit for this biarc.
    ///
    /// Arcs that are too short to be reliably drawn as arcs (see
    /// [`Arc::is_degenerate`]) are replaced by their chords.
    pub fn primitives(&self, params: &BiarcParams) -> ArrayVec<PathPrimitive, 2> {
        self.arcs
            .iter()
            .map(|arc| {
                if arc.is_degenerate(params.equal_tolerance) {
                    PathPrimitive::Line(arc.chord())
                } else {
                    PathPrimitive::Arc(*arc)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::ParamCurve;

    fn arch() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
    }

    #[test]
    fn junction_symmetric() {
        let j = solve_junction(
            Vec2::new(-100.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, -1.0),
            1.0,
            1e-10,
        );
        match j {
            Junction::Solved { alpha, beta } => {
                assert!((alpha - 50.0).abs() < 1e-9);
                assert!((beta - 50.0).abs() < 1e-9);
            }
            Junction::Unsolvable => panic!("symmetric arch must have a junction"),
        }
    }

    #[test]
    fn junction_corners_are_sum_apart() {
        let p0 = Point::new(3.0, 4.0);
        let p3 = Point::new(120.0, -10.0);
        let start = Vec2::new(1.0, 2.0).unit();
        let end = Vec2::new(2.0, -1.5).unit();
        let ratio = 0.7;
        let Junction::Solved { alpha, beta } = solve_junction(p0 - p3, start, end, ratio, 1e-10) else {
            panic!("expected a junction");
        };
        assert!((alpha / beta - ratio).abs() < 1e-12);
        let c0 = p0 + alpha * start;
        let c1 = p3 - beta * end;
        assert!((c0.distance(c1) - (alpha + beta)).abs() < 1e-9);
    }

    #[test]
    fn junction_linear_case() {
        // Parallel, same-direction tangents make the quadratic term vanish.
        let j = solve_junction(
            Vec2::new(-100.0, -20.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            1.0,
            1e-10,
        );
        let Junction::Solved { alpha, beta } = j else {
            panic!("expected a junction");
        };
        // b = 2 * (-100 * 2) = -400, c = 10400.
        assert!((beta - 26.0).abs() < 1e-12);
        assert_eq!(alpha, beta);
    }

    #[test]
    fn junction_unsolvable_cases() {
        // All coefficients zero.
        let j = solve_junction(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0), 1.0, 1e-10);
        assert_eq!(j, Junction::Unsolvable);
        // Linear with a negative root.
        let j = solve_junction(
            Vec2::new(100.0, 20.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            1.0,
            1e-10,
        );
        assert_eq!(j, Junction::Unsolvable);
        // NaN input never yields a junction.
        let j = solve_junction(
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, -1.0),
            1.0,
            1e-10,
        );
        assert_eq!(j, Junction::Unsolvable);
    }

    #[test]
    fn fit_arch() {
        let c = arch();
        let BiarcShape::Biarc(biarc) = Biarc::fit(&c, &BiarcParams::default()) else {
            panic!("arch should fit a biarc");
        };
        assert_eq!(biarc.arcs[0].p0, c.p0);
        assert_eq!(biarc.arcs[1].p1, c.p3);
        assert_eq!(biarc.arcs[1].p0, biarc.junction());
        assert!(biarc.junction().distance(Point::new(50.0, 50.0)) < 1e-9);
        for arc in biarc.arcs {
            assert!(arc.center.distance(Point::new(50.0, 0.0)) < 1e-9);
            assert!((arc.sweep_angle + FRAC_PI_2).abs() < 1e-9);
        }
    }

    #[test]
    fn fit_straight() {
        let params = BiarcParams::default();
        let c = CubicBez::new((0.0, 0.0), (33.0, 0.0), (66.0, 0.0), (100.0, 0.0));
        assert_eq!(Biarc::fit(&c, &params), BiarcShape::Line);
        // Control points out of order along the chord.
        let c = CubicBez::new((0.0, 0.0), (50.0, 50.0), (30.0, 30.0), (100.0, 100.0));
        assert_eq!(Biarc::fit(&c, &params), BiarcShape::Line);
        // Both control points on their end points.
        let c = CubicBez::new((0.0, 0.0), (0.0, 0.0), (100.0, 40.0), (100.0, 40.0));
        assert_eq!(Biarc::fit(&c, &params), BiarcShape::Line);
    }

    #[test]
    fn fit_cusp_tangent() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 100.0));
        let BiarcShape::Biarc(biarc) = Biarc::fit(&c, &BiarcParams::default()) else {
            panic!("one-sided cusp should still fit");
        };
        assert_eq!(biarc.arcs[0].p0, c.p0);
        assert_eq!(biarc.arcs[1].p1, c.p3);
        for arc in biarc.arcs {
            assert!((arc.p1.distance(arc.center) - arc.radius()).abs() < 1e-6);
        }
    }

    #[test]
    fn fit_closed_loop_unsolvable() {
        let c = CubicBez::new((0.0, 0.0), (100.0, 100.0), (-100.0, 100.0), (0.0, 0.0));
        assert_eq!(Biarc::fit(&c, &BiarcParams::default()), BiarcShape::Unsolvable);
    }

    #[test]
    fn arcs_meet_tangentially() {
        let c = CubicBez::new((0.0, 0.0), (20.0, 60.0), (90.0, 80.0), (120.0, 30.0));
        let BiarcShape::Biarc(biarc) = Biarc::fit(&c, &BiarcParams::default()) else {
            panic!("expected a biarc");
        };
        let j = biarc.junction();
        // Both radii at the junction lie on one line through it.
        let r0 = j - biarc.arcs[0].center;
        let r1 = j - biarc.arcs[1].center;
        assert!(r0.unit().cross(r1.unit()).abs() < 1e-9);
        // The arc leaves the start point along the start tangent.
        let a0 = biarc.arcs[0];
        let leaving = a0.eval(1e-6) - a0.p0;
        assert!(leaving.unit().cross(c.start_tangent().unit()).abs() < 1e-4);
        assert!(leaving.dot(c.start_tangent()) > 0.0);
    }

    #[test]
    fn degenerate_arc_becomes_line() {
        let params = BiarcParams::default();
        let long = Arc::new((0.0, 0.0), (50.0, 50.0), (50.0, 0.0), -FRAC_PI_2);
        let short = Arc::new((50.0, 50.0), (50.001, 50.0), (50.0005, 0.0), -2e-5);
        let biarc = Biarc { arcs: [long, short] };
        let prims = biarc.primitives(&params);
        assert_eq!(prims.len(), 2);
        assert_eq!(prims[0], PathPrimitive::Arc(long));
        assert_eq!(prims[1], PathPrimitive::Line(short.chord()));
    }

    #[test]
    fn params_validation() {
        assert!(BiarcParams::default().validate().is_ok());
        assert_eq!(
            BiarcParams::new(0.0).validate(),
            Err(FitError::InvalidParams("tolerance"))
        );
        assert_eq!(
            BiarcParams::new(f64::INFINITY).validate(),
            Err(FitError::InvalidParams("tolerance"))
        );
        let p = BiarcParams {
            min_arc_radius: f64::NAN,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(FitError::InvalidParams("min_arc_radius")));
        let mut p = BiarcParams::default().with_tolerance(1.0).with_max_depth(2);
        assert_eq!(p.tolerance, 1.0);
        assert_eq!(p.max_depth, 2);
        p.estimate_rounds = 0;
        assert_eq!(p.validate(), Err(FitError::InvalidParams("estimate_rounds")));
    }

    #[test]
    fn params_sample_count_overflow() {
        let p = BiarcParams {
            estimate_samples: usize::MAX / 4,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(FitError::InvalidParams("estimate_samples")));
        let p = BiarcParams {
            estimate_samples: usize::MAX / 8,
            estimate_rounds: 4,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
        let p = BiarcParams {
            estimate_rounds: 200,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(FitError::InvalidParams("estimate_samples")));
    }
}
