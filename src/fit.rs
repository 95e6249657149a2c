// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive biarc approximation of cubic Béziers.
//!
//! A cubic is first matched with a single [`Biarc`]. If the sampled
//! deviation exceeds the tolerance, or no biarc exists, the cubic is halved
//! and each half is fitted in turn, down to [`BiarcParams::max_depth`]
//! halvings. The primitives of the halves are concatenated in order, so
//! the output is a connected chain from the cubic's start point to its end
//! point.
//!
//! With the `rayon` feature the two halves of a split are fitted in
//! parallel; the output is the same either way.

use core::fmt;

use smallvec::SmallVec;

use crate::{estimate_error, Biarc, BiarcParams, BiarcShape, CubicBez, Line, ParamCurve, PathPrimitive};

/// The primitives produced for a cubic.
///
/// Most well-behaved curves need no more than a single biarc.
pub type Primitives = SmallVec<[PathPrimitive; 2]>;

/// The result of approximating one cubic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiarcFit {
    /// The approximating lines and arcs, in order along the curve.
    pub primitives: Primitives,
    /// Whether some part of the curve reached the depth limit with its
    /// deviation above tolerance, or without any biarc, and was emitted anyway.
    pub depth_limited: bool,
}

impl BiarcFit {
    fn line(c: &CubicBez, depth_limited: bool) -> BiarcFit {
        let mut primitives = Primitives::new();
        primitives.push(PathPrimitive::Line(Line::new(c.p0, c.p3)));
        BiarcFit {
            primitives,
            depth_limited,
        }
    }

    fn append(&mut self, other: BiarcFit) {
        self.primitives.extend(other.primitives);
        self.depth_limited |= other.depth_limited;
    }
}

/// An error preventing a fit from being attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitError {
    /// A control point has a NaN or infinite coordinate.
    NonFinite,
    /// The named parameter is out of range.
    InvalidParams(&'static str),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::NonFinite => write!(f, "curve has a non-finite control point"),
            FitError::InvalidParams(name) => write!(f, "invalid biarc parameter `{name}`"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}

/// Approximate a cubic Bézier with lines and circular arcs.
///
/// The first primitive starts exactly at `c.p0`, the last ends exactly at
/// `c.p3`, and each primitive starts exactly where the previous one ends.
/// At most `2^(max_depth + 1)` primitives are produced.
///
/// Inputs are not validated; see [`try_fit_biarcs`] for a checked version.
/// Non-finite control points produce non-finite primitives but never panic.
pub fn fit_biarcs(c: &CubicBez, params: &BiarcParams) -> BiarcFit {
    fit_biarcs_at_depth(c, 0, params)
}

/// Approximate a cubic that is already `depth` halvings below the original curve.
///
/// The curve is split at most `params.max_depth - depth` more times.
pub fn fit_biarcs_at_depth(c: &CubicBez, depth: usize, params: &BiarcParams) -> BiarcFit {
    match Biarc::fit(c, params) {
        BiarcShape::Line => BiarcFit::line(c, false),
        BiarcShape::Biarc(biarc) => {
            let err = estimate_error(c, &biarc.arcs, params);
            if err <= params.tolerance {
                return BiarcFit {
                    primitives: biarc.primitives(params).into_iter().collect(),
                    depth_limited: false,
                };
            }
            if depth < params.max_depth {
                log::trace!("splitting at depth {depth}, error {err}");
                return split(c, depth, params);
            }
            log::debug!("accepting biarc with error {err} at depth limit {depth}");
            BiarcFit {
                primitives: biarc.primitives(params).into_iter().collect(),
                depth_limited: true,
            }
        }
        BiarcShape::Unsolvable => {
            if depth < params.max_depth {
                log::trace!("splitting unsolvable curve at depth {depth}");
                return split(c, depth, params);
            }
            log::debug!("no biarc at depth limit {depth}, emitting chord");
            BiarcFit::line(c, true)
        }
    }
}

fn split(c: &CubicBez, depth: usize, params: &BiarcParams) -> BiarcFit {
    let (left, right) = c.subdivide();
    #[cfg(feature = "rayon")]
    let (mut fit, rest) = rayon::join(
        || fit_biarcs_at_depth(&left, depth + 1, params),
        || fit_biarcs_at_depth(&right, depth + 1, params),
    );
    #[cfg(not(feature = "rayon"))]
    let (mut fit, rest) = (
        fit_biarcs_at_depth(&left, depth + 1, params),
        fit_biarcs_at_depth(&right, depth + 1, params),
    );
    fit.append(rest);
    fit
}

/// Approximate a cubic after checking the curve and parameters.
///
/// # Errors
///
/// Returns [`FitError::InvalidParams`] if [`BiarcParams::validate`] fails,
/// and [`FitError::NonFinite`] if a control point is not finite.
pub fn try_fit_biarcs(c: &CubicBez, params: &BiarcParams) -> Result<BiarcFit, FitError> {
    params.validate()?;
    if !c.is_finite() {
        return Err(FitError::NonFinite);
    }
    Ok(fit_biarcs(c, params))
}
