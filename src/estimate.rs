// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampled deviation between a cubic and its approximation.

use crate::{BiarcParams, CubicBez, ParamCurve, ParamCurveNearest};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Estimate how far `c` strays from the curves in `fitted`.
///
/// Points are sampled at evenly spaced parameters of `c`, starting with
/// `params.estimate_samples` intervals and doubling each round, and each
/// sample is measured against whichever fitted curve is closest. The
/// largest distance seen over all rounds is returned once two consecutive
/// rounds agree to within `params.estimate_convergence`, or after
/// `params.estimate_rounds` rounds.
///
/// This is a heuristic: a narrow excursion between samples can be missed.
/// An empty `fitted` gives infinity.
pub fn estimate_error<C: ParamCurveNearest>(c: &CubicBez, fitted: &[C], params: &BiarcParams) -> f64 {
    let mut n = params.estimate_samples.max(1);
    let mut worst = 0.0_f64;
    for _ in 0..params.estimate_rounds {
        let previous = worst;
        for j in 0..=n {
            let p = c.eval(j as f64 / n as f64);
            let d_sq = fitted
                .iter()
                .map(|f| f.nearest(p, params.straight_tolerance).distance_sq)
                .fold(f64::INFINITY, f64::min);
            worst = worst.max(d_sq.sqrt());
        }
        if (worst - previous).abs() <= params.estimate_convergence {
            break;
        }
        n = n.saturating_mul(2);
    }
    worst
}
