// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximation of cubic Béziers with lines and circular arcs.
//!
//! Many consumers of vector geometry, such as CNC controllers, plotters and
//! PCB layout tools, understand only straight lines and circular arcs. This
//! crate converts cubic Bézier segments into chains of those primitives
//! using biarcs: pairs of arcs that meet tangentially and match the curve's
//! end points and end tangents. Curves that a single biarc cannot follow
//! closely enough are halved and refitted, down to a bounded depth.
//!
//! # Examples
//!
//! Fitting a single curve:
//! ```
//! use biarc::{fit_biarcs, BiarcParams, CubicBez, ParamCurve, PathPrimitive, Point};
//!
//! let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
//! let fit = fit_biarcs(&c, &BiarcParams::default());
//! assert_eq!(fit.primitives.len(), 2);
//! assert!(fit.primitives.iter().all(|p| matches!(p, PathPrimitive::Arc(_))));
//! assert_eq!(fit.primitives[0].start(), Point::new(0.0, 0.0));
//! assert_eq!(fit.primitives[1].end(), Point::new(100.0, 0.0));
//! ```
//!
//! Converting a whole path, with a tighter tolerance:
//! ```
//! use biarc::{approximate_path, BiarcParams, CubicBez, Line, PathPrimitive, PathSeg};
//!
//! let path = [
//!     PathSeg::Line(Line::new((0.0, 0.0), (0.0, 10.0))),
//!     PathSeg::Cubic(CubicBez::new((0.0, 10.0), (0.0, 20.0), (10.0, 20.0), (10.0, 10.0))),
//! ];
//! let mut out: Vec<PathPrimitive> = Vec::new();
//! let stats = approximate_path(path, &BiarcParams::new(0.5), &mut out);
//! assert_eq!(stats.segments, 2);
//! assert_eq!(stats.primitives(), out.len());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! The `rayon` feature fits the two halves of each split in parallel. The
//! `serde` feature derives serialization for the geometry and parameter types.
//!
//! Diagnostics are reported through the [`log`] facade.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("biarc requires either the `std` or `libm` feature");

extern crate alloc;

mod arc;
mod biarc;
pub mod common;
mod cubicbez;
mod estimate;
mod fit;
mod line;
mod param_curve;
mod path;
mod point;
mod primitive;
mod vec2;

pub use crate::arc::*;
pub use crate::biarc::*;
pub use crate::cubicbez::*;
pub use crate::estimate::*;
pub use crate::fit::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::primitive::*;
pub use crate::vec2::*;
