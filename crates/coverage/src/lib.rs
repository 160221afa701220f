//! Reference pixel coverage for oval outlines.
//!
//! Computes, independently of any rasterizer, the set of pixels that the
//! ideal outline of an axis-aligned ellipse passes through. Rasterizer tests
//! compare the footprint of a drawn oval against this set (see
//! [`CoverageDiff`]).
//!
//! The computation walks the outline at a fixed angular step small enough
//! that no pixel is skipped, probes the outline and the two outlines half a
//! pixel inside and outside of it, and keeps every pixel reached whose area
//! is partially but not entirely inside the ellipse.
//!
//! ## Goals
//!
//! - [x] No gaps: every pixel the outline crosses is reported
//! - [x] Exact handling of one pixel wide or tall boxes
//! - [x] Independent of sampling order
//!
//! ## Non-goals
//!
//! - [ ] Speed (the oracle oversamples on purpose)
//! - [ ] Partial arcs, anti-aliasing or fills

use std::collections::HashSet;

use geometry::{Clip, Pixel};

pub mod accumulate;
pub mod classify;
pub mod diff;
pub mod ellipse;
pub mod perturb;
pub mod sampler;

pub use accumulate::CoverageAccumulator;
pub use classify::{Coverage, PixelClassifier};
pub use diff::CoverageDiff;
pub use ellipse::{EllipseModel, Shape};
pub use perturb::RadialPerturber;
pub use sampler::AngularSampler;

#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Whether to log the intermediate steps of the computation.
    ///
    /// When set, the ellipse model and step count are logged at `debug`
    /// level and every accepted pixel at `trace` level, through the `log`
    /// facade. Defaults to `false`.
    pub trace: bool,
}

/// Computes the pixels on the outline of the ellipse inscribed in the box
/// `(x, y, x_span, y_span)`, keeping only those inside `clip`.
///
/// Boxes with a non-positive span produce no pixels. Boxes one pixel wide or
/// tall produce the full column or row they cover.
#[must_use]
pub fn compute_oval_boundary_pixels(
    clip: Clip,
    x: i32,
    y: i32,
    x_span: i32,
    y_span: i32,
) -> HashSet<Pixel> {
    compute_oval_boundary_pixels_with(&Config::default(), clip, x, y, x_span, y_span)
}

/// Like [`compute_oval_boundary_pixels`], with explicit configuration.
#[must_use]
pub fn compute_oval_boundary_pixels_with(
    config: &Config,
    clip: Clip,
    x: i32,
    y: i32,
    x_span: i32,
    y_span: i32,
) -> HashSet<Pixel> {
    let mut accumulator = CoverageAccumulator::new(clip, config.trace);

    let model = match EllipseModel::from_bounds(x, y, x_span, y_span) {
        Shape::Ellipse(model) => model,
        shape => {
            if config.trace {
                log::debug!("degenerate oval ({x}, {y}, {x_span}, {y_span}): {shape:?}");
            }

            accumulator.extend(shape.run_pixels());
            return accumulator.finish();
        }
    };

    let sampler = AngularSampler::new(model.max_radius());
    let perturber = RadialPerturber::new(model);
    let classifier = PixelClassifier::new(model.rx, model.ry);

    if config.trace {
        log::debug!(
            "oval ({x}, {y}, {x_span}, {y_span}): {model:?}, {} steps of {} rad",
            sampler.step_count(),
            sampler.step()
        );
    }

    for angle in sampler.angles() {
        for candidate in perturber.candidates(angle) {
            if classifier.is_boundary(candidate.offset) {
                accumulator.insert(candidate.pixel);
            }
        }
    }

    if config.trace {
        log::debug!("oval ({x}, {y}, {x_span}, {y_span}): {} pixels", accumulator.len());
    }

    accumulator.finish()
}
