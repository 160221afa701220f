use geometry::{Offset, Pixel, Px};

use crate::ellipse::EllipseModel;

/// Radius offsets, in pixels, of the three iso-radius ellipses probed at
/// every sampled angle.
pub const RADIUS_OFFSETS: [f64; 3] = [-0.5, 0.0, 0.5];

/// A pixel reached by sampling, together with the offset of its center from
/// the ellipse center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub pixel: Pixel,
    pub offset: Offset<f64, Px>,
}

/// Maps a sampled angle to the pixels under the ideal outline and the two
/// outlines half a pixel inside and outside of it.
#[derive(Clone, Copy, Debug)]
pub struct RadialPerturber {
    model: EllipseModel,
}

impl RadialPerturber {
    #[must_use]
    pub fn new(model: EllipseModel) -> Self {
        Self { model }
    }

    pub fn candidates(&self, angle: f64) -> impl Iterator<Item = Candidate> + '_ {
        let (sin, cos) = angle.sin_cos();

        RADIUS_OFFSETS.into_iter().map(move |k| {
            let dx = (self.model.rx + k) * cos;
            let dy = (self.model.ry + k) * sin;
            self.snap(dx, dy)
        })
    }

    /// Rounds a point given relative to the ellipse center to the pixel that
    /// contains it. Ties round up, so the result does not depend on where the
    /// ellipse sits relative to the origin.
    #[allow(clippy::cast_possible_truncation)]
    fn snap(&self, dx: f64, dy: f64) -> Candidate {
        let x = (self.model.cx + dx + 0.5).floor();
        let y = (self.model.cy + dy + 0.5).floor();

        Candidate {
            pixel: Pixel::new(x as i32, y as i32),
            offset: Offset::new(x - self.model.cx, y - self.model.cy),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::ellipse::Shape;

    fn model(x: i32, y: i32, x_span: i32, y_span: i32) -> EllipseModel {
        match EllipseModel::from_bounds(x, y, x_span, y_span) {
            Shape::Ellipse(model) => model,
            other => panic!("expected an ellipse, got {other:?}"),
        }
    }

    #[test]
    fn three_radii_along_the_x_axis() {
        let perturber = RadialPerturber::new(model(0, 0, 9, 9));
        let pixels: Vec<_> = perturber.candidates(0.0).map(|c| c.pixel).collect();

        // center (4, 4), radius 4: 7.5 and 8.5 round up
        assert_eq!(
            pixels,
            [Pixel::new(8, 4), Pixel::new(8, 4), Pixel::new(9, 4)]
        );
    }

    #[test]
    fn offsets_are_from_the_rounded_pixel() {
        let perturber = RadialPerturber::new(model(0, 0, 11, 6));

        for candidate in perturber.candidates(FRAC_PI_2) {
            assert_eq!(candidate.offset.x, candidate.pixel.x as f64 - 5.0);
            assert_eq!(candidate.offset.y, candidate.pixel.y as f64 - 2.5);
        }
    }
}
