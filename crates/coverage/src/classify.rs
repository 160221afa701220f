//! Boundary classification of individual pixels.
//!
//! A pixel is on the outline when a 3x3 grid of points spread over its area
//! (center, edge midpoints and corners) has some points strictly inside the
//! ellipse and some not.
//!
//! Membership is tested in polar form: a point is inside when its distance
//! from the center is shorter than the distance from the center to the
//! outline along the same direction. Unlike `x²/rx² + y²/ry² < 1`, this does
//! not divide by the semi-axes and stays finite for very flat ellipses.
//!
//! Points exactly on the outline can fall either way depending on rounding.
//! That only matters for a single sample; a neighboring angle or radius
//! reaches the same pixel through a different grid point.

use geometry::{Offset, Px};

const SUB_SAMPLE_OFFSETS: [f64; 3] = [-0.5, 0.0, 0.5];

/// Number of sub-samples taken per pixel.
pub const SUB_SAMPLE_COUNT: u32 = 9;

/// How much of a pixel lies inside the ellipse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
    Outside,
    Boundary { inside: u32 },
    Inside,
}

impl Coverage {
    #[must_use]
    pub fn from_inside_count(inside: u32) -> Self {
        match inside {
            0 => Self::Outside,
            SUB_SAMPLE_COUNT => Self::Inside,
            inside => Self::Boundary { inside },
        }
    }

    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary { .. })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PixelClassifier {
    rx: f64,
    ry: f64,
}

impl PixelClassifier {
    #[must_use]
    pub fn new(rx: f64, ry: f64) -> Self {
        debug_assert!(rx >= 0.0 && ry >= 0.0);
        Self { rx, ry }
    }

    /// Distance from the center to the outline in the direction of `offset`.
    #[must_use]
    pub fn local_radius(&self, offset: Offset<f64, Px>) -> f64 {
        // eccentric anomaly of the direction, not the polar angle itself
        let angle = (offset.y * self.rx).atan2(offset.x * self.ry);
        let ox = self.rx * angle.cos();
        let oy = self.ry * angle.sin();
        ox.hypot(oy)
    }

    /// Returns true if `offset`, relative to the ellipse center, lies strictly
    /// inside the ellipse.
    #[must_use]
    pub fn is_inside(&self, offset: Offset<f64, Px>) -> bool {
        offset.length() < self.local_radius(offset)
    }

    /// Classifies the pixel whose center is at `center`, relative to the
    /// ellipse center.
    #[must_use]
    pub fn classify(&self, center: Offset<f64, Px>) -> Coverage {
        let mut inside = 0;

        for v in SUB_SAMPLE_OFFSETS {
            for u in SUB_SAMPLE_OFFSETS {
                if self.is_inside(center + Offset::new(u, v)) {
                    inside += 1;
                }
            }
        }

        Coverage::from_inside_count(inside)
    }

    #[must_use]
    pub fn is_boundary(&self, center: Offset<f64, Px>) -> bool {
        self.classify(center).is_boundary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(x: f64, y: f64) -> Offset<f64, Px> {
        Offset::new(x, y)
    }

    #[test]
    fn circle_membership() {
        let circle = PixelClassifier::new(3.0, 3.0);

        assert!(circle.is_inside(offset(0.0, 0.0)));
        assert!(circle.is_inside(offset(2.0, 2.0)));
        assert!(circle.is_inside(offset(-2.9, 0.0)));
        assert!(!circle.is_inside(offset(0.0, 3.1)));
        assert!(!circle.is_inside(offset(2.2, -2.2)));
        assert!((circle.local_radius(offset(1.0, 1.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn ellipse_membership_matches_implicit_form() {
        let ellipse = PixelClassifier::new(5.0, 2.0);

        for y in -30..=30 {
            for x in -30..=30 {
                let (dx, dy) = (f64::from(x) * 0.2, f64::from(y) * 0.2);
                let implicit = (dx / 5.0).powi(2) + (dy / 2.0).powi(2);

                // skip points too close to the outline to agree reliably
                if (implicit - 1.0).abs() < 1e-6 {
                    continue;
                }

                assert_eq!(
                    ellipse.is_inside(offset(dx, dy)),
                    implicit < 1.0,
                    "disagreement at ({dx}, {dy})"
                );
            }
        }
    }

    #[test]
    fn flat_ellipse_stays_finite() {
        let flat = PixelClassifier::new(6.0, 0.5);

        assert!(flat.local_radius(offset(0.0, 4.0)).is_finite());
        assert!(flat.is_inside(offset(5.0, 0.0)));
        assert!(!flat.is_inside(offset(0.0, 0.5)));
        assert!(!flat.is_inside(offset(0.0, 1.0)));
    }

    #[test]
    fn pixel_coverage() {
        let classifier = PixelClassifier::new(5.0, 2.5);

        assert_eq!(classifier.classify(offset(0.0, 0.5)), Coverage::Inside);
        assert_eq!(classifier.classify(offset(-6.0, 0.5)), Coverage::Outside);
        assert!(classifier.is_boundary(offset(-5.0, 0.5)));
        assert!(classifier.is_boundary(offset(5.0, -0.5)));
        assert!(!classifier.is_boundary(offset(0.0, -3.5)));
    }

    #[test]
    fn coverage_from_count() {
        assert_eq!(Coverage::from_inside_count(0), Coverage::Outside);
        assert_eq!(Coverage::from_inside_count(9), Coverage::Inside);
        assert_eq!(
            Coverage::from_inside_count(4),
            Coverage::Boundary { inside: 4 }
        );
    }
}
