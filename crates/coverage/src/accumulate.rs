use std::collections::HashSet;

use geometry::{Clip, Pixel};

/// Collects pixels into a set, dropping those outside the clip.
#[derive(Debug)]
pub struct CoverageAccumulator {
    clip: Clip,
    pixels: HashSet<Pixel>,
    trace: bool,
}

impl CoverageAccumulator {
    #[must_use]
    pub fn new(clip: Clip, trace: bool) -> Self {
        Self {
            clip,
            pixels: HashSet::new(),
            trace,
        }
    }

    /// Adds a pixel to the set. Returns true if the pixel passed the clip and
    /// was not already present.
    pub fn insert(&mut self, pixel: Pixel) -> bool {
        if !self.clip.contains(pixel) {
            return false;
        }

        let added = self.pixels.insert(pixel);

        if added && self.trace {
            log::trace!("boundary pixel ({}, {})", pixel.x, pixel.y);
        }

        added
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> HashSet<Pixel> {
        self.pixels
    }
}

impl Extend<Pixel> for CoverageAccumulator {
    fn extend<I: IntoIterator<Item = Pixel>>(&mut self, iter: I) {
        for pixel in iter {
            self.insert(pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_collapsed() {
        let mut acc = CoverageAccumulator::new(Clip::Unbounded, false);

        assert!(acc.insert(Pixel::new(1, 1)));
        assert!(!acc.insert(Pixel::new(1, 1)));
        assert!(acc.insert(Pixel::new(1, 2)));
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn clipped_pixels_are_dropped() {
        let mut acc = CoverageAccumulator::new(Clip::rect(0, 0, 2, 2), false);

        acc.extend([
            Pixel::new(0, 0),
            Pixel::new(1, 1),
            Pixel::new(2, 1),
            Pixel::new(-1, 0),
            Pixel::new(1, 2),
        ]);

        let pixels = acc.finish();
        assert_eq!(pixels.len(), 2);
        assert!(pixels.contains(&Pixel::new(0, 0)));
        assert!(pixels.contains(&Pixel::new(1, 1)));
    }

    #[test]
    fn starts_empty() {
        let acc = CoverageAccumulator::new(Clip::Unbounded, true);
        assert!(acc.is_empty());
        assert!(acc.finish().is_empty());
    }
}
