use std::{collections::HashSet, fmt};

use geometry::Pixel;

/// How many offending pixels of each kind the `Display` output lists.
const MAX_LISTED: usize = 8;

/// The difference between an expected pixel footprint and a rendered one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageDiff {
    /// Expected but not rendered.
    pub missing: HashSet<Pixel>,
    /// Rendered but not expected.
    pub unexpected: HashSet<Pixel>,
}

impl CoverageDiff {
    #[must_use]
    pub fn between(expected: &HashSet<Pixel>, actual: &HashSet<Pixel>) -> Self {
        Self {
            missing: expected.difference(actual).copied().collect(),
            unexpected: actual.difference(expected).copied().collect(),
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Pixels in row-major order, so reports are stable across runs.
fn sorted(pixels: &HashSet<Pixel>) -> Vec<Pixel> {
    let mut sorted: Vec<_> = pixels.iter().copied().collect();
    sorted.sort_unstable_by_key(|p| (p.y, p.x));
    sorted
}

fn write_list(f: &mut fmt::Formatter<'_>, label: &str, pixels: &HashSet<Pixel>) -> fmt::Result {
    write!(f, "{} {label}", pixels.len())?;

    if pixels.is_empty() {
        return Ok(());
    }

    write!(f, ":")?;
    for p in sorted(pixels).iter().take(MAX_LISTED) {
        write!(f, " ({}, {})", p.x, p.y)?;
    }

    if pixels.len() > MAX_LISTED {
        write!(f, " ...")?;
    }

    Ok(())
}

impl fmt::Display for CoverageDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "footprints match");
        }

        write_list(f, "missing", &self.missing)?;
        write!(f, "; ")?;
        write_list(f, "unexpected", &self.unexpected)
    }
}
