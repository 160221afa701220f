use geometry::Pixel;

/// An axis-aligned ellipse inscribed in a pixel bounding box.
///
/// The center and semi-axes are measured between pixel centers: a box that
/// is `n` pixels wide has a semi-axis of `(n - 1) / 2`, so the outermost
/// pixel centers of the box lie exactly on the ideal outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseModel {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// What a bounding box describes once degenerate spans are accounted for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// At least one span is zero or negative.
    Empty,
    /// A one pixel wide box: `len` pixels going down from `origin`.
    VerticalRun { origin: Pixel, len: i32 },
    /// A one pixel tall box: `len` pixels going right from `origin`.
    HorizontalRun { origin: Pixel, len: i32 },
    Ellipse(EllipseModel),
}

impl EllipseModel {
    /// Classifies a bounding box. Only boxes spanning at least two pixels on
    /// both axes produce an [`EllipseModel`]; all others have an exact pixel
    /// footprint that does not go through the angular sampler.
    #[must_use]
    pub fn from_bounds(x: i32, y: i32, x_span: i32, y_span: i32) -> Shape {
        if x_span <= 0 || y_span <= 0 {
            return Shape::Empty;
        }

        if x_span == 1 {
            return Shape::VerticalRun {
                origin: Pixel::new(x, y),
                len: y_span,
            };
        }

        if y_span == 1 {
            return Shape::HorizontalRun {
                origin: Pixel::new(x, y),
                len: x_span,
            };
        }

        let rx = f64::from(x_span - 1) / 2.0;
        let ry = f64::from(y_span - 1) / 2.0;

        Shape::Ellipse(Self {
            cx: f64::from(x) + rx,
            cy: f64::from(y) + ry,
            rx,
            ry,
        })
    }

    /// The larger of the two semi-axes. Always at least `0.5` for a model
    /// built by [`EllipseModel::from_bounds`].
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.rx.max(self.ry)
    }
}

impl Shape {
    /// Pixels of a degenerate run, in order. Empty for anything else.
    pub fn run_pixels(&self) -> impl Iterator<Item = Pixel> {
        let (origin, len, step) = match *self {
            Self::VerticalRun { origin, len } => (origin, len, (0, 1)),
            Self::HorizontalRun { origin, len } => (origin, len, (1, 0)),
            Self::Empty | Self::Ellipse(_) => (Pixel::new(0, 0), 0, (0, 0)),
        };

        (0..len).map(move |i| Pixel::new(origin.x + i * step.0, origin.y + i * step.1))
    }
}
