use std::ops::{Add, AddAssign, Div, Sub};

use euclid::num::One;
pub use euclid::{Point2D as Point, Size2D as Extent, Vector2D as Offset};

/// Unit tag for integer device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Px;

/// A single device pixel, addressed by its integer coordinates.
pub type Pixel = Point<i32, Px>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<T, U>(euclid::Box2D<T, U>);

impl<T, U> Rect<T, U> {
    pub fn new(origin: Point<T, U>, extent: Extent<T, U>) -> Self
    where
        T: Copy + Add<T, Output = T>,
    {
        Self(euclid::Box2D::from_origin_and_size(origin, extent))
    }

    pub fn top_left(&self) -> Point<T, U>
    where
        T: Copy,
    {
        self.0.min
    }

    pub fn bottom_right(&self) -> Point<T, U>
    where
        T: Copy,
    {
        self.0.max
    }

    pub fn top_right(&self) -> Point<T, U>
    where
        T: Copy,
    {
        Point::new(self.0.max.x, self.0.min.y)
    }

    pub fn bottom_left(&self) -> Point<T, U>
    where
        T: Copy,
    {
        Point::new(self.0.min.x, self.0.max.y)
    }

    pub fn extent(&self) -> Extent<T, U>
    where
        T: Copy + Sub<T, Output = T>,
    {
        self.0.size()
    }

    pub fn center(&self) -> Point<T, U>
    where
        T: Copy + One + Add<Output = T> + Div<Output = T>,
    {
        self.0.center()
    }

    /// Returns true if the point lies inside the rectangle. The top and left
    /// edges are inclusive, the bottom and right edges exclusive, so a pixel
    /// rect `(x, y, w, h)` contains exactly the pixels `x..x + w` by
    /// `y..y + h`.
    pub fn contains(&self, point: Point<T, U>) -> bool
    where
        T: Copy + PartialOrd,
    {
        self.0.contains(point)
    }

    /// Returns true if the rectangle covers no area.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd,
    {
        self.0.is_empty()
    }

    pub fn intersection(&self, rhs: &Rect<T, U>) -> Option<Rect<T, U>>
    where
        T: Copy + PartialOrd,
    {
        self.0.intersection(&rhs.0).map(|r| Rect(r))
    }
}

impl<T, U> Add<Offset<T, U>> for Rect<T, U>
where
    T: Copy + Add<T, Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Offset<T, U>) -> Self::Output {
        Self(self.0.translate(rhs))
    }
}

impl<T, U> AddAssign<Offset<T, U>> for Rect<T, U>
where
    T: Copy + Add<T, Output = T>,
{
    fn add_assign(&mut self, rhs: Offset<T, U>) {
        self.0 = self.0.translate(rhs);
    }
}

/// Restricts which pixels an operation may produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clip {
    Rect(Rect<i32, Px>),
    Unbounded,
}

impl Clip {
    /// Builds a pixel clip from an origin and a size, in pixels.
    #[must_use]
    pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::Rect(Rect::new(Point::new(x, y), Extent::new(width, height)))
    }

    #[must_use]
    pub fn contains(&self, pixel: Pixel) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(pixel),
            Self::Unbounded => true,
        }
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self::Unbounded
    }
}

impl From<Rect<i32, Px>> for Clip {
    fn from(rect: Rect<i32, Px>) -> Self {
        Self::Rect(rect)
    }
}
