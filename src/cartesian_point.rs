use num_traits::{Float, Num};

/// A point in 2-dimensional cartesian coordinate space.
///
/// Implementing this trait lets generic algorithms consume a point type
/// without knowing its concrete representation. The crate provides
/// implementations for [`Point<T, 2>`](crate::Point), `nalgebra` points and
/// (with the `geo-types` feature) `geo-types` points.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd;

    /// X coordinate of the point.
    fn x(&self) -> Self::Num;
    /// Y coordinate of the point.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let dx = if self.x() >= other.x() {
            self.x() - other.x()
        } else {
            other.x() - self.x()
        };
        let dy = if self.y() >= other.y() {
            self.y() - other.y()
        } else {
            other.y() - self.y()
        };

        dx * dx + dy * dy
    }

    /// Manhattan distance between the points.
    fn taxicab_distance(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let dx = if self.x() >= other.x() {
            self.x() - other.x()
        } else {
            other.x() - self.x()
        };
        let dy = if self.y() >= other.y() {
            self.y() - other.y()
        } else {
            other.y() - self.y()
        };

        dx + dy
    }
}

/// Constructor for 2-dimensional cartesian points.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point with the given coordinates.
    fn new(x: Num, y: Num) -> Self;
}

/// Euclidean distance for points with floating point coordinates.
pub trait CartesianPoint2dFloat<N: Float = f64>: CartesianPoint2d<Num = N> {
    /// Euclidean distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

/// A point in 3-dimensional cartesian coordinate space.
pub trait CartesianPoint3d {
    /// Numeric type used to represent coordinates.
    type Num: Copy;

    /// X coordinate of the point.
    fn x(&self) -> Self::Num;
    /// Y coordinate of the point.
    fn y(&self) -> Self::Num;
    /// Z coordinate of the point.
    fn z(&self) -> Self::Num;
}

/// Constructor for 3-dimensional cartesian points.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point with the given coordinates.
    fn new(x: Num, y: Num, z: Num) -> Self;
}
