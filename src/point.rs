use std::fmt::{Display, Formatter};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, Num};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::cartesian_point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};
use crate::error::PuntoError;

/// A point in `N`-dimensional cartesian coordinate space.
///
/// The number of coordinates is a part of the type, so it can never change
/// after a point is created. The coordinate values themselves are freely
/// mutable through [`set`](Point::set) or [`coords_mut`](Point::coords_mut).
///
/// Indexed access is bounds-checked and reports an invalid index with
/// [`PuntoError::OutOfRange`] instead of panicking, so the hosting process can
/// treat a bad index as an ordinary recoverable error.
#[derive(Debug, Copy, Clone, PartialEq, Hash)]
pub struct Point<T, const N: usize> {
    coords: [T; N],
}

/// A point in 2-dimensional cartesian coordinate space.
pub type Point2<T = f64> = Point<T, 2>;

/// A point in 3-dimensional cartesian coordinate space.
pub type Point3<T = f64> = Point<T, 3>;

impl<T, const N: usize> Point<T, N> {
    /// Number of coordinates in every point of this type.
    pub const DIMENSIONS: usize = N;

    /// Creates a new point with the given coordinates.
    pub const fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// Number of coordinates of the point.
    pub const fn dim(&self) -> usize {
        N
    }

    /// Returns coordinates of the point as a slice.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Returns a mutable view of the coordinates of the point.
    ///
    /// The view allows changing coordinate values but not the number of
    /// coordinates.
    pub fn coords_mut(&mut self) -> &mut [T] {
        &mut self.coords
    }

    /// Returns an iterator over the coordinates of the point.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Consumes the point and returns its coordinates.
    pub fn into_coords(self) -> [T; N] {
        self.coords
    }

    /// Updates the coordinate at `index` with the given value.
    ///
    /// Returns [`PuntoError::OutOfRange`] if `index` is outside of `0..N`. The
    /// point is left unchanged in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), PuntoError> {
        if index >= N {
            return Err(PuntoError::OutOfRange { index, dim: N });
        }

        self.coords[index] = value;
        Ok(())
    }
}

impl<T: Copy, const N: usize> Point<T, N> {
    /// Returns the coordinate at `index` by value.
    ///
    /// Returns [`PuntoError::OutOfRange`] if `index` is outside of `0..N`.
    pub fn get(&self, index: usize) -> Result<T, PuntoError> {
        if index >= N {
            return Err(PuntoError::OutOfRange { index, dim: N });
        }

        Ok(self.coords[index])
    }

    /// Creates a point with all coordinates set to zero.
    pub fn origin() -> Self
    where
        T: Num,
    {
        Self {
            coords: [T::zero(); N],
        }
    }

    /// Returns a new point with all coordinates multiplied by `k`.
    pub fn multiply(&self, k: T) -> Self
    where
        T: Num,
    {
        Self {
            coords: std::array::from_fn(|index| self.coords[index] * k),
        }
    }

    /// Squared euclidean distance between the points.
    pub fn distance_sq(&self, other: &Self) -> T
    where
        T: Num + PartialOrd,
    {
        let mut sum = T::zero();
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            let d = if *a >= *b { *a - *b } else { *b - *a };
            sum = sum + d * d;
        }

        sum
    }

    /// Euclidean distance between the points.
    pub fn distance(&self, other: &Self) -> T
    where
        T: Float,
    {
        self.distance_sq(other).sqrt()
    }
}

impl<T: Copy> Point<T, 2> {
    /// X coordinate of the point.
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Updates x coordinate of the point.
    pub fn set_x(&mut self, x: T) {
        self.coords[0] = x;
    }

    /// Updates y coordinate of the point.
    pub fn set_y(&mut self, y: T) {
        self.coords[1] = y;
    }
}

impl<T: Copy> Point<T, 3> {
    /// X coordinate of the point.
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Z coordinate of the point.
    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Updates x coordinate of the point.
    pub fn set_x(&mut self, x: T) {
        self.coords[0] = x;
    }

    /// Updates y coordinate of the point.
    pub fn set_y(&mut self, y: T) {
        self.coords[1] = y;
    }

    /// Updates z coordinate of the point.
    pub fn set_z(&mut self, z: T) {
        self.coords[2] = z;
    }
}

impl<T: Num + Copy, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Num + Copy, const N: usize> std::ops::Add<Point<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, rhs: Point<T, N>) -> Self::Output {
        Self {
            coords: std::array::from_fn(|index| self.coords[index] + rhs.coords[index]),
        }
    }
}

impl<T: Num + Copy, const N: usize> std::ops::Sub<Point<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        Self {
            coords: std::array::from_fn(|index| self.coords[index] - rhs.coords[index]),
        }
    }
}

impl<T: Num + Copy, const N: usize> std::ops::Mul<T> for Point<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Display, const N: usize> Display for Point<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "( ")?;
        for (index, coord) in self.coords.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord}")?;
        }
        write!(f, " )")
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self { coords }
    }
}

impl<T, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.coords
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Point<T, N> {
    type Error = PuntoError;

    fn try_from(coords: &[T]) -> Result<Self, Self::Error> {
        match <[T; N]>::try_from(coords) {
            Ok(coords) => Ok(Self { coords }),
            Err(_) => Err(PuntoError::DimensionMismatch {
                expected: N,
                actual: coords.len(),
            }),
        }
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Point<T, N> {
    type Error = PuntoError;

    fn try_from(coords: Vec<T>) -> Result<Self, Self::Error> {
        let actual = coords.len();
        match <[T; N]>::try_from(coords) {
            Ok(coords) => Ok(Self { coords }),
            Err(_) => Err(PuntoError::DimensionMismatch { expected: N, actual }),
        }
    }
}

impl<T: Num + Copy + PartialOrd> CartesianPoint2d for Point<T, 2> {
    type Num = T;

    fn x(&self) -> T {
        self.coords[0]
    }
    fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Num + Copy + PartialOrd> NewCartesianPoint2d<T> for Point<T, 2> {
    fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }
}

impl<T: Copy> CartesianPoint3d for Point<T, 3> {
    type Num = T;

    fn x(&self) -> T {
        self.coords[0]
    }

    fn y(&self) -> T {
        self.coords[1]
    }

    fn z(&self) -> T {
        self.coords[2]
    }
}

impl<T: Copy> NewCartesianPoint3d<T> for Point<T, 3> {
    fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }
}

impl<T: Serialize, const N: usize> Serialize for Point<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.coords.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Point<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coords = Vec::<T>::deserialize(deserializer)?;
        let actual = coords.len();
        match <[T; N]>::try_from(coords) {
            Ok(coords) => Ok(Self { coords }),
            Err(_) => Err(de::Error::invalid_length(actual, &ExpectedDim(N))),
        }
    }
}

struct ExpectedDim(usize);

impl de::Expected for ExpectedDim {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of {} coordinates", self.0)
    }
}

impl<T, const N: usize> AbsDiffEq for Point<T, N>
where
    T: AbsDiffEq<Epsilon = T> + Copy,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Point<T, N>
where
    T: RelativeEq<Epsilon = T> + Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Point<T, N>
where
    T: UlpsEq<Epsilon = T> + Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Creates a new [`Point`] from the given coordinates.
///
/// ```
/// use punto::point;
///
/// let position = point!(1.0, 2.0, 3.0);
/// assert_eq!(position.dim(), 3);
/// assert_eq!(position.to_string(), "( 1, 2, 3 )");
/// ```
#[macro_export]
macro_rules! point {
    ($($coord:expr),+ $(,)?) => {
        $crate::Point::new([$($coord),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn construction_preserves_coordinates() {
        let coords = [3, 1, 4, 1, 5];
        let point = Point::new(coords);
        for (index, expected) in coords.iter().enumerate() {
            assert_eq!(point.get(index).expect("index is in range"), *expected);
        }
    }

    #[test]
    fn set_get_round_trip() {
        let mut point = Point::<f64, 4>::origin();
        for index in 0..point.dim() {
            point
                .set(index, index as f64 * 1.5)
                .expect("index is in range");
        }

        for index in 0..point.dim() {
            assert_eq!(
                point.get(index).expect("index is in range"),
                index as f64 * 1.5
            );
        }
    }

    #[test]
    fn out_of_range_access() {
        let mut point = Point::new([1, 2, 3]);

        assert_matches!(
            point.get(3),
            Err(PuntoError::OutOfRange { index: 3, dim: 3 })
        );
        assert_matches!(point.get(usize::MAX), Err(PuntoError::OutOfRange { .. }));
        assert_matches!(
            point.set(3, 100),
            Err(PuntoError::OutOfRange { index: 3, dim: 3 })
        );

        assert_eq!(point.get(0).expect("index is in range"), 1);
        assert_eq!(point.get(2).expect("index is in range"), 3);

        let single = Point::new([5]);
        assert_eq!(single.get(0).expect("index is in range"), 5);
        assert_matches!(single.get(1), Err(PuntoError::OutOfRange { .. }));
    }

    #[test]
    fn failed_access_leaves_coordinates_intact() {
        let mut point = Point::new([1, 2, 3]);
        assert_matches!(point.set(7, 100), Err(PuntoError::OutOfRange { .. }));
        assert_eq!(point.coords(), &[1, 2, 3]);
    }

    #[test]
    fn error_message_names_index_and_range() {
        let error = Point::new([0.0]).get(7).expect_err("index is out of range");
        assert_eq!(error.to_string(), "coordinate index 7 is out of range 0..1");
    }

    #[test]
    fn dimensions_are_fixed() {
        let mut point = Point::new([1, 2]);
        assert_eq!(point.dim(), 2);

        point.set(0, 10).expect("index is in range");
        point.set(1, 20).expect("index is in range");
        let _ = point.set(2, 30);

        assert_eq!(point.dim(), 2);
        assert_eq!(Point::<i32, 2>::DIMENSIONS, 2);
    }

    #[test]
    fn origin_is_zero_initialized() {
        let origin = Point::<f64, 3>::origin();
        assert_eq!(origin.coords(), &[0.0, 0.0, 0.0]);
        assert_eq!(Point::<i32, 5>::default(), Point::<i32, 5>::origin());
    }

    #[test]
    fn display_format() {
        assert_eq!(Point::new([1, 2, 3]).to_string(), "( 1, 2, 3 )");
        assert_eq!(Point::new([5]).to_string(), "( 5 )");
        assert_eq!(Point::<f64, 3>::default().to_string(), "( 0, 0, 0 )");
        assert_eq!(
            Point::new([1.5, -2.0, 0.0, 3.25]).to_string(),
            "( 1.5, -2, 0, 3.25 )"
        );
    }

    #[test]
    fn try_from_checks_length() {
        let point = Point::<i32, 3>::try_from([1, 2, 3].as_slice()).expect("length matches");
        assert_eq!(point.coords(), &[1, 2, 3]);

        assert_matches!(
            Point::<i32, 3>::try_from([1, 2].as_slice()),
            Err(PuntoError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_matches!(
            Point::<i32, 3>::try_from(vec![1, 2, 3, 4]),
            Err(PuntoError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );

        let point = Point::<i32, 2>::try_from(vec![7, 8]).expect("length matches");
        assert_eq!(point, Point::new([7, 8]));
    }

    #[test]
    fn array_conversions() {
        let point: Point<i32, 2> = [7, 8].into();
        assert_eq!(point, Point::new([7, 8]));

        let array: [i32; 2] = point.into();
        assert_eq!(array, [7, 8]);
    }

    #[test]
    fn coordinate_views() {
        let mut point = Point::new([1, 2, 3]);
        assert_eq!(point.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        point.coords_mut()[1] = 20;
        assert_eq!(point.into_coords(), [1, 20, 3]);
    }

    #[test]
    fn fixed_dimension_accessors() {
        let mut point = Point3::new([1.0, 2.0, 3.0]);
        assert_eq!(point.x(), 1.0);
        assert_eq!(point.y(), 2.0);
        assert_eq!(point.z(), 3.0);

        point.set_x(4.0);
        point.set_y(5.0);
        point.set_z(6.0);
        assert_eq!(point, Point::new([4.0, 5.0, 6.0]));

        let mut flat = Point2::new([1.0, 2.0]);
        flat.set_x(3.0);
        flat.set_y(4.0);
        assert_eq!((flat.x(), flat.y()), (3.0, 4.0));
    }

    #[test]
    fn componentwise_ops() {
        let a = Point::new([1.0, 2.0, 3.0]);
        let b = Point::new([4.0, 5.0, 6.0]);

        assert_eq!(a + b, Point::new([5.0, 7.0, 9.0]));
        assert_eq!((a + b) - a, b);
        assert_eq!(a.multiply(2.0), Point::new([2.0, 4.0, 6.0]));
        assert_eq!(a * 2.0, Point::new([2.0, 4.0, 6.0]));
    }

    #[test]
    fn distances() {
        let a = Point::new([0.0, 0.0]);
        let b = Point::new([3.0, 4.0]);
        assert_eq!(a.distance_sq(&b), 25.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0);

        let a = Point::new([1u32, 5]);
        let b = Point::new([4u32, 1]);
        assert_eq!(a.distance_sq(&b), 25);
        assert_eq!(b.distance_sq(&a), 25);
    }

    #[test]
    fn approx_comparison() {
        let a = Point::new([1.0, 2.0]);
        let b = a.multiply(3.0).multiply(1.0 / 3.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-10);
    }

    #[test]
    fn serde_fixed_length_sequence() {
        let point = Point::new([1.5, -2.0, 0.0, 3.25]);
        let json = serde_json::to_string(&point).expect("serialization failed");
        assert_eq!(json, "[1.5,-2.0,0.0,3.25]");

        let deserialized: Point<f64, 4> =
            serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(deserialized, point);
    }

    #[test]
    fn serde_rejects_wrong_length() {
        let error = serde_json::from_str::<Point<f64, 4>>("[1.0,2.0]")
            .expect_err("length does not match");
        assert!(error.to_string().contains("a sequence of 4 coordinates"));

        assert!(serde_json::from_str::<Point<f64, 4>>("[1.0,2.0,3.0,4.0,5.0]").is_err());
    }

    #[test]
    fn point_macro() {
        let point = crate::point!(1, 2, 3);
        assert_eq!(point, Point::new([1, 2, 3]));

        let single = crate::point!(5);
        assert_eq!(single.to_string(), "( 5 )");
    }

    #[test]
    fn point_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Point<f64, 3>>();
    }
}
