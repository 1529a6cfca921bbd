use nalgebra::{Point2, Point3, Scalar};
use num_traits::Num;

use crate::cartesian_point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};
use crate::point::Point;

impl<T: Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<T> {
    type Num = T;

    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
}

impl<T: Num + Copy + PartialOrd + Scalar> NewCartesianPoint2d<T> for Point2<T> {
    fn new(x: T, y: T) -> Self {
        Point2::new(x, y)
    }
}

impl<T: Scalar + Copy> CartesianPoint3d for Point3<T> {
    type Num = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn z(&self) -> T {
        self.z
    }
}

impl<T: Scalar + Copy> NewCartesianPoint3d<T> for Point3<T> {
    fn new(x: T, y: T, z: T) -> Self {
        Point3::new(x, y, z)
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::Point<T, N>> for Point<T, N> {
    fn from(point: nalgebra::Point<T, N>) -> Self {
        let coords: [T; N] = point.coords.into();
        Point::new(coords)
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for nalgebra::Point<T, N> {
    fn from(point: Point<T, N>) -> Self {
        nalgebra::Point::from(point.into_coords())
    }
}
