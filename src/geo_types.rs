use geo_types::CoordNum;

use crate::cartesian_point::{CartesianPoint2d, NewCartesianPoint2d};
use crate::point::Point;

impl<T: CoordNum> CartesianPoint2d for geo_types::Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl<T: CoordNum> NewCartesianPoint2d<T> for geo_types::Point<T> {
    fn new(x: T, y: T) -> Self {
        geo_types::Point::new(x, y)
    }
}

impl<T: CoordNum> From<geo_types::Point<T>> for Point<T, 2> {
    fn from(point: geo_types::Point<T>) -> Self {
        Point::new([point.0.x, point.0.y])
    }
}

impl<T: CoordNum> From<Point<T, 2>> for geo_types::Point<T> {
    fn from(point: Point<T, 2>) -> Self {
        geo_types::Point::new(point.x(), point.y())
    }
}
