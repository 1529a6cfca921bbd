//! Dimension-generic cartesian points.
//!
//! The central type of this crate is [`Point`], a fixed-arity tuple of numeric
//! coordinates. The number of coordinates is a part of the type, so points of
//! different dimensions cannot be mixed up, while element access is checked at
//! run time and reported through [`PuntoError`] instead of aborting the
//! process.
//!
//! ```
//! use punto::{point, PuntoError};
//!
//! let mut position = point!(1.0, 2.0, 3.0);
//! position.set(0, 4.0)?;
//!
//! assert_eq!(position.get(0)?, 4.0);
//! assert_eq!(position.to_string(), "( 4, 2, 3 )");
//! assert!(position.get(10).is_err());
//! # Ok::<(), PuntoError>(())
//! ```
//!
//! The fixed-size aliases [`Point2`] and [`Point3`] add the usual coordinate
//! accessors, and the [`CartesianPoint2d`]/[`CartesianPoint3d`] traits let
//! generic code consume points of this crate together with `nalgebra` and
//! (with the default `geo-types` feature) `geo-types` points through one
//! interface.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod error;

mod cartesian_point;
mod nalgebra;
mod point;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use cartesian_point::{
    CartesianPoint2d, CartesianPoint2dFloat, CartesianPoint3d, NewCartesianPoint2d,
    NewCartesianPoint3d,
};
pub use error::PuntoError;
pub use point::{Point, Point2, Point3};
