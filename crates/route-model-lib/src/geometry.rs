//! Coordinates and bounding boxes
//!
//! Geographic points are WGS84 degrees. Internally the box is a `geo::Rect`
//! with `x` = longitude and `y` = latitude, which keeps it interoperable with
//! the rest of the geo ecosystem.

use crate::{Result, RouteError};
use geo::{Coord, Rect};
use rayon::prelude::*;

/// A geographic point along a route, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting values outside the WGS84 ranges
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(RouteError::InvalidCoordinate(format!(
                "({latitude}, {longitude})"
            )))
        }
    }

    /// Check the latitude is within ±90° and the longitude within ±180°
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinate> for Coord<f64> {
    #[inline]
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.longitude,
            y: coordinate.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    #[inline]
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

/// Axis-aligned box enclosing a set of coordinates
///
/// Starts out uninitialized (`is_empty()`); the first [`extend`](Self::extend)
/// turns it into the degenerate box around that point, and every later one
/// grows it as needed. It never shrinks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    rect: Option<Rect<f64>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl BoundingBox {
    /// The uninitialized box
    #[inline]
    pub fn empty() -> Self {
        Self { rect: None }
    }

    /// Build a box from explicit bounds. Swapped bounds are normalized.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            rect: Some(Rect::new(
                Coord {
                    x: min_longitude,
                    y: min_latitude,
                },
                Coord {
                    x: max_longitude,
                    y: max_latitude,
                },
            )),
        }
    }

    /// Build a box from the route source's `[min_lon, min_lat, max_lon, max_lat]` order
    #[inline]
    pub fn from_lon_lat_array(bbox: [f64; 4]) -> Self {
        Self::new(bbox[1], bbox[3], bbox[0], bbox[2])
    }

    /// Fold every coordinate into a fresh box, in order
    pub fn from_coordinates<'a, I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        coordinates
            .into_iter()
            .fold(Self::empty(), |bbox, coordinate| bbox.extended(*coordinate))
    }

    /// Same result as [`from_coordinates`](Self::from_coordinates), computed in parallel
    ///
    /// Extension is associative and commutative, so chunks can be folded
    /// independently and merged with [`union`](Self::union).
    pub fn from_coordinates_par(coordinates: &[Coordinate]) -> Self {
        #[cfg(feature = "profiling")]
        profiling::scope!("bounding_box::from_coordinates_par");

        coordinates
            .par_iter()
            .fold(Self::empty, |bbox, coordinate| bbox.extended(*coordinate))
            .reduce(Self::empty, Self::union)
    }

    /// Grow the box so it contains `coordinate`
    pub fn extend(&mut self, coordinate: Coordinate) {
        let point = Coord::from(coordinate);
        self.rect = Some(match self.rect {
            Some(rect) => Rect::new(
                Coord {
                    x: rect.min().x.min(point.x),
                    y: rect.min().y.min(point.y),
                },
                Coord {
                    x: rect.max().x.max(point.x),
                    y: rect.max().y.max(point.y),
                },
            ),
            None => Rect::new(point, point),
        });
    }

    /// By-value variant of [`extend`](Self::extend)
    #[inline]
    pub fn extended(mut self, coordinate: Coordinate) -> Self {
        self.extend(coordinate);
        self
    }

    /// Smallest box containing both boxes
    pub fn union(self, other: Self) -> Self {
        match (self.rect, other.rect) {
            (Some(a), Some(b)) => Self {
                rect: Some(Rect::new(
                    Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )),
            },
            (Some(_), None) => self,
            (None, _) => other,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// The underlying rectangle (`x` = longitude, `y` = latitude)
    #[inline]
    pub fn rect(&self) -> Option<Rect<f64>> {
        self.rect
    }

    #[inline]
    pub fn min_latitude(&self) -> Option<f64> {
        self.rect.map(|r| r.min().y)
    }

    #[inline]
    pub fn max_latitude(&self) -> Option<f64> {
        self.rect.map(|r| r.max().y)
    }

    #[inline]
    pub fn min_longitude(&self) -> Option<f64> {
        self.rect.map(|r| r.min().x)
    }

    #[inline]
    pub fn max_longitude(&self) -> Option<f64> {
        self.rect.map(|r| r.max().x)
    }

    /// Center point, or `None` for the uninitialized box
    #[inline]
    pub fn center(&self) -> Option<Coordinate> {
        self.rect.map(|r| Coordinate::from(r.center()))
    }

    /// Whether `coordinate` lies inside the box, borders included
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let Some(rect) = self.rect else {
            return false;
        };
        let point = Coord::from(coordinate);
        point.x >= rect.min().x
            && point.x <= rect.max().x
            && point.y >= rect.min().y
            && point.y <= rect.max().y
    }
}

impl FromIterator<Coordinate> for BoundingBox {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::extended)
    }
}
