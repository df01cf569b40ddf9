//! Geometry primitives shared by all samplers.
//!
//! [`Point`] is a plain value type; [`Domain`] is the half-open rectangle
//! `[0, width) x [0, height)` every sampler fills.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D position in domain space. Equality is by value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<f32>> for Point {
    fn from(p: mint::Point2<f32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<f32> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl From<mint::Vector2<f32>> for Point {
    fn from(v: mint::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for mint::Vector2<f32> {
    fn from(p: Point) -> Self {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

/// Rectangular sampling domain anchored at the origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Extent along x in domain units.
    pub width: f32,
    /// Extent along y in domain units.
    pub height: f32,
}

impl Domain {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validates the domain, returning an error if either extent is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidConfig(
                "domain extents must be finite".into(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidConfig(
                "domain extents must be > 0 in both components".into(),
            ));
        }
        Ok(())
    }

    /// Half-open containment test: `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Domain extent as a vector.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for Domain {
    fn from(extent: Vec2) -> Self {
        Self::new(extent.x, extent.y)
    }
}

impl From<mint::Vector2<f32>> for Domain {
    fn from(extent: mint::Vector2<f32>) -> Self {
        Self::new(extent.x, extent.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn points_compare_by_value() {
        assert_eq!(Point::new(0.5, 0.25), Point::from(Vec2::new(0.5, 0.25)));
        assert_ne!(Point::new(0.5, 0.25), Point::new(0.25, 0.5));
    }

    #[test]
    fn conversions_round_trip_through_mint_and_glam() {
        let p = Point::new(3.0, -1.5);
        let m: mint::Point2<f32> = p.into();
        let v: Vec2 = p.into();
        assert_eq!(Point::from(m), p);
        assert_eq!(Point::from(v), p);
    }

    #[test]
    fn contains_is_half_open() {
        let domain = Domain::new(10.0, 5.0);
        assert!(domain.contains(Point::new(0.0, 0.0)));
        assert!(domain.contains(Point::new(9.999, 4.999)));
        assert!(!domain.contains(Point::new(10.0, 1.0)));
        assert!(!domain.contains(Point::new(1.0, 5.0)));
        assert!(!domain.contains(Point::new(-0.001, 1.0)));
    }

    #[test]
    fn validate_rejects_degenerate_extents() {
        assert!(Domain::new(1.0, 1.0).validate().is_ok());
        assert!(matches!(
            Domain::new(0.0, 1.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(Domain::new(1.0, -2.0).validate().is_err());
        assert!(Domain::new(f32::INFINITY, 1.0).validate().is_err());
        assert!(Domain::new(1.0, f32::NAN).validate().is_err());
    }
}
