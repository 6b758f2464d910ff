//! Axis-aligned rectangular domain.
//!
//! A domain covers the closed region
//! `[min.x, min.x + size.x] × [min.y, min.y + size.y]`.  Boundaries are part
//! of the domain, so a point on an edge is inside and two domains sharing an
//! edge intersect.
//!
//! The size is assumed to be non-negative.  [`RectDomain::new`] does not check
//! this; [`RectDomain::try_new`] does.  Operations on a negative-size domain
//! still return well-defined numbers, they just do not mean anything.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use super::vector::Vector2;

/// Errors reported by the checked constructors and operations.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// A size component is negative.
    #[error("domain size must be non-negative, got width {width} and height {height}")]
    NegativeSize { width: f64, height: f64 },

    /// A corner or size component is NaN or infinite.
    #[error("domain corner and size must be finite")]
    NonFinite,

    /// The point to reflect lies outside the domain.
    #[error("point ({x}, {y}) lies outside the domain")]
    PointOutside { x: f64, y: f64 },
}

/// One of the four boundary lines of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The line `x = min.x`.
    Left,
    /// The line `x = min.x + size.x`.
    Right,
    /// The line `y = min.y`.
    Bottom,
    /// The line `y = min.y + size.y`.
    Top,
}

impl Boundary {
    /// All boundaries, in the order [`RectDomain::reflect_point`] reports them.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];
}

/// A closed axis-aligned rectangle in world space.
///
/// Equality is exact: two domains are equal only when both the min corner
/// and the size compare equal component by component.  Two domains covering
/// the same region after floating-point rounding may still compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDomain {
    min_corner: Vector2,
    size: Vector2,
}

impl RectDomain {
    /// Creates a domain from its minimum ("bottom-left") corner and its span.
    ///
    /// No validation is performed.  Use [`RectDomain::try_new`] when the inputs
    /// come from outside the program.
    pub const fn new(min_corner: Vector2, size: Vector2) -> Self {
        Self { min_corner, size }
    }

    /// Creates a domain, rejecting non-finite components and negative sizes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFinite`] if any component is NaN or infinite.
    /// Returns [`DomainError::NegativeSize`] if either size component is negative.
    pub fn try_new(min_corner: Vector2, size: Vector2) -> Result<Self, DomainError> {
        if !min_corner.is_finite() || !size.is_finite() {
            return Err(DomainError::NonFinite);
        }
        if size.x() < 0.0 || size.y() < 0.0 {
            return Err(DomainError::NegativeSize {
                width: size.x(),
                height: size.y(),
            });
        }
        Ok(Self::new(min_corner, size))
    }

    /// Creates the domain spanning from `min_corner` to `max_corner`.
    ///
    /// The size is `max_corner - min_corner`; if `max_corner` is below or left
    /// of `min_corner` the result has a negative size.
    pub fn from_corners(min_corner: Vector2, max_corner: Vector2) -> Self {
        Self::new(min_corner, max_corner - min_corner)
    }

    pub const fn min_corner(&self) -> Vector2 {
        self.min_corner
    }

    pub const fn size(&self) -> Vector2 {
        self.size
    }

    /// Returns the corner with the largest x and y coordinates.
    pub fn max_corner(&self) -> Vector2 {
        self.min_corner + self.size
    }

    pub fn min_x(&self) -> f64 {
        self.min_corner.x()
    }

    pub fn min_y(&self) -> f64 {
        self.min_corner.y()
    }

    pub fn max_x(&self) -> f64 {
        self.min_corner.x() + self.size.x()
    }

    pub fn max_y(&self) -> f64 {
        self.min_corner.y() + self.size.y()
    }

    pub fn width(&self) -> f64 {
        self.size.x()
    }

    pub fn height(&self) -> f64 {
        self.size.y()
    }

    pub fn area(&self) -> f64 {
        self.size.x() * self.size.y()
    }

    /// Returns `true` if the domain has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.size.x() == 0.0 || self.size.y() == 0.0
    }

    /// Returns a copy of this domain moved to a new min corner.
    pub fn with_min_corner(self, min_corner: Vector2) -> Self {
        Self { min_corner, ..self }
    }

    /// Returns a copy of this domain with a new size, keeping the min corner.
    pub fn with_size(self, size: Vector2) -> Self {
        Self { size, ..self }
    }

    /// Overwrites this domain with the corner and size of `other`.
    ///
    /// Both fields are copied by value; later changes to `other` do not show
    /// up here.
    pub fn copy_from(&mut self, other: &RectDomain) {
        self.min_corner = other.min_corner;
        self.size = other.size;
    }

    /// Returns `true` if the two closed domains overlap or touch.
    pub fn intersects(&self, other: &RectDomain) -> bool {
        !(self.min_x() > other.max_x()
            || self.min_y() > other.max_y()
            || self.max_x() < other.min_x()
            || self.max_y() < other.min_y())
    }

    /// Returns `true` if `point` lies inside the domain or on its boundary.
    pub fn point_inside(&self, point: Vector2) -> bool {
        let local = point - self.min_corner;
        local.x() >= 0.0
            && local.y() >= 0.0
            && local.x() <= self.size.x()
            && local.y() <= self.size.y()
    }

    /// Mirrors `point` across one boundary line.
    pub fn reflect_point_across(&self, point: Vector2, boundary: Boundary) -> Vector2 {
        match boundary {
            Boundary::Left => Vector2::new(2.0 * self.min_x() - point.x(), point.y()),
            Boundary::Right => Vector2::new(2.0 * self.max_x() - point.x(), point.y()),
            Boundary::Bottom => Vector2::new(point.x(), 2.0 * self.min_y() - point.y()),
            Boundary::Top => Vector2::new(point.x(), 2.0 * self.max_y() - point.y()),
        }
    }

    /// Mirrors `point` across all four boundaries.
    ///
    /// The result is ordered left, right, bottom, top (see [`Boundary::ALL`]).
    ///
    /// `point` must lie inside the domain for the reflections to be useful
    /// as ghost positions.  This is not checked: an outside point still
    /// produces four numbers.  Use [`RectDomain::try_reflect_point`] to have
    /// it checked.
    pub fn reflect_point(&self, point: Vector2) -> [Vector2; 4] {
        let reflections = Boundary::ALL.map(|boundary| self.reflect_point_across(point, boundary));
        trace!(%point, ?reflections, "reflected point across domain boundaries");
        reflections
    }

    /// Like [`RectDomain::reflect_point`], but rejects points outside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PointOutside`] if `point` is not inside the domain.
    pub fn try_reflect_point(&self, point: Vector2) -> Result<[Vector2; 4], DomainError> {
        if !self.point_inside(point) {
            return Err(DomainError::PointOutside {
                x: point.x(),
                y: point.y(),
            });
        }
        Ok(self.reflect_point(point))
    }

    /// Computes the region shared by both domains.
    ///
    /// Returns `None` when the domains neither overlap nor touch.  Domains that
    /// only share an edge or a corner produce a zero-width and/or zero-height
    /// domain, not `None`.
    pub fn intersection(&self, other: &RectDomain) -> Option<RectDomain> {
        if !self.intersects(other) {
            trace!(domain = %self, %other, "domains do not intersect");
            return None;
        }

        // For two overlapping intervals the overlap is bounded by the two
        // middle values of the four sorted endpoints.
        let mut xs = [self.min_x(), other.min_x(), self.max_x(), other.max_x()];
        xs.sort_by(f64::total_cmp);
        let mut ys = [self.min_y(), other.min_y(), self.max_y(), other.max_y()];
        ys.sort_by(f64::total_cmp);

        let overlap =
            RectDomain::from_corners(Vector2::new(xs[1], ys[1]), Vector2::new(xs[2], ys[2]));
        trace!(domain = %self, %other, %overlap, "computed domain intersection");
        Some(overlap)
    }
}

impl fmt::Display for RectDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RectDomain from ( {:.2}, {:.2} ) to ( {:.2}, {:.2} )",
            self.min_x(),
            self.min_y(),
            self.max_x(),
            self.max_y()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
