//! # rect-domain
//!
//! Axis-aligned rectangular domains in 2D world space.
//!
//! A [`RectDomain`] is a closed rectangle described by its minimum corner and
//! its size.  It answers three questions a spatial simulation keeps asking
//! about its boundaries:
//!
//! - Does a point lie inside the domain (boundary included)?
//! - Where do two domains overlap, if at all?
//! - Where does a point land when mirrored across each of the four walls?
//!
//! The last one is what boundary-condition handling is built on: a particle
//! near a wall gets "ghost" copies on the far side of the wall so that
//! neighbourhood queries see a symmetric world.
//!
//! # Layout
//!
//! - **`domain`** – the geometry itself: [`Vector2`], [`RectDomain`],
//!   [`Boundary`], and the [`DomainError`] returned by the checked
//!   constructors.
//!
//! - **`config`** – describing domains in TOML files so that callers can keep
//!   simulation extents out of their code.
//!
//! # Example
//!
//! ```
//! use rect_domain::{RectDomain, Vector2};
//!
//! let world = RectDomain::new(Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0));
//! let inlet = RectDomain::new(Vector2::new(-1.0, 1.0), Vector2::new(2.0, 2.0));
//!
//! let overlap = world.intersection(&inlet).expect("domains touch");
//! assert_eq!(overlap.min_corner(), Vector2::new(0.0, 1.0));
//! assert_eq!(overlap.size(), Vector2::new(1.0, 2.0));
//! ```

pub mod config;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `rect_domain::RectDomain` instead of `rect_domain::domain::rect::RectDomain`.
pub use config::{ConfigError, DomainConfig};
pub use domain::rect::{Boundary, DomainError, RectDomain};
pub use domain::vector::Vector2;
