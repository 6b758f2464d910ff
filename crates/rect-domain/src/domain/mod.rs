//! Geometry for rectangular domains.
//!
//! Everything in here is plain value arithmetic: no I/O, no allocation, no
//! shared state.  Both [`vector::Vector2`] and [`rect::RectDomain`] are
//! `Copy`, so passing them around never creates aliases.

/// Two-component `f64` vector used for corners, sizes and points.
pub mod vector;

/// The rectangular domain and its small algebra.
///
/// See [`rect::RectDomain`] for the main type.
pub mod rect;
