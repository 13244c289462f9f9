//! Creational patterns: how values get constructed.
//!
//! Construction is not always a single constructor call. These modules show
//! piecewise construction (builders) and construction hidden behind named
//! functions or factory objects.

pub mod abstract_factory;
pub mod builder;
pub mod facets;
pub mod factory;
pub mod html;
