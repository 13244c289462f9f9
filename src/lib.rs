//! # Gamma Categorization of Design Patterns
//!
//! This crate contains examples for the three Gamma categories, named after
//! Erich Gamma, co-author of "Design Patterns: Elements of Reusable
//! Object-Oriented Software".
//!
//! ## Categories Covered
//!
//! 1. **Creational Patterns** (`creational`)
//!    - Deal with the construction of objects
//!    - Explicit (constructor) vs implicit (DI, reflection)
//!    - Wholesale vs piecewise (step by step) construction
//!    - Builder, HTML builder, faceted builder, factories
//!
//! 2. **Structural Patterns** (`structural`)
//!    - Concerned with the structure of types and values
//!    - Many patterns are wrappers that mimic the underlying interface
//!    - Stress the importance of API design
//!    - Decorator
//!
//! 3. **Behavioral Patterns** (`behavioral`)
//!    - No central theme, each one does its own thing
//!    - Strategy
//!
//! The SOLID principles the patterns build on live in `principles`, and the
//! category overview itself is data in `catalog`.
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p0_gamma_categories
//!
//! # Pattern 1: Creational
//! cargo run --example p1_computer_builder
//! cargo run --example p1_html_builder
//! cargo run --example p1_builder_facets
//! cargo run --example p1_factory_method
//! cargo run --example p1_abstract_factory
//!
//! # Pattern 2: Structural
//! cargo run --example p2_coffee_decorator
//!
//! # Pattern 3: Behavioral
//! cargo run --example p3_payment_strategy
//!
//! # Pattern 4: SOLID
//! cargo run --example p4_solid_principles
//! ```

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod error;
pub mod logging;
pub mod principles;
pub mod structural;

pub use catalog::{Catalog, GammaCategory};
pub use error::{PatternError, Result};
