//! # SOLID Principles
//!
//! The design principles the Gamma patterns lean on:
//!
//! - **S**ingle responsibility: one reason to change (`single_responsibility`)
//! - **O**pen/closed: extend without modifying (`open_closed`)
//! - **L**iskov substitution: implementations keep the promises of their
//!   interface (`liskov`)
//! - **I**nterface segregation: small, focused traits (`interface_segregation`)
//! - **D**ependency inversion: depend on abstractions (`dependency_inversion`)

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov;
pub mod open_closed;
pub mod single_responsibility;
