//! Pattern 1: Creational
//! Example: Faceted Builder
//!
//! Run with: cargo run --example p1_builder_facets

use colored::Colorize;
use gamma_patterns::creational::facets::PersonBuilder;
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== Address and Job Facets ===".bold());
    // Usage: lives()/works() switch facets; both fill in the same Person.
    let person = PersonBuilder::new()
        .lives()
        .at("123 London Road")
        .in_city("London")
        .with_postcode("SW12BC")
        .works()
        .at("Fabrikam")
        .as_a("Engineer")
        .earning(123000)
        .build();
    println!("{person}");

    println!("\n{}", "=== Nothing Set ===".bold());
    println!("{}", PersonBuilder::new().build());
}
