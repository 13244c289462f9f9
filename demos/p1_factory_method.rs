//! Pattern 1: Creational
//! Example: Factory Methods and Factory Types
//!
//! Run with: cargo run --example p1_factory_method

use colored::Colorize;
use gamma_patterns::creational::factory::{CoordinateSystem, Point, PointFactory};
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== Constructor With a Mode Flag ===".bold());
    let p1 = Point::new(2.0, 3.0, CoordinateSystem::Cartesian);
    println!("Constructor:    {p1}");

    println!("\n{}", "=== Factory Methods ===".bold());
    // Usage: The name says how the arguments are read.
    let p2 = Point::new_cartesian(1.0, 2.0);
    let p3 = Point::new_polar(5.0, 1.57);
    println!("Factory Method: {p2} | {p3}");

    println!("\n{}", "=== Separate Factory ===".bold());
    let p4 = PointFactory::new_cartesian(9.0, 10.0);
    let p5 = PointFactory::new_polar(6.0, 1.57);
    println!("PointFactory:   {p4} | {p5}");
}
