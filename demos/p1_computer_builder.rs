//! Pattern 1: Creational
//! Example: Consuming Builder for a Computer
//!
//! Run with: cargo run --example p1_computer_builder

use colored::Colorize;
use gamma_patterns::creational::builder::Computer;
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== Piecewise Construction ===".bold());
    // Usage: Each setter moves the builder along; build() hands back the record.
    let computer = Computer::builder()
        .cpu("Intel i7")
        .ram("16GB")
        .storage("1TB SSD")
        .build();
    println!("{}", computer.description());

    println!("\n{}", "=== Any Order, Last Write Wins ===".bold());
    let upgraded = Computer::builder()
        .storage("512GB SSD")
        .ram("16GB")
        .cpu("AMD Ryzen 7")
        .ram("32GB")
        .build();
    println!("{upgraded}");

    println!("\n{}", "=== Unset Parts ===".bold());
    let bare = Computer::builder().cpu("Apple M2").build();
    println!("{bare}");
}
