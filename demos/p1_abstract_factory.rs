//! Pattern 1: Creational
//! Example: Abstract Factory for Hot Drinks
//!
//! Run with: cargo run --example p1_abstract_factory
//! Pick a drink: cargo run --example p1_abstract_factory -- 1 250

use colored::Colorize;
use gamma_patterns::creational::abstract_factory::{make_drink, HotDrinkMachine};
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== One Function Per Drink Kind ===".bold());
    for kind in ["tea", "coffee", "cocoa"] {
        match make_drink(kind) {
            Ok(prepared) => println!("{}\n  {}", prepared.steps, prepared.drink.consume()),
            Err(e) => println!("{}", format!("Error: {e}").red()),
        }
    }

    println!("\n{}", "=== Hot Drink Machine ===".bold());
    // Usage: The machine only knows the factory trait, not the drinks.
    let machine = HotDrinkMachine::new();
    println!("Available drinks:");
    for line in machine.menu() {
        println!("  {line}");
    }

    let mut args = std::env::args().skip(1);
    let index = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let amount = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    match machine.make_drink(index, amount) {
        Ok(prepared) => {
            println!("{}", prepared.steps);
            println!("{}", prepared.drink.consume());
        }
        Err(e) => println!("{}", format!("Error: {e}").red()),
    }
}
