//! Pattern 2: Structural
//! Example: Coffee Cost Decorators
//!
//! Run with: cargo run --example p2_coffee_decorator

use colored::Colorize;
use gamma_patterns::logging::init_logging;
use gamma_patterns::structural::decorator::{Coffee, CoffeeExt, Milk, SimpleCoffee, Sugar};

fn main() {
    init_logging();

    println!("{}", "=== Wrapping by Hand ===".bold());
    let coffee = SimpleCoffee;
    let coffee = Milk::new(coffee);
    let coffee = Sugar::new(coffee);
    println!("{}: {}", coffee.description(), coffee.cost());

    println!("\n{}", "=== Wrap Order Does Not Matter ===".bold());
    // Usage: Each wrapper forwards cost() and adds its own increment.
    let sugar_first = SimpleCoffee.with_sugar().with_milk();
    println!("{}: {}", sugar_first.description(), sugar_first.cost());

    println!("\n{}", "=== Chain Chosen at Runtime ===".bold());
    let order = ["sugar", "milk", "sugar", "vanilla"];
    let mut boxed: Box<dyn Coffee> = Box::new(SimpleCoffee);
    for extra in order {
        let next: Box<dyn Coffee> = match extra {
            "milk" => Box::new(boxed.with_milk()),
            "sugar" => Box::new(boxed.with_sugar()),
            other => Box::new(boxed.with_extra(other, 3)),
        };
        boxed = next;
    }
    println!("{}: {}", boxed.description(), boxed.cost());
}
