//! Pattern 1: Creational
//! Example: Ordinary and Fluent HTML Builders
//!
//! Run with: cargo run --example p1_html_builder

use colored::Colorize;
use gamma_patterns::creational::html::HtmlElement;
use gamma_patterns::logging::init_logging;

fn main() {
    init_logging();

    println!("{}", "=== Without a Builder ===".bold());
    let hello = "hello";
    println!("{}", ["<p>", hello, "</p>"].concat());

    let words = ["hello", "world"];
    let mut parts = vec!["<ul>".to_string()];
    for w in words {
        parts.push(format!("  <li>{w}</li>"));
    }
    parts.push("</ul>".to_string());
    println!("{}", parts.join("\n"));

    println!("\n{}", "=== Ordinary Builder ===".bold());
    let mut builder = HtmlElement::create("ul");
    builder.add_child("li", "hello");
    builder.add_child("li", "world");
    println!("{builder}");

    println!("\n{}", "=== Fluent Builder ===".bold());
    // Usage: clear() resets the root so the same builder can be reused.
    builder.clear();
    builder
        .add_child_fluent("li", "hello")
        .add_child_fluent("li", "world");
    println!("{builder}");
}
