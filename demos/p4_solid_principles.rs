//! Pattern 4: SOLID Principles
//! Example: The Five Principles Side by Side
//!
//! Run with: cargo run --example p4_solid_principles

use colored::Colorize;
use gamma_patterns::logging::init_logging;
use gamma_patterns::principles::dependency_inversion::{
    research_tightly_coupled, Person, Relationships, Research,
};
use gamma_patterns::principles::interface_segregation::{
    copy, Fax, FaxMachine, Machine, MyPrinter, OldFashionedPrinter, Photocopier, Printer,
};
use gamma_patterns::principles::liskov::{
    use_rectangle, use_shape, CoupledSquare, Rectangle, RectangleShape, SquareShape,
};
use gamma_patterns::principles::open_closed::{
    Color, ColorSpecification, Filter, Product, ProductFilter, Size, SizeSpecification,
};
use gamma_patterns::principles::single_responsibility::{Journal, PersistenceManager};
use gamma_patterns::PatternError;

fn main() -> gamma_patterns::Result<()> {
    init_logging();

    println!("{}", "=== Single Responsibility ===".bold());
    let mut journal = Journal::new();
    journal.add_entry("I ate Poha today, it was very yummy.");
    journal.add_entry("Now I am learning System Design at the office.");
    journal.add_entry("I think I need to revise my OOP concepts.");
    journal.remove_entry(1)?;
    println!("{journal}");

    // Removed together with its directory when `dir` drops.
    let dir =
        tempfile::tempdir().map_err(|err| PatternError::io(std::env::temp_dir(), err))?;
    let path = dir.path().join("journal.txt");
    PersistenceManager::save_to_file(&journal, &path)?;
    println!("Loaded from {}:\n{}", path.display(), PersistenceManager::load_from_file(&path)?);

    println!("\n{}", "=== Open/Closed ===".bold());
    let products = vec![
        Product::new("Apple", Color::Red, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("Room", Color::Blue, Size::Large),
    ];
    for p in ProductFilter.filter(&products, &ColorSpecification(Color::Green)) {
        println!("{} is green", p.name);
    }
    let large_blue = SizeSpecification(Size::Large) & ColorSpecification(Color::Blue);
    for p in ProductFilter.filter(&products, &large_blue) {
        println!("{} is large and blue", p.name);
    }

    println!("\n{}", "=== Liskov Substitution ===".bold());
    let mut rc = Rectangle::new(2, 3);
    println!("Rectangle: {}", use_rectangle(&mut rc));
    let mut sq = CoupledSquare::new(5);
    println!("Square:    {}", use_rectangle(&mut sq).to_string().red());
    println!("{}", use_shape(&RectangleShape::new(4, 5)));
    println!("{}", use_shape(&SquareShape::new(4)));

    println!("\n{}", "=== Interface Segregation ===".bold());
    let old = OldFashionedPrinter;
    println!("{}", old.print("Invoice.docx")?);
    if let Err(e) = old.scan("Invoice.docx") {
        println!("{}", format!("Error: {e}").red());
    }
    println!("{}", MyPrinter.print("Notes.txt"));
    for line in copy(&Photocopier, "Document1.pdf") {
        println!("{line}");
    }
    println!("{}", FaxMachine.fax("Letter.docx"));

    println!("\n{}", "=== Dependency Inversion ===".bold());
    let john = Person::new("John");
    let mut relationships = Relationships::new();
    relationships.add_parent_child(&john, &Person::new("Jane"));
    relationships.add_parent_child(&john, &Person::new("Doe"));

    println!("Tightly coupled:");
    for line in research_tightly_coupled(&relationships, "John") {
        println!("  {line}");
    }
    println!("Through RelationshipBrowser:");
    for line in Research::new(&relationships, "John").findings {
        println!("  {line}");
    }

    Ok(())
}
