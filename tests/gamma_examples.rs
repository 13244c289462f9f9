// One demonstration per Gamma category, checked through the public API.

use std::cell::RefCell;

use gamma_patterns::behavioral::strategy::{
    CreditCardPayment, PayPalPayment, PaymentContext, PaymentStrategy,
};
use gamma_patterns::creational::builder::Computer;
use gamma_patterns::structural::decorator::{Coffee, CoffeeExt, Milk, SimpleCoffee, Sugar};
use gamma_patterns::{Catalog, GammaCategory};
use proptest::prelude::*;

// ============================================================================
// Creational: Builder
// ============================================================================

#[test]
fn test_computer_description() {
    let computer = Computer::builder()
        .cpu("Intel i7")
        .ram("16GB")
        .storage("1TB SSD")
        .build();

    assert_eq!(
        computer.description(),
        "CPU: Intel i7, RAM: 16GB, Storage: 1TB SSD"
    );
}

// ============================================================================
// Structural: Decorator
// ============================================================================

#[test]
fn test_coffee_with_milk_and_sugar_costs_eight() {
    let coffee = Sugar::new(Milk::new(SimpleCoffee));
    assert_eq!(coffee.cost(), 8);

    let reversed = Milk::new(Sugar::new(SimpleCoffee));
    assert_eq!(reversed.cost(), 8);
}

fn wrap_all(increments: &[u32]) -> Box<dyn Coffee> {
    increments
        .iter()
        .fold(Box::new(SimpleCoffee) as Box<dyn Coffee>, |coffee, &amount| {
            Box::new(coffee.with_extra("extra", amount)) as Box<dyn Coffee>
        })
}

#[test]
fn test_extra_at_u32_max() {
    let coffee = wrap_all(&[u32::MAX, u32::MAX]);
    assert_eq!(coffee.cost(), 5 + 2 * u64::from(u32::MAX));
}

proptest! {
    #[test]
    fn prop_cost_is_base_plus_increments(increments in prop::collection::vec(any::<u32>(), 0..16)) {
        let coffee = wrap_all(&increments);
        let expected = 5 + increments.iter().map(|&i| u64::from(i)).sum::<u64>();
        prop_assert_eq!(coffee.cost(), expected);
    }

    #[test]
    fn prop_wrap_order_does_not_change_cost(
        increments in prop::collection::vec(any::<u32>(), 0..16),
        rotate in 0usize..16,
    ) {
        let mut reordered = increments.clone();
        if !reordered.is_empty() {
            let by = rotate % reordered.len();
            reordered.rotate_left(by);
        }
        reordered.reverse();

        prop_assert_eq!(wrap_all(&increments).cost(), wrap_all(&reordered).cost());
    }
}

// ============================================================================
// Behavioral: Strategy
// ============================================================================

#[test]
fn test_two_contexts_are_independent() {
    let card = PaymentContext::new(CreditCardPayment);
    let paypal = PaymentContext::new(PayPalPayment);

    assert_eq!(card.pay(100), "Paid 100 using Credit Card");
    assert_eq!(paypal.pay(200), "Paid 200 using PayPal");
}

struct Spy<'a> {
    seen: &'a RefCell<Vec<u32>>,
}

impl PaymentStrategy for Spy<'_> {
    fn name(&self) -> &str {
        "spy"
    }

    fn pay(&self, amount: u32) -> String {
        self.seen.borrow_mut().push(amount);
        String::new()
    }
}

#[test]
fn test_each_context_reaches_only_its_strategy() {
    let seen_a = RefCell::new(Vec::new());
    let seen_b = RefCell::new(Vec::new());
    let a = PaymentContext::new(Spy { seen: &seen_a });
    let b = PaymentContext::new(Spy { seen: &seen_b });

    a.pay(100);
    b.pay(200);
    a.pay(300);

    assert_eq!(*seen_a.borrow(), vec![100, 300]);
    assert_eq!(*seen_b.borrow(), vec![200]);
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_names_one_example_per_category() {
    let catalog = Catalog::embedded().unwrap();

    for (category, name) in [
        (GammaCategory::Creational, "Builder"),
        (GammaCategory::Structural, "Decorator"),
        (GammaCategory::Behavioral, "Strategy"),
    ] {
        let entry = catalog.category(category);
        assert!(
            entry.patterns.iter().any(|p| p.name == name),
            "{name} missing from {category}"
        );
    }
}

#[test]
fn test_catalog_from_file_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
        [[categories]]
        category = "creational"
        summary = "construction"

        [[categories]]
        category = "structural"
        summary = "composition"

        [[categories]]
        category = "behavioral"
        summary = "interaction"

        [[categories.patterns]]
        name = "Observer"
        summary = "notify subscribers"
        module = "behavioral::observer"
        "#,
    )
    .unwrap();

    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(
        catalog.find_pattern("observer").map(|(c, _)| c),
        Some(GammaCategory::Behavioral)
    );
    assert_eq!(catalog.patterns().count(), 1);
}
